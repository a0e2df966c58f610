use vlab::{stage_for_slug, LabConfig, Stage};
use wasm_bindgen::prelude::*;

/// An experiment stage driven from JavaScript.
#[wasm_bindgen]
pub struct WasmStage {
    stage: Stage,
}

#[wasm_bindgen]
impl WasmStage {
    /// Stage for a route slug such as `"wave"` or `"/projectile3d"`.
    #[wasm_bindgen(constructor)]
    pub fn new(slug: &str) -> Result<WasmStage, JsError> {
        let stage = stage_for_slug(slug, &LabConfig::default())?;
        Ok(WasmStage { stage })
    }

    pub fn kind(&self) -> String {
        self.stage.kind().slug().to_string()
    }

    pub fn title(&self) -> String {
        self.stage.kind().title().to_string()
    }

    /// Parameter keys in slider order.
    pub fn param_keys(&self) -> Vec<String> {
        self.stage
            .store()
            .specs()
            .iter()
            .map(|s| s.key.to_string())
            .collect()
    }

    pub fn param(&self, key: &str) -> Result<f64, JsError> {
        Ok(self.stage.store().get(key)?)
    }

    /// Set a parameter; returns the clamped value actually stored.
    pub fn set_param(&mut self, key: &str, value: f64) -> Result<f64, JsError> {
        Ok(self.stage.set_param(key, value)?)
    }

    pub fn reset_params(&mut self) {
        self.stage.reset_params();
    }

    /// Advance by `dt` seconds. Returns elapsed time.
    pub fn tick(&mut self, dt: f64) -> f64 {
        self.stage.tick(dt)
    }

    /// Time the scene was last evaluated at.
    pub fn sample_time(&self) -> f64 {
        self.stage.sample_time()
    }

    /// `[x, y, z]` of the named object, empty if there is none.
    pub fn position(&self, name: &str) -> Vec<f64> {
        self.stage
            .position_of(name)
            .map(|p| vec![p.x, p.y, p.z])
            .unwrap_or_default()
    }

    /// Readouts as display lines, e.g. `Range (R): 22.96 m`.
    pub fn readouts(&self) -> Vec<String> {
        self.stage.readouts().iter().map(ToString::to_string).collect()
    }

    /// Readouts as a JSON array of `{label, symbol, unit, value}`, plus `text`
    /// for qualitative lines.
    pub fn readouts_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.stage.readouts())?)
    }
}
