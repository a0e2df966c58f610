//! A mounted experiment: parameters, model, scene, camera and clock.

use tracing::debug;
use vlab_math::Vec3;
use vlab_model::{ExperimentKind, ParamStore, Readout};
use vlab_physics::{AnimationClock, Experiment};

use crate::camera::OrbitCamera;
use crate::config::SceneConfig;
use crate::rigs::{self, Rig};
use crate::scene::Scene;

pub struct Stage {
    kind: ExperimentKind,
    store: ParamStore,
    scene: Scene,
    camera: OrbitCamera,
    clock: AnimationClock,
    rig: Box<dyn Rig>,
}

impl Stage {
    pub fn new(kind: ExperimentKind, config: &SceneConfig) -> Self {
        let store = kind.store();
        let mut scene = Scene::new(config.background);
        let rig = rigs::build(kind, &store, &mut scene, config);
        debug!(%kind, objects = scene.len(), "stage built");
        Self {
            kind,
            store,
            scene,
            camera: rigs::camera_preset(kind),
            clock: AnimationClock::new(),
            rig,
        }
    }

    pub fn kind(&self) -> ExperimentKind {
        self.kind
    }

    pub fn store(&self) -> &ParamStore {
        &self.store
    }

    pub fn model(&self) -> &dyn Experiment {
        self.rig.model()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Set one parameter (clamped to its range) and recompute.
    ///
    /// Derived quantities and static geometry are updated before this
    /// returns. The camera and clock are left alone.
    pub fn set_param(&mut self, key: &str, value: f64) -> vlab_model::Result<f64> {
        let applied = self.store.set(key, value)?;
        self.resync();
        debug!(kind = %self.kind, key, applied, "parameter set");
        Ok(applied)
    }

    /// Back to default parameters.
    pub fn reset_params(&mut self) {
        self.store.reset();
        self.resync();
    }

    fn resync(&mut self) {
        self.rig.sync(&self.store, &mut self.scene);
        let t = self.sample_time();
        self.rig.animate(&mut self.scene, t);
    }

    /// Evaluation time for the current elapsed time.
    pub fn sample_time(&self) -> f64 {
        self.model().clock_mode().sample_time(self.clock.elapsed())
    }

    /// Advance by `dt` seconds and write the frame. Returns elapsed time.
    pub fn tick(&mut self, dt: f64) -> f64 {
        let elapsed = self.clock.advance(dt);
        self.animate();
        elapsed
    }

    /// Advance to a frame timestamp in seconds.
    pub fn tick_at(&mut self, now: f64) -> f64 {
        let elapsed = self.clock.tick_at(now);
        self.animate();
        elapsed
    }

    fn animate(&mut self) {
        if self.model().clock_mode().is_animated() {
            let t = self.sample_time();
            self.rig.animate(&mut self.scene, t);
        }
    }

    pub fn readouts(&self) -> Vec<Readout> {
        self.model().readouts()
    }

    /// Position of the first object called `name`.
    pub fn position_of(&self, name: &str) -> Option<Vec3> {
        self.scene.find(name).and_then(|id| self.scene.position(id))
    }
}
