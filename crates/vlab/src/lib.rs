//! vlab: virtual physics lab.
//!
//! This is the umbrella crate: it re-exports the lab crates and owns the
//! [`LabConfig`] that ties the backend client and the scenes together.

pub mod config;

pub use config::{ConfigError, LabConfig};

pub use vlab_auth::{self, ApiConfig, ApiRequest, ApiResponse, AuthError, Session, SessionStore};
pub use vlab_content::{self, Certificate, Quiz, QuizError, Route, TogglePanel};
pub use vlab_math::{self, Vec3};
pub use vlab_model::{self, ExperimentKind, ModelError, ParamSpec, ParamStore, Quantity, Readout};
pub use vlab_physics::{self, AnimationClock, ClockMode, Experiment};
pub use vlab_scene::{self, OrbitCamera, Scene, SceneConfig, Stage};

/// Mount the stage for an experiment route slug such as `"lens"` or
/// `"/projectile3d"`.
pub fn stage_for_slug(slug: &str, config: &LabConfig) -> Result<Stage, ModelError> {
    let kind: ExperimentKind = slug.parse()?;
    Ok(Stage::new(kind, &config.scene))
}
