//! One rig per experiment: builds its objects once, re-syncs static
//! geometry on parameter change and writes transforms every frame.

mod lens;
mod pendulum;
mod projectile;
mod spring;
mod wave;

pub use lens::LensRig;
pub use pendulum::PendulumRig;
pub use projectile::{ProjectileRig, scale_factor};
pub use spring::SpringRig;
pub use wave::WaveRig;

use vlab_math::Vec3;
use vlab_model::{ExperimentKind, ParamStore};
use vlab_physics::Experiment;

use crate::camera::OrbitCamera;
use crate::config::SceneConfig;
use crate::scene::Scene;

pub trait Rig {
    /// Model built from the last synced parameters.
    fn model(&self) -> &dyn Experiment;

    /// Rebuild the model from `store` and update parameter-dependent
    /// geometry. Never touches the camera.
    fn sync(&mut self, store: &ParamStore, scene: &mut Scene);

    /// Write per-frame transforms for evaluation time `t`.
    fn animate(&mut self, scene: &mut Scene, t: f64);
}

/// Add the objects for `kind` to `scene` and return the rig driving them.
pub fn build(kind: ExperimentKind, store: &ParamStore, scene: &mut Scene, config: &SceneConfig) -> Box<dyn Rig> {
    let mut rig: Box<dyn Rig> = match kind {
        ExperimentKind::Projectile => Box::new(ProjectileRig::new(store, scene)),
        ExperimentKind::Pendulum => Box::new(PendulumRig::new(store, scene, config)),
        ExperimentKind::Lens => Box::new(LensRig::new(store, scene, config)),
        ExperimentKind::Wave => Box::new(WaveRig::new(store, scene, config)),
        ExperimentKind::Spring => Box::new(SpringRig::new(store, scene, config)),
    };
    rig.sync(store, scene);
    rig.animate(scene, 0.0);
    rig
}

/// Initial camera of each experiment page.
pub fn camera_preset(kind: ExperimentKind) -> OrbitCamera {
    match kind {
        ExperimentKind::Projectile => OrbitCamera::looking_from(Vec3::new(10.0, 8.0, 22.0), Vec3::new(10.0, 3.0, 0.0), 50.0),
        ExperimentKind::Pendulum => OrbitCamera::looking_from(Vec3::new(0.0, 3.0, 10.0), Vec3::zeros(), 50.0),
        ExperimentKind::Lens => OrbitCamera::looking_from(Vec3::new(0.0, 4.0, 18.0), Vec3::zeros(), 45.0),
        ExperimentKind::Wave => OrbitCamera::looking_from(Vec3::new(0.0, 6.0, 10.0), Vec3::zeros(), 45.0),
        ExperimentKind::Spring => OrbitCamera::looking_from(Vec3::new(0.0, 2.0, 8.0), Vec3::zeros(), 50.0),
    }
}
