//! Closed-form physics models for the five lab experiments.
//!
//! Every model is a plain `Copy` struct built from a [`ParamStore`]. Derived
//! quantities and time-domain positions are pure functions of the struct:
//! no solver iterates and nothing is cached, so recomputing from the same
//! parameters is bit-identical.

pub mod clock;
pub mod lens;
pub mod pendulum;
pub mod projectile;
pub mod spring;
pub mod wave;

pub use clock::{AnimationClock, ClockMode};
pub use lens::{ImageDistance, ImageKind, ImageNature, Lens, Ray};
pub use pendulum::Pendulum;
pub use projectile::Projectile;
pub use spring::{Coil, Spring};
pub use wave::Wave;

pub use vlab_model::{ExperimentKind, ParamStore, Quantity, Readout};

/// Common face of the five models.
///
/// Object safe, so a page can hold whichever experiment is mounted as
/// `Box<dyn Experiment>`.
pub trait Experiment {
    fn kind(&self) -> ExperimentKind;

    /// Derived quantities for the results panel, in display order.
    fn readouts(&self) -> Vec<Readout>;

    /// How elapsed time maps to evaluation time for this model.
    fn clock_mode(&self) -> ClockMode;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_report_their_kind() {
        let models: [Box<dyn Experiment>; 5] = [
            Box::new(Projectile::from_store(&ExperimentKind::Projectile.store())),
            Box::new(Pendulum::from_store(&ExperimentKind::Pendulum.store())),
            Box::new(Lens::from_store(&ExperimentKind::Lens.store())),
            Box::new(Wave::from_store(&ExperimentKind::Wave.store())),
            Box::new(Spring::from_store(&ExperimentKind::Spring.store())),
        ];
        for (model, kind) in models.iter().zip(ExperimentKind::ALL) {
            assert_eq!(model.kind(), kind);
            assert!(!model.readouts().is_empty());
        }
    }
}
