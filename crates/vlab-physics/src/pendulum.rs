//! Simple pendulum in the small-angle approximation.
//!
//! The period ignores amplitude and there is no damping. Both are the
//! documented approximation of this experiment, not omissions.

use serde::Serialize;
use std::f64::consts::TAU;
use vlab_math::{GRAVITY, Vec3, wrap_time};
use vlab_model::{ExperimentKind, ParamStore, Readout};

use crate::{ClockMode, Experiment};

/// String length `L` (m) and angular amplitude `a` (rad).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    pub length: f64,
    pub amplitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PendulumDerived {
    /// ω = √(g/L)
    pub angular_frequency: f64,
    /// T = 2π √(L/g)
    pub period: f64,
    /// f = 1/T
    pub frequency: f64,
}

impl Pendulum {
    pub fn new(length: f64, amplitude: f64) -> Self {
        Self { length, amplitude }
    }

    pub fn from_store(store: &ParamStore) -> Self {
        Self::new(store.value("length"), store.value("amplitude"))
    }

    pub fn derived(&self) -> PendulumDerived {
        let omega = (GRAVITY / self.length).sqrt();
        let period = TAU * (self.length / GRAVITY).sqrt();
        PendulumDerived {
            angular_frequency: omega,
            period,
            frequency: 1.0 / period,
        }
    }

    /// θ(t) = a cos(ωt)
    pub fn angle(&self, t: f64) -> f64 {
        let d = self.derived();
        let t = wrap_time(t, d.period);
        self.amplitude * (d.angular_frequency * t).cos()
    }

    /// Bob position relative to the pivot.
    pub fn bob_offset(&self, t: f64) -> Vec3 {
        let theta = self.angle(t);
        Vec3::new(self.length * theta.sin(), -self.length * theta.cos(), 0.0)
    }

    /// Bob position for a pivot placed at `pivot`.
    pub fn bob_position(&self, pivot: &Vec3, t: f64) -> Vec3 {
        pivot + self.bob_offset(t)
    }
}

impl Experiment for Pendulum {
    fn kind(&self) -> ExperimentKind {
        ExperimentKind::Pendulum
    }

    fn readouts(&self) -> Vec<Readout> {
        let d = self.derived();
        vec![
            Readout::new("Period", "T", "s", d.period),
            Readout::new("Frequency", "f", "Hz", d.frequency),
        ]
    }

    fn clock_mode(&self) -> ClockMode {
        ClockMode::Periodic(self.derived().period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_period_formula() {
        let d = Pendulum::new(4.0, 0.3).derived();
        assert_relative_eq!(d.period, 4.014, epsilon = 1e-3);
        assert_relative_eq!(d.frequency * d.period, 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.angular_frequency * d.period, TAU, epsilon = 1e-12);
    }

    #[test]
    fn test_period_independent_of_amplitude() {
        for length in [2.0, 4.0, 8.0] {
            let a = Pendulum::new(length, 0.05).derived().period;
            let b = Pendulum::new(length, 0.8).derived().period;
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_longer_string_swings_slower() {
        let short = Pendulum::new(2.0, 0.3).derived().period;
        let long = Pendulum::new(8.0, 0.3).derived().period;
        assert_relative_eq!(long / short, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bob_starts_at_amplitude() {
        let p = Pendulum::new(4.0, 0.3);
        assert_relative_eq!(p.angle(0.0), 0.3);
        let bob = p.bob_offset(0.0);
        assert_relative_eq!(bob.x, 4.0 * 0.3f64.sin());
        assert_relative_eq!(bob.y, -4.0 * 0.3f64.cos());
    }

    #[test]
    fn test_bob_stays_on_circle() {
        let p = Pendulum::new(5.0, 0.7);
        let pivot = Vec3::new(0.0, 5.0, 0.0);
        for i in 0..50 {
            let bob = p.bob_position(&pivot, i as f64 * 0.137);
            assert_relative_eq!((bob - pivot).norm(), 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_half_period_mirrors() {
        let p = Pendulum::new(3.0, 0.4);
        let half = p.derived().period / 2.0;
        assert_relative_eq!(p.angle(half), -0.4, epsilon = 1e-12);
    }
}
