//! Mass on a horizontal spring, undamped.

use serde::Serialize;
use std::f64::consts::TAU;
use vlab_math::{Vec3, wrap_time};
use vlab_model::{ExperimentKind, ParamStore, Readout};

use crate::{ClockMode, Experiment};

/// Attached mass in kg.
pub const MASS: f64 = 1.0;

/// Stiffness `k` (N/m) and amplitude `A` (m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub amplitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpringDerived {
    /// ω = √(k/m)
    pub angular_frequency: f64,
    /// f = ω / 2π
    pub frequency: f64,
    /// T = 1/f
    pub period: f64,
}

/// Helix drawn between the anchor and the mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coil {
    /// Anchor x, the coil grows towards +x.
    pub origin_x: f64,
    pub rest_length: f64,
    pub radius: f64,
    pub turns: usize,
    pub samples_per_turn: usize,
    /// Helix phase advanced per sample, in radians.
    pub phase_step: f64,
}

impl Default for Coil {
    fn default() -> Self {
        Self {
            origin_x: -3.0,
            rest_length: 3.0,
            radius: 0.2,
            turns: 20,
            samples_per_turn: 20,
            phase_step: 0.5,
        }
    }
}

impl Coil {
    pub fn sample_count(&self) -> usize {
        self.turns * self.samples_per_turn
    }

    /// x of the free end for a given displacement.
    pub fn end_x(&self, displacement: f64) -> f64 {
        self.origin_x + self.rest_length + displacement
    }
}

impl Spring {
    pub fn new(stiffness: f64, amplitude: f64) -> Self {
        Self {
            stiffness,
            amplitude,
        }
    }

    pub fn from_store(store: &ParamStore) -> Self {
        Self::new(store.value("stiffness"), store.value("amplitude"))
    }

    pub fn derived(&self) -> SpringDerived {
        let omega = (self.stiffness / MASS).sqrt();
        let frequency = omega / TAU;
        SpringDerived {
            angular_frequency: omega,
            frequency,
            period: 1.0 / frequency,
        }
    }

    /// x(t) = A cos(ωt)
    pub fn displacement(&self, t: f64) -> f64 {
        let d = self.derived();
        let t = wrap_time(t, d.period);
        self.amplitude * (d.angular_frequency * t).cos()
    }

    /// Points of the stretched coil at time `t`, anchor first.
    pub fn coil_points(&self, t: f64, coil: &Coil) -> Vec<Vec3> {
        let n = coil.sample_count().max(1);
        let span = coil.rest_length + self.displacement(t);
        (0..=n)
            .map(|i| {
                let s = i as f64;
                Vec3::new(
                    coil.origin_x + span * s / n as f64,
                    coil.radius * (coil.phase_step * s).sin(),
                    coil.radius * (coil.phase_step * s).cos(),
                )
            })
            .collect()
    }
}

impl Experiment for Spring {
    fn kind(&self) -> ExperimentKind {
        ExperimentKind::Spring
    }

    fn readouts(&self) -> Vec<Readout> {
        let d = self.derived();
        vec![
            Readout::new("Oscillation Frequency", "f", "Hz", d.frequency),
            Readout::new("Period", "T", "s", d.period),
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
    fn test_reference_values() {
        let d = Spring::new(4.0, 1.0).derived();
        assert_relative_eq!(d.angular_frequency, 2.0);
        assert_relative_eq!(d.frequency, 0.318, epsilon = 1e-3);
        assert_relative_eq!(d.period, 3.14, epsilon = 2e-3);
    }

    #[test]
    fn test_readout_text() {
        let r = Spring::new(4.0, 1.0).readouts();
        assert_eq!(r[0].to_string(), "Oscillation Frequency (f): 0.32 Hz");
        assert_eq!(r[1].to_string(), "Period (T): 3.14 s");
    }

    #[test]
    fn test_stiffer_is_faster() {
        let soft = Spring::new(1.0, 1.0).derived().period;
        let stiff = Spring::new(4.0, 1.0).derived().period;
        assert_relative_eq!(soft / stiff, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_displacement_bounded_and_periodic() {
        let s = Spring::new(9.0, 0.8);
        assert_relative_eq!(s.displacement(0.0), 0.8);
        let period = s.derived().period;
        assert_relative_eq!(s.displacement(period / 2.0), -0.8, epsilon = 1e-12);
        for i in 0..100 {
            assert!(s.displacement(i as f64 * 0.173).abs() <= 0.8 + 1e-12);
        }
    }

    #[test]
    fn test_coil_endpoints() {
        let s = Spring::new(4.0, 1.0);
        let coil = Coil::default();
        let pts = s.coil_points(0.0, &coil);
        assert_eq!(pts.len(), coil.sample_count() + 1);
        assert_relative_eq!(pts[0].x, -3.0);
        assert_relative_eq!(pts[0].z, 0.2);
        assert_relative_eq!(pts[pts.len() - 1].x, coil.end_x(1.0), epsilon = 1e-12);
        for p in &pts {
            assert_relative_eq!((p.y * p.y + p.z * p.z).sqrt(), 0.2, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_coil_compresses() {
        let s = Spring::new(4.0, 1.0);
        let coil = Coil::default();
        let half = s.derived().period / 2.0;
        let pts = s.coil_points(half, &coil);
        assert_relative_eq!(pts[pts.len() - 1].x, coil.end_x(-1.0), epsilon = 1e-9);
    }
}
