//! Projectile launched from the origin over flat ground.

use serde::Serialize;
use vlab_math::{GRAVITY, Vec3, deg_to_rad, wrap_time};
use vlab_model::{ExperimentKind, ParamStore, Readout};

use crate::{ClockMode, Experiment};

/// Launch speed `u` (m/s) and elevation `theta` (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub velocity: f64,
    pub angle_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileDerived {
    /// R = u² sin(2θ) / g
    pub range: f64,
    /// H = u² sin²θ / (2g)
    pub max_height: f64,
    /// T = 2u sinθ / g
    pub flight_time: f64,
}

impl Projectile {
    pub fn new(velocity: f64, angle_deg: f64) -> Self {
        Self {
            velocity,
            angle_deg,
        }
    }

    pub fn from_store(store: &ParamStore) -> Self {
        Self::new(store.value("velocity"), store.value("angle"))
    }

    /// Horizontal and vertical launch velocity components.
    pub fn components(&self) -> (f64, f64) {
        let rad = deg_to_rad(self.angle_deg);
        (self.velocity * rad.cos(), self.velocity * rad.sin())
    }

    pub fn derived(&self) -> ProjectileDerived {
        let rad = deg_to_rad(self.angle_deg);
        let u2 = self.velocity * self.velocity;
        ProjectileDerived {
            range: u2 * (2.0 * rad).sin() / GRAVITY,
            max_height: u2 * rad.sin().powi(2) / (2.0 * GRAVITY),
            flight_time: 2.0 * self.velocity * rad.sin() / GRAVITY,
        }
    }

    /// Ball position at elapsed time `t`, looping every flight.
    ///
    /// Height is clamped at the ground rather than extrapolated below it.
    pub fn position(&self, t: f64) -> Vec3 {
        let (vx, vy) = self.components();
        let t = wrap_time(t, self.derived().flight_time);
        let y = vy * t - 0.5 * GRAVITY * t * t;
        Vec3::new(vx * t, y.max(0.0), 0.0)
    }
}

impl Experiment for Projectile {
    fn kind(&self) -> ExperimentKind {
        ExperimentKind::Projectile
    }

    fn readouts(&self) -> Vec<Readout> {
        let d = self.derived();
        vec![
            Readout::new("Range", "R", "m", d.range),
            Readout::new("Max Height", "H", "m", d.max_height),
            Readout::new("Time of Flight", "T", "s", d.flight_time),
        ]
    }

    fn clock_mode(&self) -> ClockMode {
        ClockMode::Periodic(self.derived().flight_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_values() {
        let d = Projectile::new(15.0, 45.0).derived();
        assert_relative_eq!(d.range, 22.96, epsilon = 5e-3);
        assert_relative_eq!(d.max_height, 5.74, epsilon = 5e-3);
        assert_relative_eq!(d.flight_time, 2.16, epsilon = 5e-3);
    }

    #[test]
    fn test_range_peaks_at_45() {
        let u = 20.0;
        let best = (15..=80)
            .map(|a| (a, Projectile::new(u, a as f64).derived().range))
            .fold((0, f64::MIN), |acc, x| if x.1 > acc.1 { x } else { acc });
        assert_eq!(best.0, 45);
    }

    #[test]
    fn test_position_launch_and_apex() {
        let p = Projectile::new(15.0, 45.0);
        let start = p.position(0.0);
        assert!(start.norm() < 1e-12);

        let d = p.derived();
        let apex = p.position(d.flight_time / 2.0);
        assert_relative_eq!(apex.x, d.range / 2.0, epsilon = 1e-9);
        assert_relative_eq!(apex.y, d.max_height, epsilon = 1e-9);
        assert_eq!(apex.z, 0.0);
    }

    #[test]
    fn test_position_loops_each_flight() {
        let p = Projectile::new(30.0, 60.0);
        let tf = p.derived().flight_time;
        let a = p.position(0.3);
        let b = p.position(0.3 + 2.0 * tf);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    }

    #[test]
    fn test_height_never_negative() {
        let p = Projectile::new(60.0, 80.0);
        let tf = p.derived().flight_time;
        for i in 0..=200 {
            let t = tf * i as f64 / 200.0;
            assert!(p.position(t).y >= 0.0);
        }
    }

    #[test]
    fn test_readout_text() {
        let r = Projectile::new(15.0, 45.0).readouts();
        assert_eq!(r[0].to_string(), "Range (R): 22.96 m");
        assert_eq!(r[1].to_string(), "Max Height (H): 5.74 m");
        assert_eq!(r[2].to_string(), "Time of Flight (T): 2.16 s");
    }
}
