//! Math primitives for the virtual lab experiments.
//!
//! Vector aliases follow `nalgebra`, all quantities are SI and `f64`.
//! The experiments are closed-form, so this crate only carries what more
//! than one experiment or the scene layer needs: constants, time wrapping
//! and the regular plane grid used by the wave surface.

pub mod grid;

pub use grid::PlaneGrid;

use nalgebra as na;

/// 3D vector alias.
pub type Vec3 = na::Vector3<f64>;

/// Gravitational acceleration used by every experiment (m/s²).
pub const GRAVITY: f64 = 9.8;

/// Below this magnitude a reciprocal is treated as singular.
///
/// Used by the thin-lens solve: `|1/f - 1/u| < DEGENERATE_EPS` means the
/// image forms at infinity.
pub const DEGENERATE_EPS: f64 = 1e-9;

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Wrap `t` into `[0, period)`.
///
/// A non-finite or non-positive period leaves `t` untouched, so callers can
/// pass the period of a degenerate model without special-casing it.
#[inline]
pub fn wrap_time(t: f64, period: f64) -> f64 {
    if !period.is_finite() || period <= 0.0 {
        return t;
    }
    t.rem_euclid(period)
}

/// `Some(x)` when `x` is finite.
#[inline]
pub fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deg_to_rad() {
        assert_relative_eq!(deg_to_rad(180.0), std::f64::consts::PI);
        assert_relative_eq!(deg_to_rad(45.0), std::f64::consts::FRAC_PI_4);
    }

    #[test]
    fn test_wrap_time_periodic() {
        assert_relative_eq!(wrap_time(5.5, 2.0), 1.5, epsilon = 1e-12);
        assert_relative_eq!(wrap_time(0.25, 2.0), 0.25);
        assert!(wrap_time(4.0, 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_time_degenerate_period() {
        assert_eq!(wrap_time(3.0, 0.0), 3.0);
        assert_eq!(wrap_time(3.0, f64::INFINITY), 3.0);
        assert_eq!(wrap_time(3.0, -1.0), 3.0);
    }

    #[test]
    fn test_finite() {
        assert_eq!(finite(1.0), Some(1.0));
        assert_eq!(finite(f64::NAN), None);
        assert_eq!(finite(f64::INFINITY), None);
    }
}
