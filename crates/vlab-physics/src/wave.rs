//! Travelling surface wave sampled on a horizontal grid.

use serde::Serialize;
use std::f64::consts::TAU;
use vlab_math::PlaneGrid;
use vlab_model::{ExperimentKind, ParamStore, Quantity, Readout};

use crate::{ClockMode, Experiment};

/// Wavelength used for the derived frequency.
pub const WAVELENGTH: f64 = TAU;
/// Spatial factor inside the sines.
const WAVE_NUMBER: f64 = 2.0;

/// Wave speed `c` and amplitude `A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub speed: f64,
    pub amplitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveDerived {
    /// f = c / λ
    pub frequency: Quantity,
    /// T = 1 / f
    pub period: Quantity,
}

impl Wave {
    pub fn new(speed: f64, amplitude: f64) -> Self {
        Self { speed, amplitude }
    }

    pub fn from_store(store: &ParamStore) -> Self {
        Self::new(store.value("speed"), store.value("amplitude"))
    }

    pub fn derived(&self) -> WaveDerived {
        let frequency = self.speed / WAVELENGTH;
        let period = if frequency > 0.0 {
            Quantity::from_f64(1.0 / frequency)
        } else {
            Quantity::Infinite
        };
        WaveDerived {
            frequency: Quantity::from_f64(frequency),
            period,
        }
    }

    /// y(x, z, t) = A sin(2(x + ct)) + A cos(2(z + ct))
    #[inline]
    pub fn height(&self, x: f64, z: f64, t: f64) -> f64 {
        let shift = self.speed * t;
        self.amplitude * (WAVE_NUMBER * (x + shift)).sin()
            + self.amplitude * (WAVE_NUMBER * (z + shift)).cos()
    }

    /// Evaluate the surface over every vertex of `grid` into `out`.
    ///
    /// `out` is resized to the vertex count and reused between frames.
    pub fn fill_heights(&self, grid: &PlaneGrid, t: f64, out: &mut Vec<f64>) {
        out.clear();
        out.extend(grid.vertices().map(|(x, z)| self.height(x, z, t)));
    }
}

impl Experiment for Wave {
    fn kind(&self) -> ExperimentKind {
        ExperimentKind::Wave
    }

    fn readouts(&self) -> Vec<Readout> {
        let d = self.derived();
        vec![
            Readout::new("Frequency", "f", "Hz", 0.0).with_quantity(d.frequency),
            Readout::new("Period", "T", "s", 0.0).with_quantity(d.period),
        ]
    }

    fn clock_mode(&self) -> ClockMode {
        ClockMode::Monotonic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frequency_and_period() {
        let d = Wave::new(1.0, 0.2).derived();
        assert_relative_eq!(d.frequency.finite().unwrap(), 1.0 / TAU);
        assert_relative_eq!(d.period.finite().unwrap(), TAU, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_speed_has_no_period() {
        let d = Wave::new(0.0, 0.2).derived();
        assert_eq!(d.frequency, Quantity::Finite(0.0));
        assert_eq!(d.period, Quantity::Infinite);
    }

    #[test]
    fn test_height_at_origin() {
        let w = Wave::new(1.0, 0.5);
        // sin(0) + cos(0)
        assert_relative_eq!(w.height(0.0, 0.0, 0.0), 0.5);
        assert!(w.height(1.3, -0.7, 4.2).abs() <= 1.0 + 1e-12);
    }

    #[test]
    fn test_surface_travels() {
        let w = Wave::new(2.0, 0.3);
        // Shifting x by -c*t undoes the time shift of the x-term.
        let t = 0.8;
        let a = w.height(0.4 - 2.0 * t, 0.0, t) - 0.3 * (2.0 * (0.0 + 2.0 * t)).cos();
        let b = 0.3 * (2.0f64 * 0.4).sin();
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn test_fill_heights_reuses_buffer() {
        let w = Wave::new(1.0, 0.2);
        let grid = PlaneGrid::new(10, 0.15);
        let mut buf = Vec::new();
        w.fill_heights(&grid, 0.0, &mut buf);
        assert_eq!(buf.len(), grid.vertex_count());
        let before = buf.clone();
        w.fill_heights(&grid, 0.5, &mut buf);
        assert_eq!(buf.len(), grid.vertex_count());
        assert_ne!(before, buf);
        let (x, z) = grid.vertex(17);
        assert_relative_eq!(buf[17], w.height(x, z, 0.5));
    }
}
