//! Static slider descriptions.

use serde::Serialize;

/// How a slider label prints its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueFormat {
    /// `Label (unit): value`, decimals taken from the step.
    Stepped,
    /// `Label: value unit` with a fixed number of decimals.
    Fixed(usize),
}

/// One bounded numeric parameter of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    /// Stable key used by the store and the DOM (`velocity`, `angle`, ...).
    pub key: &'static str,
    /// Human label shown next to the slider.
    pub label: &'static str,
    /// Unit suffix, empty when dimensionless.
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    /// Slider increment.
    pub step: f64,
    pub default: f64,
    pub value_format: ValueFormat,
}

impl ParamSpec {
    /// Clamp `value` into `[min, max]`.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of decimals the slider step implies (for labels).
    pub fn decimals(&self) -> usize {
        let mut step = self.step;
        let mut decimals = 0;
        while decimals < 6 && (step - step.round()).abs() > 1e-9 {
            step *= 10.0;
            decimals += 1;
        }
        decimals
    }

    /// Slider label text, e.g. `Velocity (m/s): 15` or
    /// `Object Distance (u): 6.00 m`.
    pub fn format_label(&self, value: f64) -> String {
        match self.value_format {
            ValueFormat::Stepped if self.unit.is_empty() => {
                format!("{}: {:.*}", self.label, self.decimals(), value)
            }
            ValueFormat::Stepped => {
                format!("{} ({}): {:.*}", self.label, self.unit, self.decimals(), value)
            }
            ValueFormat::Fixed(decimals) if self.unit.is_empty() => {
                format!("{}: {:.*}", self.label, decimals, value)
            }
            ValueFormat::Fixed(decimals) => {
                format!("{}: {:.*} {}", self.label, decimals, value, self.unit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANGLE: ParamSpec = ParamSpec {
        key: "angle",
        label: "Angle",
        unit: "°",
        min: 15.0,
        max: 80.0,
        step: 1.0,
        default: 45.0,
        value_format: ValueFormat::Stepped,
    };

    const AMP: ParamSpec = ParamSpec {
        key: "amplitude",
        label: "Amplitude",
        unit: "rad",
        min: 0.05,
        max: 0.8,
        step: 0.01,
        default: 0.3,
        value_format: ValueFormat::Stepped,
    };

    #[test]
    fn test_clamp() {
        assert_eq!(ANGLE.clamp(10.0), 15.0);
        assert_eq!(ANGLE.clamp(90.0), 80.0);
        assert_eq!(ANGLE.clamp(33.0), 33.0);
    }

    #[test]
    fn test_decimals_and_label() {
        assert_eq!(ANGLE.decimals(), 0);
        assert_eq!(AMP.decimals(), 2);
        assert_eq!(ANGLE.format_label(45.0), "Angle (°): 45");
        assert_eq!(AMP.format_label(0.3), "Amplitude (rad): 0.30");
    }

    #[test]
    fn test_fixed_label() {
        let lens = crate::ExperimentKind::Lens.params();
        assert_eq!(lens[0].format_label(6.0), "Object Distance (u): 6.00 m");
        assert_eq!(lens[1].format_label(2.35), "Focal Length (f): 2.35 m");

        let unitless = ParamSpec {
            unit: "",
            value_format: ValueFormat::Fixed(3),
            ..AMP
        };
        assert_eq!(unitless.format_label(0.5), "Amplitude: 0.500");
    }
}
