//! The five experiments and their parameter tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ModelError, ParamSpec, ParamStore, ValueFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentKind {
    Projectile,
    Pendulum,
    Lens,
    Wave,
    Spring,
}

pub static PROJECTILE_PARAMS: [ParamSpec; 2] = [
    ParamSpec {
        key: "velocity",
        label: "Velocity",
        unit: "m/s",
        min: 5.0,
        max: 60.0,
        step: 1.0,
        default: 15.0,
        value_format: ValueFormat::Stepped,
    },
    ParamSpec {
        key: "angle",
        label: "Angle",
        unit: "°",
        min: 15.0,
        max: 80.0,
        step: 1.0,
        default: 45.0,
        value_format: ValueFormat::Stepped,
    },
];

pub static PENDULUM_PARAMS: [ParamSpec; 2] = [
    ParamSpec {
        key: "length",
        label: "Length",
        unit: "m",
        min: 2.0,
        max: 8.0,
        step: 1.0,
        default: 4.0,
        value_format: ValueFormat::Stepped,
    },
    ParamSpec {
        key: "amplitude",
        label: "Amplitude",
        unit: "rad",
        min: 0.05,
        max: 0.8,
        step: 0.01,
        default: 0.3,
        value_format: ValueFormat::Stepped,
    },
];

pub static LENS_PARAMS: [ParamSpec; 2] = [
    ParamSpec {
        key: "object_distance",
        label: "Object Distance (u)",
        unit: "m",
        min: 2.0,
        max: 20.0,
        step: 0.1,
        default: 6.0,
        value_format: ValueFormat::Fixed(2),
    },
    ParamSpec {
        key: "focal_length",
        label: "Focal Length (f)",
        unit: "m",
        min: 0.5,
        max: 10.0,
        step: 0.1,
        default: 2.0,
        value_format: ValueFormat::Fixed(2),
    },
];

pub static WAVE_PARAMS: [ParamSpec; 2] = [
    ParamSpec {
        key: "speed",
        label: "Wave Speed",
        unit: "",
        min: 0.1,
        max: 5.0,
        step: 0.1,
        default: 1.0,
        value_format: ValueFormat::Stepped,
    },
    ParamSpec {
        key: "amplitude",
        label: "Amplitude",
        unit: "",
        min: 0.05,
        max: 1.0,
        step: 0.05,
        default: 0.2,
        value_format: ValueFormat::Stepped,
    },
];

pub static SPRING_PARAMS: [ParamSpec; 2] = [
    ParamSpec {
        key: "stiffness",
        label: "Spring Constant (k)",
        unit: "N/m",
        min: 1.0,
        max: 10.0,
        step: 1.0,
        default: 4.0,
        value_format: ValueFormat::Stepped,
    },
    ParamSpec {
        key: "amplitude",
        label: "Amplitude",
        unit: "m",
        min: 0.5,
        max: 3.0,
        step: 0.1,
        default: 1.0,
        value_format: ValueFormat::Stepped,
    },
];

impl ExperimentKind {
    pub const ALL: [ExperimentKind; 5] = [
        ExperimentKind::Projectile,
        ExperimentKind::Pendulum,
        ExperimentKind::Lens,
        ExperimentKind::Wave,
        ExperimentKind::Spring,
    ];

    /// Parameter table of this experiment.
    pub fn params(self) -> &'static [ParamSpec] {
        match self {
            ExperimentKind::Projectile => &PROJECTILE_PARAMS,
            ExperimentKind::Pendulum => &PENDULUM_PARAMS,
            ExperimentKind::Lens => &LENS_PARAMS,
            ExperimentKind::Wave => &WAVE_PARAMS,
            ExperimentKind::Spring => &SPRING_PARAMS,
        }
    }

    /// Fresh store at default values.
    pub fn store(self) -> ParamStore {
        ParamStore::new(self.params())
    }

    /// Route slug, without the leading slash.
    pub fn slug(self) -> &'static str {
        match self {
            ExperimentKind::Projectile => "projectile3d",
            ExperimentKind::Pendulum => "pendulum3d",
            ExperimentKind::Lens => "lens",
            ExperimentKind::Wave => "wave",
            ExperimentKind::Spring => "spring",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ExperimentKind::Projectile => "Projectile Motion (3D)",
            ExperimentKind::Pendulum => "Pendulum (3D Simulation)",
            ExperimentKind::Lens => "Lens Simulation (3D)",
            ExperimentKind::Wave => "Wave Simulation (3D)",
            ExperimentKind::Spring => "Spring-Mass Oscillator (3D)",
        }
    }

    /// Short name used on home page buttons.
    pub fn short_name(self) -> &'static str {
        match self {
            ExperimentKind::Projectile => "Projectile Motion",
            ExperimentKind::Pendulum => "Pendulum",
            ExperimentKind::Lens => "Lens Simulation",
            ExperimentKind::Wave => "Wave Simulation",
            ExperimentKind::Spring => "Spring-Mass",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ExperimentKind::Projectile => "\u{1F3AF}",
            ExperimentKind::Pendulum => "\u{23F3}",
            ExperimentKind::Lens => "\u{1F50D}",
            ExperimentKind::Wave => "\u{1F30A}",
            ExperimentKind::Spring => "\u{1F300}",
        }
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ExperimentKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_matches('/');
        ExperimentKind::ALL
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or_else(|| ModelError::UnknownExperiment(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_range() {
        for kind in ExperimentKind::ALL {
            for spec in kind.params() {
                assert!(spec.contains(spec.default), "{kind}: {}", spec.key);
                assert!(spec.min < spec.max);
                assert!(spec.step > 0.0);
            }
        }
    }

    #[test]
    fn test_slug_round_trip() {
        for kind in ExperimentKind::ALL {
            assert_eq!(kind.slug().parse::<ExperimentKind>().unwrap(), kind);
        }
        assert_eq!("/lens".parse::<ExperimentKind>().unwrap(), ExperimentKind::Lens);
        assert!("quiz".parse::<ExperimentKind>().is_err());
    }

    #[test]
    fn test_serde_name() {
        let json = serde_json::to_string(&ExperimentKind::Spring).unwrap();
        assert_eq!(json, "\"spring\"");
    }
}
