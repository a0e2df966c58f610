use serde::{Deserialize, Serialize};
use vlab_math::Vec3;

use crate::scene::Color;

/// Geometry and look of the experiment scenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Cells per side of the wave surface.
    pub wave_cells: usize,
    /// Vertex spacing of the wave surface.
    pub wave_spacing: f64,
    /// Helix turns drawn for the spring.
    pub spring_turns: usize,
    /// Height of the lens optical axis above the ground.
    pub lens_axis_y: f64,
    /// Height of the pendulum pivot.
    pub pivot_height: f64,
    pub background: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            wave_cells: 100,
            wave_spacing: 0.15,
            spring_turns: 20,
            lens_axis_y: 1.5,
            pivot_height: 5.0,
            background: Color::rgb(0xee, 0xee, 0xff),
        }
    }
}

impl SceneConfig {
    pub fn pivot(&self) -> Vec3 {
        Vec3::new(0.0, self.pivot_height, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: SceneConfig = serde_json::from_str(r#"{"wave_cells": 40}"#).unwrap();
        assert_eq!(cfg.wave_cells, 40);
        assert_eq!(cfg.wave_spacing, 0.15);
        assert_eq!(cfg.background.to_hex(), "#eeeeff");
    }
}
