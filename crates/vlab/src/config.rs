//! Lab configuration: backend location and scene geometry.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use vlab_auth::ApiConfig;
use vlab_scene::SceneConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything a host can override. Missing fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub api: ApiConfig,
    pub scene: SceneConfig,
}

impl LabConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LabConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(base_url = %config.api.base_url, "config loaded");
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        let base = &self.api.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidParameter(format!(
                "api.base_url must be an http(s) URL, got {base:?}"
            )));
        }
        let s = &self.scene;
        if s.wave_cells == 0 || s.wave_cells > 400 {
            return Err(ConfigError::InvalidParameter(format!(
                "scene.wave_cells must be in 1..=400, got {}",
                s.wave_cells
            )));
        }
        for (name, value) in [
            ("scene.wave_spacing", s.wave_spacing),
            ("scene.pivot_height", s.pivot_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidParameter(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !s.lens_axis_y.is_finite() {
            return Err(ConfigError::InvalidParameter(
                "scene.lens_axis_y must be finite".to_string(),
            ));
        }
        if s.spring_turns == 0 {
            return Err(ConfigError::InvalidParameter(
                "scene.spring_turns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LabConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.scene.wave_cells, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(LabConfig::from_json_str("{}").unwrap(), LabConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = LabConfig::from_json_str(
            r##"{"api": {"base_url": "https://lab.example.org"},
                "scene": {"lens_axis_y": 2.0, "background": "#f0f8ff"}}"##,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://lab.example.org");
        assert_eq!(config.scene.lens_axis_y, 2.0);
        assert_eq!(config.scene.pivot_height, 5.0);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            LabConfig::from_json_str(r#"{"api": {"base_url": "localhost"}}"#),
            Err(ConfigError::InvalidParameter(_))
        ));
        assert!(matches!(
            LabConfig::from_json_str(r#"{"scene": {"wave_spacing": -1.0}}"#),
            Err(ConfigError::InvalidParameter(_))
        ));
        assert!(matches!(
            LabConfig::from_json_str(r#"{"scene": {"wave_cells": 0}}"#),
            Err(ConfigError::InvalidParameter(_))
        ));
        assert!(matches!(LabConfig::from_json_str("{"), Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            LabConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::IoError(_))
        ));
    }
}
