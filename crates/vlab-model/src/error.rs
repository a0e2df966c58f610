//! Error types for vlab-model.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("parameter {key} must be finite, got {value}")]
    NonFinite { key: String, value: f64 },

    #[error("unknown experiment: {0}")]
    UnknownExperiment(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
