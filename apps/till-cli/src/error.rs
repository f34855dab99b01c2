//! Error types for the CLI layer.

use thiserror::Error;
use till_core::ValidationError;

/// Failures loading or validating `register.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// A `--tender` argument that cannot be turned into units.
#[derive(Debug, Error)]
pub enum TenderError {
    #[error(transparent)]
    UnknownDenomination(#[from] ValidationError),

    #[error("Invalid count '{value}': expected a positive whole number")]
    InvalidCount { value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
