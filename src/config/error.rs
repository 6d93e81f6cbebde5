//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("At least one decision maker must be allowed")]
    InvalidMaxDecisionMakers,

    #[error("Score decimal places must be at most {max}, got {actual}")]
    InvalidDecimalPlaces { max: u32, actual: u32 },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
