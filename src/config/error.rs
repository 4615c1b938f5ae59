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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Unsupported locale '{0}' and no catalog file configured")]
    UnsupportedLocale(String),

    #[error("Invalid default selection key: {0}")]
    InvalidSelectionKey(String),

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Redis note TTL must be greater than zero")]
    InvalidNoteTtl,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
