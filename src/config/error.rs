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

    #[error("Callback path must start with '/'")]
    InvalidCallbackPath,

    #[error("Bridge token lifetime must be between 1 second and 1 day")]
    InvalidTokenLifetime,

    #[error("SAML entry point must use HTTPS in production")]
    EntryPointMustBeHttps,
}
