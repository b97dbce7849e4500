//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `IDENTITY_BRIDGE_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use identity_bridge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod bridge_token;
mod error;
mod oauth;
mod saml;

pub use bridge_token::BridgeTokenConfig;
pub use error::{ConfigError, ValidationError};
pub use oauth::OAuthClientConfig;
pub use saml::SamlConfig;

use serde::Deserialize;

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Root application configuration
///
/// Contains all configuration sections for the identity bridge.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Google OAuth2 client configuration
    #[serde(default)]
    pub google: OAuthClientConfig,

    /// SAML identity provider configuration
    #[serde(default)]
    pub saml: SamlConfig,

    /// Bridge token signing configuration
    #[serde(default)]
    pub bridge_token: BridgeTokenConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `IDENTITY_BRIDGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `IDENTITY_BRIDGE__GOOGLE__CLIENT_ID=...` -> `google.client_id = ...`
    /// - `IDENTITY_BRIDGE__BRIDGE_TOKEN__SIGNING_SECRET=...` -> `bridge_token.signing_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected
    /// types. Missing required values surface later, from [`validate()`].
    ///
    /// [`validate()`]: AppConfig::validate
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("IDENTITY_BRIDGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Required credentials present for every provider
    /// - Callback paths absolute
    /// - Bridge token lifetime within bounds
    /// - Production-specific requirements (e.g., HTTPS entry point)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.google.validate()?;
        self.saml.validate(&self.environment)?;
        self.bridge_token.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
