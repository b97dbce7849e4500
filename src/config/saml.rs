//! SAML identity provider configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::Environment;

/// SAML identity provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SamlConfig {
    /// IdP single sign-on URL logins are redirected to
    #[serde(default)]
    pub entry_point: String,

    /// Issuer (service provider entity id) asserted in requests
    #[serde(default)]
    pub issuer: String,

    /// IdP signing certificate (PEM)
    #[serde(default)]
    pub certificate: String,

    /// Expected audience restriction in assertions
    #[serde(default)]
    pub audience: String,

    /// Path the IdP posts assertions back to
    #[serde(default = "default_saml_callback_path")]
    pub callback_path: String,
}

impl SamlConfig {
    /// Validate SAML configuration
    ///
    /// In production, requires HTTPS for the entry point.
    /// In development, allows localhost with HTTP/HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.entry_point.is_empty() {
            return Err(ValidationError::MissingRequired("SAML_ENTRY_POINT"));
        }
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("SAML_ISSUER"));
        }
        if self.certificate.is_empty() {
            return Err(ValidationError::MissingRequired("SAML_CERTIFICATE"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("SAML_AUDIENCE"));
        }
        if !self.callback_path.starts_with('/') {
            return Err(ValidationError::InvalidCallbackPath);
        }

        // In production, require HTTPS
        if *environment == Environment::Production && !self.entry_point.starts_with("https://") {
            return Err(ValidationError::EntryPointMustBeHttps);
        }

        Ok(())
    }
}

impl Default for SamlConfig {
    fn default() -> Self {
        Self {
            entry_point: String::new(),
            issuer: String::new(),
            certificate: String::new(),
            audience: String::new(),
            callback_path: default_saml_callback_path(),
        }
    }
}

fn default_saml_callback_path() -> String {
    "/api/v1/auth/callback/saml".to_string()
}
