//! Google OAuth2 client configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Google OAuth2 client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthClientConfig {
    /// OAuth2 client ID
    #[serde(default)]
    pub client_id: String,

    /// OAuth2 client secret
    #[serde(default)]
    pub client_secret: String,

    /// Path the provider redirects back to after consent
    #[serde(default = "default_google_callback_path")]
    pub callback_path: String,

    /// Requested scopes (comma-separated); profile and email when unset
    pub scopes: Option<String>,
}

impl OAuthClientConfig {
    /// Get requested scopes as a vector
    pub fn scopes_list(&self) -> Vec<String> {
        self.scopes
            .as_ref()
            .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(default_scopes)
    }

    /// Validate Google OAuth2 configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.client_id.is_empty() {
            return Err(ValidationError::MissingRequired("GOOGLE_CLIENT_ID"));
        }
        if self.client_secret.is_empty() {
            return Err(ValidationError::MissingRequired("GOOGLE_CLIENT_SECRET"));
        }
        if !self.callback_path.starts_with('/') {
            return Err(ValidationError::InvalidCallbackPath);
        }
        Ok(())
    }
}

impl Default for OAuthClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            callback_path: default_google_callback_path(),
            scopes: None,
        }
    }
}

fn default_google_callback_path() -> String {
    "/api/v1/auth/callback/google".to_string()
}

fn default_scopes() -> Vec<String> {
    vec!["profile".to_string(), "email".to_string()]
}
