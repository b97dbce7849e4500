//! SAML provider strategy.
//!
//! Handles the assertion leg of the SAML login flow. Signature and
//! audience checks on the assertion happen in the protocol collaborator
//! upstream; this adapter receives the validated assertion attributes
//! and:
//!
//! 1. Extracts the subject (`nameID`) and an email address
//! 2. Resolves or provisions the internal account via `LoginResolver`
//! 3. Returns the resolved login with its signed bridge token
//!
//! The email comes from an explicit `email` attribute, or from the
//! subject itself when the IdP declares an email-format `nameID`.
//! Assertions carrying neither are rejected before any store access;
//! an account row is never written with guessed identity fields.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::application::LoginResolver;
use crate::config::SamlConfig;
use crate::domain::foundation::{AuthError, AuthProvider};
use crate::ports::{ProviderLogin, ProviderProfile, ProviderStrategy};

/// Suffix of the SAML URN that marks the `nameID` as an email address.
const EMAIL_NAME_ID_FORMAT_SUFFIX: &str = ":emailAddress";

/// Attributes of a validated SAML assertion this adapter consumes.
#[derive(Debug, Deserialize)]
struct SamlAssertion {
    #[serde(default, rename = "nameID")]
    name_id: Option<String>,

    #[serde(default, rename = "nameIDFormat")]
    name_id_format: Option<String>,

    #[serde(default)]
    email: Option<String>,
}

impl SamlAssertion {
    /// Normalize into a provider profile, failing closed on any gap.
    fn into_profile(self) -> Result<ProviderProfile, AuthError> {
        let subject = match self.name_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(AuthError::payload_malformed("nameID")),
        };

        let email_format_name_id = self
            .name_id_format
            .as_deref()
            .map_or(false, |format| format.ends_with(EMAIL_NAME_ID_FORMAT_SUFFIX));

        let email = match self.email {
            Some(email) if !email.is_empty() => email,
            _ if email_format_name_id => subject.clone(),
            _ => return Err(AuthError::payload_malformed("email")),
        };

        Ok(ProviderProfile::new(AuthProvider::Saml, subject, email))
    }
}

/// SAML strategy.
pub struct SamlStrategy {
    config: SamlConfig,
    resolver: LoginResolver,
}

impl SamlStrategy {
    /// Creates the strategy around its IdP settings and the shared resolver.
    pub fn new(config: SamlConfig, resolver: LoginResolver) -> Self {
        Self { config, resolver }
    }

    /// IdP settings for the upstream assertion exchange.
    pub fn config(&self) -> &SamlConfig {
        &self.config
    }
}

#[async_trait]
impl ProviderStrategy for SamlStrategy {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Saml
    }

    async fn handle_callback(&self, raw: Value) -> Result<ProviderLogin, AuthError> {
        let parsed: SamlAssertion = serde_json::from_value(raw).map_err(|e| {
            tracing::warn!("Unparseable SAML assertion payload: {}", e);
            AuthError::payload_malformed("assertion")
        })?;

        let profile = match parsed.into_profile() {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!("Rejected SAML assertion: {}", e);
                return Err(e);
            }
        };

        self.resolver.resolve(profile).await
    }
}

impl std::fmt::Debug for SamlStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SamlStrategy")
            .field("entry_point", &self.config.entry_point)
            .field("issuer", &self.config.issuer)
            .finish_non_exhaustive()
    }
}
