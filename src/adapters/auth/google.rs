//! Google OAuth2 provider strategy.
//!
//! Handles the callback leg of the Google login flow. The OAuth2 handshake
//! itself (redirect, code exchange, profile fetch) happens in the protocol
//! collaborator upstream; this adapter receives the fetched profile
//! document and:
//!
//! 1. Extracts the stable subject (`id`) and the primary email
//! 2. Resolves or provisions the internal account via `LoginResolver`
//! 3. Returns the resolved login with its signed bridge token
//!
//! Extraction fails closed: a payload missing its subject or email is
//! rejected before any store access.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::application::LoginResolver;
use crate::config::OAuthClientConfig;
use crate::domain::foundation::{AuthError, AuthProvider};
use crate::ports::{ProviderLogin, ProviderProfile, ProviderStrategy};

/// Shape of the Google profile document this adapter consumes.
///
/// Google sends many more fields than these; unknown ones are ignored.
#[derive(Debug, Deserialize)]
struct GoogleProfile {
    /// Stable Google-assigned account identifier.
    #[serde(default)]
    id: Option<String>,

    /// Email addresses in preference order; the first is primary.
    #[serde(default)]
    emails: Vec<EmailEntry>,
}

#[derive(Debug, Deserialize)]
struct EmailEntry {
    #[serde(default)]
    value: String,
}

impl GoogleProfile {
    /// Normalize into a provider profile, failing closed on any gap.
    fn into_profile(self) -> Result<ProviderProfile, AuthError> {
        let subject = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(AuthError::payload_malformed("id")),
        };

        let email = match self.emails.into_iter().next() {
            Some(entry) if !entry.value.is_empty() => entry.value,
            _ => return Err(AuthError::payload_malformed("emails")),
        };

        Ok(ProviderProfile::new(AuthProvider::Google, subject, email))
    }
}

/// Google OAuth2 strategy.
pub struct GoogleStrategy {
    config: OAuthClientConfig,
    resolver: LoginResolver,
}

impl GoogleStrategy {
    /// Creates the strategy around its client settings and the shared resolver.
    pub fn new(config: OAuthClientConfig, resolver: LoginResolver) -> Self {
        Self { config, resolver }
    }

    /// Client settings for the upstream handshake (id, secret, callback, scopes).
    pub fn client_config(&self) -> &OAuthClientConfig {
        &self.config
    }
}

#[async_trait]
impl ProviderStrategy for GoogleStrategy {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    async fn handle_callback(&self, raw: Value) -> Result<ProviderLogin, AuthError> {
        let parsed: GoogleProfile = serde_json::from_value(raw).map_err(|e| {
            tracing::warn!("Unparseable Google profile payload: {}", e);
            AuthError::payload_malformed("profile")
        })?;

        let profile = match parsed.into_profile() {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!("Rejected Google profile: {}", e);
                return Err(e);
            }
        };

        self.resolver.resolve(profile).await
    }
}

impl std::fmt::Debug for GoogleStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleStrategy")
            .field("callback_path", &self.config.callback_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryUserStore;
    use crate::domain::token::{BridgeClaims, SignedBridgeToken};
    use crate::ports::BridgeTokenIssuer;
    use serde_json::json;
    use std::sync::Arc;

    struct StaticIssuer;

    impl BridgeTokenIssuer for StaticIssuer {
        fn issue(&self, claims: &BridgeClaims) -> Result<SignedBridgeToken, AuthError> {
            Ok(SignedBridgeToken::new(format!("token-for-{}", claims.user_id)))
        }

        fn verify(&self, _token: &str) -> Result<BridgeClaims, AuthError> {
            Err(AuthError::InvalidToken)
        }
    }

    fn strategy() -> (GoogleStrategy, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::new());
        let resolver = LoginResolver::new(store.clone(), Arc::new(StaticIssuer));
        let strategy = GoogleStrategy::new(OAuthClientConfig::default(), resolver);
        (strategy, store)
    }

    fn full_profile() -> Value {
        json!({
            "id": "google-subject-1",
            "displayName": "Ada Lovelace",
            "emails": [
                { "value": "ada@example.com" },
                { "value": "ada@alt.example.com" }
            ],
            "provider": "google"
        })
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Extraction Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn valid_profile_provisions_account() {
        let (strategy, store) = strategy();

        let result = strategy.handle_callback(full_profile()).await;

        assert!(result.is_ok());
        let login = result.unwrap();
        assert_eq!(login.profile.subject, "google-subject-1");
        assert_eq!(login.profile.email, "ada@example.com");
        assert_eq!(login.user.auth_id.as_deref(), Some("google-subject-1"));
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn first_email_wins_when_several_present() {
        let (strategy, _store) = strategy();

        let login = strategy.handle_callback(full_profile()).await.unwrap();

        assert_eq!(login.user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn repeat_callback_reuses_account() {
        let (strategy, store) = strategy();

        let first = strategy.handle_callback(full_profile()).await.unwrap();
        let second = strategy.handle_callback(full_profile()).await.unwrap();

        assert_eq!(first.user.id, second.user.id);
        assert_eq!(store.user_count(), 1);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Fail-Closed Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn missing_id_is_rejected_before_store_access() {
        let (strategy, store) = strategy();

        let result = strategy
            .handle_callback(json!({ "emails": [{ "value": "ada@example.com" }] }))
            .await;

        assert!(matches!(
            result,
            Err(AuthError::PayloadMalformed { ref field }) if field == "id"
        ));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn empty_id_is_rejected() {
        let (strategy, store) = strategy();

        let result = strategy
            .handle_callback(json!({
                "id": "",
                "emails": [{ "value": "ada@example.com" }]
            }))
            .await;

        assert!(matches!(
            result,
            Err(AuthError::PayloadMalformed { ref field }) if field == "id"
        ));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn missing_emails_are_rejected() {
        let (strategy, store) = strategy();

        let result = strategy
            .handle_callback(json!({ "id": "google-subject-1" }))
            .await;

        assert!(matches!(
            result,
            Err(AuthError::PayloadMalformed { ref field }) if field == "emails"
        ));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn empty_primary_email_is_rejected() {
        let (strategy, store) = strategy();

        let result = strategy
            .handle_callback(json!({
                "id": "google-subject-1",
                "emails": [{ "value": "" }, { "value": "ada@example.com" }]
            }))
            .await;

        assert!(matches!(
            result,
            Err(AuthError::PayloadMalformed { ref field }) if field == "emails"
        ));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn non_object_payload_is_rejected() {
        let (strategy, store) = strategy();

        let result = strategy.handle_callback(json!("not a profile")).await;

        assert!(matches!(
            result,
            Err(AuthError::PayloadMalformed { ref field }) if field == "profile"
        ));
        assert_eq!(store.user_count(), 0);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Strategy Surface Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn strategy_reports_google_provider() {
        let (strategy, _store) = strategy();
        assert_eq!(strategy.provider(), AuthProvider::Google);
    }

    #[test]
    fn debug_output_omits_client_secret() {
        let config = OAuthClientConfig {
            client_id: "client-id".to_string(),
            client_secret: "super-secret".to_string(),
            ..OAuthClientConfig::default()
        };
        let store = Arc::new(InMemoryUserStore::new());
        let resolver = LoginResolver::new(store, Arc::new(StaticIssuer));
        let strategy = GoogleStrategy::new(config, resolver);

        let rendered = format!("{:?}", strategy);
        assert!(!rendered.contains("super-secret"));
    }
}
