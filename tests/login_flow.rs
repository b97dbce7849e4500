//! Integration tests for the provider login flow.
//!
//! These tests verify the end-to-end flow:
//! 1. A provider callback payload reaches its strategy via the registry
//! 2. The strategy extracts the profile and resolves or provisions the account
//! 3. A signed bridge token comes back and verifies to the expected claims
//!
//! Uses the in-memory store to test the flow without external dependencies.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::{json, Value};

use identity_bridge::adapters::{InMemoryUserStore, JwtBridgeTokenIssuer, StrategySet};
use identity_bridge::config::{
    AppConfig, BridgeTokenConfig, Environment, OAuthClientConfig, SamlConfig,
};
use identity_bridge::domain::foundation::{AuthError, AuthProvider};
use identity_bridge::domain::token::{BridgeClaims, SignedBridgeToken};
use identity_bridge::ports::BridgeTokenIssuer;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Initialize tracing subscriber (honor RUST_LOG if set)
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn test_config() -> AppConfig {
    AppConfig {
        environment: Environment::Development,
        google: OAuthClientConfig {
            client_id: "google-client".to_string(),
            client_secret: "google-secret".to_string(),
            ..Default::default()
        },
        saml: SamlConfig {
            entry_point: "https://idp.corp.example.com/sso".to_string(),
            issuer: "identity-bridge".to_string(),
            certificate: "-----BEGIN CERTIFICATE-----".to_string(),
            audience: "identity-bridge-api".to_string(),
            ..Default::default()
        },
        bridge_token: BridgeTokenConfig {
            signing_secret: "integration-test-signing-secret".to_string(),
            lifetime_secs: 900,
        },
    }
}

fn google_callback(subject: &str, email: &str) -> Value {
    json!({
        "id": subject,
        "displayName": "Integration Test User",
        "emails": [{ "value": email }],
        "provider": "google"
    })
}

fn saml_callback(name_id: &str, email: &str) -> Value {
    json!({
        "nameID": name_id,
        "nameIDFormat": "urn:oasis:names:tc:SAML:2.0:nameid-format:persistent",
        "email": email,
        "issuer": "https://idp.corp.example.com"
    })
}

/// Full wiring over the in-memory store, plus an independent verifier
/// built from the same configuration.
fn harness() -> (StrategySet, Arc<InMemoryUserStore>, JwtBridgeTokenIssuer) {
    let config = test_config();
    let store = Arc::new(InMemoryUserStore::new());
    let set = StrategySet::from_config(&config, store.clone());
    let verifier = JwtBridgeTokenIssuer::new(config.bridge_token.clone());
    (set, store, verifier)
}

/// Issuer that cannot sign, for exercising the abort path.
struct FailingIssuer;

impl BridgeTokenIssuer for FailingIssuer {
    fn issue(&self, _claims: &BridgeClaims) -> Result<SignedBridgeToken, AuthError> {
        Err(AuthError::signing_failure("signing key unusable"))
    }

    fn verify(&self, _token: &str) -> Result<BridgeClaims, AuthError> {
        Err(AuthError::InvalidToken)
    }
}

// =============================================================================
// Integration Tests
// =============================================================================

#[tokio::test]
async fn first_google_login_provisions_and_mints_verifiable_token() {
    init_tracing();
    let (set, store, verifier) = harness();
    let strategy = set.strategy(AuthProvider::Google).unwrap();

    let login = strategy
        .handle_callback(google_callback("g-sub-1", "ada@example.com"))
        .await
        .expect("first login should succeed");

    assert_eq!(store.user_count(), 1);

    // A separately constructed issuer with the same secret must accept it.
    let claims = verifier
        .verify(login.bridge_token.as_str())
        .expect("token should verify");
    assert_eq!(claims.user_id, login.user.id);
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.auth_provider, AuthProvider::Google);
    assert!(!claims.is_user_completed);
}

#[tokio::test]
async fn second_login_reuses_the_provisioned_account() {
    init_tracing();
    let (set, store, _verifier) = harness();
    let strategy = set.strategy(AuthProvider::Google).unwrap();

    let first = strategy
        .handle_callback(google_callback("g-sub-1", "ada@example.com"))
        .await
        .unwrap();
    let second = strategy
        .handle_callback(google_callback("g-sub-1", "ada@example.com"))
        .await
        .unwrap();

    assert_eq!(first.user.id, second.user.id);
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn completing_onboarding_flips_the_token_claim() {
    init_tracing();
    let (set, store, verifier) = harness();
    let strategy = set.strategy(AuthProvider::Google).unwrap();

    let first = strategy
        .handle_callback(google_callback("g-sub-1", "ada@example.com"))
        .await
        .unwrap();
    let before = verifier.verify(first.bridge_token.as_str()).unwrap();
    assert!(!before.is_user_completed);

    store.set_public_key(&first.user.id, "-----BEGIN PUBLIC KEY-----");

    let second = strategy
        .handle_callback(google_callback("g-sub-1", "ada@example.com"))
        .await
        .unwrap();
    let after = verifier.verify(second.bridge_token.as_str()).unwrap();
    assert!(after.is_user_completed);
}

#[tokio::test]
async fn concurrent_first_logins_converge_on_one_account() {
    init_tracing();
    let (set, store, _verifier) = harness();
    let strategy = set.strategy(AuthProvider::Google).unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let strategy = strategy.clone();
        handles.push(tokio::spawn(async move {
            strategy
                .handle_callback(google_callback("g-racer", "racer@example.com"))
                .await
        }));
    }

    let results = futures::future::join_all(handles).await;

    let mut ids = HashSet::new();
    for result in results {
        let login = result.expect("task panicked").expect("login failed");
        ids.insert(login.user.id);
    }

    assert_eq!(ids.len(), 1, "every racer should land on the same account");
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn same_email_through_both_providers_stays_two_accounts() {
    init_tracing();
    let (set, store, _verifier) = harness();

    let google_login = set
        .strategy(AuthProvider::Google)
        .unwrap()
        .handle_callback(google_callback("g-sub-1", "shared@example.com"))
        .await
        .unwrap();
    let saml_login = set
        .strategy(AuthProvider::Saml)
        .unwrap()
        .handle_callback(saml_callback("saml-name-id-1", "shared@example.com"))
        .await
        .unwrap();

    assert_ne!(
        google_login.user.id, saml_login.user.id,
        "matching emails must never merge accounts across providers"
    );
    assert_eq!(store.user_count(), 2);
}

#[tokio::test]
async fn malformed_callback_denies_without_provisioning() {
    init_tracing();
    let (set, store, _verifier) = harness();
    let strategy = set.strategy(AuthProvider::Google).unwrap();

    let result = strategy
        .handle_callback(json!({ "displayName": "No Subject", "emails": [] }))
        .await;

    let err = result.unwrap_err();
    assert!(err.is_denial());
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn saml_email_format_name_id_logs_in_without_email_attribute() {
    init_tracing();
    let (set, store, verifier) = harness();

    let login = set
        .strategy(AuthProvider::Saml)
        .unwrap()
        .handle_callback(json!({
            "nameID": "grace@corp.example.com",
            "nameIDFormat": "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress"
        }))
        .await
        .expect("email-format nameID should carry the login");

    assert_eq!(login.user.email, "grace@corp.example.com");
    assert_eq!(store.user_count(), 1);

    let claims = verifier.verify(login.bridge_token.as_str()).unwrap();
    assert_eq!(claims.auth_provider, AuthProvider::Saml);
}

#[tokio::test]
async fn signing_failure_surfaces_from_the_full_flow() {
    init_tracing();
    let config = test_config();
    let store = Arc::new(InMemoryUserStore::new());
    let set = StrategySet::with_issuer(&config, store.clone(), Arc::new(FailingIssuer));

    let result = set
        .strategy(AuthProvider::Google)
        .unwrap()
        .handle_callback(google_callback("g-sub-1", "ada@example.com"))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, AuthError::SigningFailure(_)));
    assert!(err.is_denial());

    // The account was provisioned before minting failed; the row stays
    // and the next login resolves it.
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn registry_covers_every_provider_and_config_validates() {
    init_tracing();
    let config = test_config();
    assert!(config.validate().is_ok());

    let (set, _store, _verifier) = harness();
    assert_eq!(set.len(), 2);
    let providers = set.providers();
    assert!(providers.contains(&AuthProvider::Google));
    assert!(providers.contains(&AuthProvider::Saml));
}
