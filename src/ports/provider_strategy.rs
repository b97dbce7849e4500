//! Provider strategy port.
//!
//! One implementation per identity provider. A strategy receives the raw
//! result of a provider callback after the protocol library has finished
//! its handshake or assertion validation, and turns it into a resolved
//! account plus a bridge token. Adding a provider means adding one
//! implementation; no shared code changes.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::{AuthError, AuthProvider};
use crate::domain::token::SignedBridgeToken;
use crate::domain::user::User;

/// Normalized profile extracted from a provider callback.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    pub provider: AuthProvider,

    /// Stable provider-assigned subject identifier.
    pub subject: String,

    /// Provider-asserted email address.
    pub email: String,
}

impl ProviderProfile {
    /// Creates a normalized profile.
    pub fn new(
        provider: AuthProvider,
        subject: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            subject: subject.into(),
            email: email.into(),
        }
    }
}

/// Outcome of a successful provider login.
#[derive(Debug, Clone)]
pub struct ProviderLogin {
    /// The resolved (possibly just provisioned) account.
    pub user: User,

    /// The normalized profile the provider asserted.
    pub profile: ProviderProfile,

    /// Token for the HTTP layer to relay to the client.
    pub bridge_token: SignedBridgeToken,
}

/// Per-provider callback handling.
///
/// # Contract
///
/// Implementations must:
/// - Extract subject and email from the raw callback payload, failing
///   closed with `PayloadMalformed` before any store access
/// - Resolve or provision the account keyed on `(provider, subject)`
///   only; never match accounts by email
/// - Report every failure as an error so the HTTP layer can map all
///   denial kinds to one uniform "authentication denied"
#[async_trait]
pub trait ProviderStrategy: Send + Sync {
    /// The provider this strategy handles.
    fn provider(&self) -> AuthProvider;

    /// Handle a provider callback result.
    ///
    /// `raw` is the library-shaped JSON the protocol collaborator hands
    /// over for this provider.
    async fn handle_callback(&self, raw: Value) -> Result<ProviderLogin, AuthError>;
}
