//! LoginResolver - shared resolve-or-provision and token-minting sequence.
//!
//! Every provider strategy delegates here after extracting a normalized
//! profile. Accounts are keyed strictly on `(provider, subject)`; an email
//! seen before under a different provider still provisions a fresh
//! account, never a merge.

use std::sync::Arc;

use crate::domain::foundation::AuthError;
use crate::domain::token::BridgeClaims;
use crate::domain::user::{NewUser, User};
use crate::ports::{
    BridgeTokenIssuer, ProviderLogin, ProviderProfile, StoreError, UserProjection, UserStore,
};

/// Resolves a provider profile to an account and mints its bridge token.
pub struct LoginResolver {
    store: Arc<dyn UserStore>,
    issuer: Arc<dyn BridgeTokenIssuer>,
}

impl LoginResolver {
    /// Creates a resolver over the shared store and token issuer.
    pub fn new(store: Arc<dyn UserStore>, issuer: Arc<dyn BridgeTokenIssuer>) -> Self {
        Self { store, issuer }
    }

    /// Resolve or provision the account for a profile and mint its token.
    ///
    /// A create that loses a concurrent first-login race is recovered by
    /// re-reading the winner's row, so both callers end up with the same
    /// account.
    pub async fn resolve(&self, profile: ProviderProfile) -> Result<ProviderLogin, AuthError> {
        let user = self.resolve_user(&profile).await?;

        let claims = BridgeClaims::for_user(&user, profile.provider);
        let bridge_token = self.issuer.issue(&claims)?;

        tracing::debug!(
            provider = %profile.provider,
            user_id = %user.id,
            completed = user.is_completed(),
            "Provider login resolved"
        );

        Ok(ProviderLogin {
            user,
            profile,
            bridge_token,
        })
    }

    async fn resolve_user(&self, profile: &ProviderProfile) -> Result<User, AuthError> {
        if let Some(user) = self.lookup(profile).await? {
            return Ok(user);
        }

        tracing::debug!(
            provider = %profile.provider,
            "No account for provider identity, provisioning"
        );

        let new_user = NewUser::new(
            profile.email.clone(),
            profile.provider,
            profile.subject.clone(),
        );

        match self.store.create(new_user).await {
            Ok(user) => Ok(user),
            Err(StoreError::UniquenessConflict) => {
                // Lost a concurrent first-login race; the winner's row is
                // authoritative.
                tracing::debug!(
                    provider = %profile.provider,
                    "Provisioning conflict, re-reading winner"
                );
                self.lookup(profile).await?.ok_or_else(|| {
                    AuthError::invariant_violation(
                        "account missing after uniqueness conflict on provisioning",
                    )
                })
            }
            Err(StoreError::Unavailable(message)) => {
                tracing::error!(
                    provider = %profile.provider,
                    error = %message,
                    "User store unavailable during provisioning"
                );
                Err(AuthError::StoreUnavailable(message))
            }
        }
    }

    /// Lookup with key material included; `is_user_completed` depends on it.
    async fn lookup(&self, profile: &ProviderProfile) -> Result<Option<User>, AuthError> {
        self.store
            .find_by_provider_identity(
                profile.provider,
                &profile.subject,
                UserProjection::WithPublicKey,
            )
            .await
            .map_err(|e| match e {
                StoreError::UniquenessConflict => {
                    AuthError::invariant_violation("uniqueness conflict reported by a read")
                }
                StoreError::Unavailable(message) => {
                    tracing::error!(
                        provider = %profile.provider,
                        error = %message,
                        "User store unavailable during lookup"
                    );
                    AuthError::StoreUnavailable(message)
                }
            })
    }
}
