//! User store port.
//!
//! Defines the contract for persisting and retrieving user accounts. The
//! provider login flow needs exactly two operations: a lookup by provider
//! identity and an insert for first-login provisioning. Everything else
//! that touches accounts (onboarding, profile edits) lives outside this
//! crate.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::AuthProvider;
use crate::domain::user::{NewUser, User};

/// Errors surfaced by user store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// An insert collided with an existing `(auth_provider, auth_id)` row.
    /// Callers recover by re-reading; this never reaches the HTTP layer.
    #[error("User already exists for this provider identity")]
    UniquenessConflict,

    /// The store is unreachable or failed to serve the request.
    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Creates an unavailable error with a message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }
}

/// Controls whether a read includes the write-protected key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserProjection {
    /// Default read; `public_key` is left unset.
    Standard,

    /// Opt-in read that includes `public_key`. The login flow needs it to
    /// derive the `isUserCompleted` claim.
    WithPublicKey,
}

/// Repository port for user account persistence.
///
/// # Contract
///
/// Implementations must:
/// - Enforce uniqueness of `(auth_provider, auth_id)` across accounts
/// - Return `StoreError::UniquenessConflict` from `create` when an insert
///   races a concurrent provisioning of the same identity
/// - Honor `UserProjection::Standard` by leaving `public_key` unset
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the account provisioned for a provider identity.
    ///
    /// Returns `None` if no account exists for the pair.
    async fn find_by_provider_identity(
        &self,
        provider: AuthProvider,
        auth_id: &str,
        projection: UserProjection,
    ) -> Result<Option<User>, StoreError>;

    /// Insert a newly provisioned account.
    ///
    /// # Errors
    ///
    /// - `UniquenessConflict` if the provider identity is already taken
    /// - `Unavailable` on persistence failure
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;
}
