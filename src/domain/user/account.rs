//! Durable user account entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthProvider, UserId};

/// A durable user account.
///
/// Provider-originated accounts are keyed by `(auth_provider, auth_id)`
/// and created lazily on the first successful login for that pair.
/// Password-based accounts carry neither field and never pass through the
/// provider login flows. The login flow itself only ever creates accounts;
/// later onboarding steps mutate them (e.g. setting `public_key`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,

    /// Provider-asserted email address.
    pub email: String,

    /// Provider the account was provisioned through, if any.
    pub auth_provider: Option<AuthProvider>,

    /// Provider-assigned subject identifier, if any.
    pub auth_id: Option<String>,

    /// Client-side key material set by a later onboarding step. Hidden by
    /// default reads; absence marks onboarding as incomplete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Materializes a new provider-originated account with a fresh id and
    /// current timestamps. `public_key` starts unset.
    pub fn provision(new_user: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: new_user.email,
            auth_provider: Some(new_user.auth_provider),
            auth_id: Some(new_user.auth_id),
            public_key: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true once the user has completed client-side key setup.
    pub fn is_completed(&self) -> bool {
        self.public_key.is_some()
    }

    /// Returns true when the account belongs to the given provider identity.
    pub fn matches_provider_identity(&self, provider: AuthProvider, auth_id: &str) -> bool {
        self.auth_provider == Some(provider) && self.auth_id.as_deref() == Some(auth_id)
    }
}

/// Insert shape for provisioning a provider-originated account.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub auth_provider: AuthProvider,
    pub auth_id: String,
}

impl NewUser {
    /// Creates an insert shape for a provider identity.
    pub fn new(
        email: impl Into<String>,
        auth_provider: AuthProvider,
        auth_id: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            auth_provider,
            auth_id: auth_id.into(),
        }
    }
}
