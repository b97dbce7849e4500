//! Scoped service token principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ServiceTokenId, UserId};

/// Data behind a scoped service token.
///
/// Issued by a user for narrow machine access. Like service accounts,
/// these arrive already authenticated from collaborating middleware,
/// which also enforces `expires_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTokenData {
    pub id: ServiceTokenId,

    /// The human user that issued the token.
    pub user: UserId,

    /// Operator-facing display name.
    pub name: String,

    /// When the token stops being honored; `None` means no expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

impl ServiceTokenData {
    /// Creates token data issued by `user` with no expiry.
    pub fn new(user: UserId, name: impl Into<String>) -> Self {
        Self {
            id: ServiceTokenId::new(),
            user,
            name: name.into(),
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    /// Sets an expiry on the token data.
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Returns true if the token has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }
}
