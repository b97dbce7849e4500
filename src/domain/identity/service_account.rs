//! Service account principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ServiceAccountId, UserId};

/// A non-human principal owned by a user.
///
/// Service accounts authenticate with their own credentials through
/// collaborating middleware and arrive here already authenticated; this
/// crate never creates or mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccount {
    pub id: ServiceAccountId,

    /// The human user that owns this account.
    pub user: UserId,

    /// Operator-facing display name.
    pub name: String,

    pub created_at: DateTime<Utc>,
}

impl ServiceAccount {
    /// Creates a service account owned by `user`.
    pub fn new(user: UserId, name: impl Into<String>) -> Self {
        Self {
            id: ServiceAccountId::new(),
            user,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
