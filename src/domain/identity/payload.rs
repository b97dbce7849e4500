//! Identity payload - the tagged union over authenticated principal kinds.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ServiceAccountId, ServiceTokenId, UserId};
use crate::domain::user::User;

use super::{ServiceAccount, ServiceTokenData};

/// Whoever or whatever just authenticated.
///
/// Exactly one variant is active per request; the variant is fixed at
/// authentication time and never re-tagged. Both projections below match
/// exhaustively with no wildcard arm, so adding a principal kind forces
/// every decision point to be revisited at compile time. A payload
/// outside this set is unrepresentable, which is what makes the
/// projections total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AuthPayload {
    User(User),
    ServiceAccount(ServiceAccount),
    ServiceTokenData(ServiceTokenData),
}

impl AuthPayload {
    /// The active principal's own identifier, labeled by kind.
    pub fn identity_id(&self) -> PrincipalId {
        match self {
            AuthPayload::User(user) => PrincipalId::UserId(user.id),
            AuthPayload::ServiceAccount(account) => PrincipalId::ServiceAccountId(account.id),
            AuthPayload::ServiceTokenData(token) => PrincipalId::ServiceTokenDataId(token.id),
        }
    }

    /// The human user this principal acts for: the user itself, a service
    /// account's owner, or a service token's issuer.
    pub fn owning_user(&self) -> OwningUser {
        let user = match self {
            AuthPayload::User(user) => user.id,
            AuthPayload::ServiceAccount(account) => account.user,
            AuthPayload::ServiceTokenData(token) => token.user,
        };
        OwningUser { user }
    }
}

/// A principal identifier labeled by the kind that produced it.
///
/// Serializes externally tagged, e.g. `{"userId": "..."}` for an end
/// user, so downstream authorization filters can splice it straight into
/// store queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrincipalId {
    #[serde(rename = "userId")]
    UserId(UserId),

    #[serde(rename = "serviceAccountId")]
    ServiceAccountId(ServiceAccountId),

    #[serde(rename = "serviceTokenDataId")]
    ServiceTokenDataId(ServiceTokenId),
}

/// The owning-user projection: always a single user reference, whatever
/// the principal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwningUser {
    pub user: UserId,
}
