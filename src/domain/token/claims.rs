//! Bridge token claims and the signed token value.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthProvider, UserId};
use crate::domain::user::User;

/// Claim set carried by a bridge token.
///
/// Exactly these four claims; the signing adapter adds the `iat`/`exp`
/// envelope on top. The token bridges a provider callback to the next
/// step of the login flow and grants no API access by itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeClaims {
    pub user_id: UserId,

    pub email: String,

    /// Provider the login arrived through.
    pub auth_provider: AuthProvider,

    /// Whether the user has finished onboarding; lets the next step route
    /// to profile completion without re-reading the account.
    pub is_user_completed: bool,
}

impl BridgeClaims {
    /// Builds the claim set for a resolved account.
    ///
    /// The account must have been read with its key material included,
    /// otherwise `is_user_completed` reports incomplete for everyone.
    pub fn for_user(user: &User, auth_provider: AuthProvider) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            auth_provider,
            is_user_completed: user.is_completed(),
        }
    }
}

/// A signed, compact-serialized bridge token.
///
/// Newtype so a bridge token cannot be passed where a session token is
/// expected. No `Display` impl; the inner string reaches logs too easily
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedBridgeToken(String);

impl SignedBridgeToken {
    /// Wraps a compact-serialized signed token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the compact serialization.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, yielding the compact serialization.
    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::NewUser;

    fn incomplete_user() -> User {
        User::provision(NewUser::new(
            "ada@example.com",
            AuthProvider::Google,
            "google-subject-1",
        ))
    }

    #[test]
    fn for_user_copies_identity_fields() {
        let user = incomplete_user();
        let claims = BridgeClaims::for_user(&user, AuthProvider::Google);

        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.auth_provider, AuthProvider::Google);
    }

    #[test]
    fn for_user_reports_incomplete_without_public_key() {
        let user = incomplete_user();
        let claims = BridgeClaims::for_user(&user, AuthProvider::Google);

        assert!(!claims.is_user_completed);
    }

    #[test]
    fn for_user_reports_completed_with_public_key() {
        let mut user = incomplete_user();
        user.public_key = Some("-----BEGIN PUBLIC KEY-----".to_string());

        let claims = BridgeClaims::for_user(&user, AuthProvider::Google);
        assert!(claims.is_user_completed);
    }

    #[test]
    fn claims_serialize_in_camel_case() {
        let claims = BridgeClaims::for_user(&incomplete_user(), AuthProvider::Saml);
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json.get("userId").is_some());
        assert!(json.get("email").is_some());
        assert_eq!(json["authProvider"], "SAML");
        assert_eq!(json["isUserCompleted"], false);
    }

    #[test]
    fn signed_token_is_transparent_over_its_string() {
        let token = SignedBridgeToken::new("header.payload.signature");

        assert_eq!(token.as_str(), "header.payload.signature");
        assert_eq!(
            serde_json::to_string(&token).unwrap(),
            "\"header.payload.signature\""
        );
        assert_eq!(token.into_string(), "header.payload.signature");
    }
}
