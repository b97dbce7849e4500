//! JWT bridge token issuer.
//!
//! Implements the `BridgeTokenIssuer` port with HS256-signed JWTs:
//!
//! 1. `issue` wraps the identity claims in an `iat`/`exp` envelope and
//!    signs with the configured shared secret
//! 2. `verify` checks signature and expiry, then strips the envelope
//!    back off
//!
//! Expiry is enforced with zero leeway; a token one second past `exp`
//! is already `TokenExpired`.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::BridgeTokenConfig;
use crate::domain::foundation::AuthError;
use crate::domain::token::{BridgeClaims, SignedBridgeToken};
use crate::ports::BridgeTokenIssuer;

/// Claims as they appear on the wire: identity claims plus `iat`/`exp`.
#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    #[serde(flatten)]
    identity: BridgeClaims,
    iat: i64,
    exp: i64,
}

/// HS256 bridge token issuer.
pub struct JwtBridgeTokenIssuer {
    signing_secret: SecretString,
    lifetime_secs: u64,
}

impl JwtBridgeTokenIssuer {
    /// Creates an issuer from the bridge token configuration.
    pub fn new(config: BridgeTokenConfig) -> Self {
        Self {
            signing_secret: SecretString::new(config.signing_secret),
            lifetime_secs: config.lifetime_secs,
        }
    }
}

impl BridgeTokenIssuer for JwtBridgeTokenIssuer {
    fn issue(&self, claims: &BridgeClaims) -> Result<SignedBridgeToken, AuthError> {
        let secret = self.signing_secret.expose_secret();
        if secret.is_empty() {
            return Err(AuthError::signing_failure("signing secret is empty"));
        }

        let now = Utc::now().timestamp();
        let wire = WireClaims {
            identity: claims.clone(),
            iat: now,
            exp: now + self.lifetime_secs as i64,
        };

        let key = EncodingKey::from_secret(secret.as_bytes());
        let token = encode(&Header::new(Algorithm::HS256), &wire, &key).map_err(|e| {
            tracing::error!("Bridge token signing failed: {}", e);
            AuthError::signing_failure(e.to_string())
        })?;

        Ok(SignedBridgeToken::new(token))
    }

    fn verify(&self, token: &str) -> Result<BridgeClaims, AuthError> {
        let key = DecodingKey::from_secret(self.signing_secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<WireClaims>(token, &key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Bridge token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::warn!("Bridge token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        Ok(data.claims.identity)
    }
}

impl std::fmt::Debug for JwtBridgeTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtBridgeTokenIssuer")
            .field("lifetime_secs", &self.lifetime_secs)
            .finish_non_exhaustive()
    }
}
