//! Bridge token issuance port.
//!
//! Issuance and verification are pure computations over already-resolved
//! claims, so the port is synchronous; no implementation performs I/O.

use crate::domain::foundation::AuthError;
use crate::domain::token::{BridgeClaims, SignedBridgeToken};

/// Signs and verifies bridge tokens.
///
/// # Contract
///
/// Implementations must:
/// - Embed exactly the claims in `BridgeClaims` plus an expiry envelope
/// - Return `AuthError::SigningFailure` when the signing key is unusable
/// - Return `AuthError::TokenExpired` for expired tokens on verification
/// - Return `AuthError::InvalidToken` for any other verification failure
/// - Never log or persist a token body
pub trait BridgeTokenIssuer: Send + Sync {
    /// Sign a bridge token carrying the given claims.
    fn issue(&self, claims: &BridgeClaims) -> Result<SignedBridgeToken, AuthError>;

    /// Verify a bridge token and recover its claims.
    fn verify(&self, token: &str) -> Result<BridgeClaims, AuthError>;
}
