//! Error types for the identity domain.

use thiserror::Error;

/// Errors that occur while handling a provider login or a bridge token.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the login flow's perspective, not any provider's. Every kind
/// except `InvariantViolation` is collapsed into one uniform
/// "authentication denied" at the HTTP boundary; the distinct variants
/// exist for operator logs and tests.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The provider's profile or assertion lacks a required field.
    /// No account is created when this is raised.
    #[error("Provider payload malformed: missing or empty '{field}'")]
    PayloadMalformed { field: String },

    /// The user store is unreachable or failed to serve the request.
    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),

    /// The bridge token could not be signed.
    #[error("Bridge token signing failed: {0}")]
    SigningFailure(String),

    /// A bridge token failed signature or claim validation.
    #[error("Invalid bridge token")]
    InvalidToken,

    /// A bridge token's expiry has passed (separate from `InvalidToken`
    /// so callers can prompt a fresh login).
    #[error("Bridge token expired")]
    TokenExpired,

    /// A state the flow relies on was broken, e.g. an account missing
    /// right after a provisioning conflict reported it exists. Indicates
    /// a programming error upstream; must abort the request loudly
    /// instead of degrading into a silent denial.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl AuthError {
    /// Creates a malformed-payload error for a named field.
    pub fn payload_malformed(field: impl Into<String>) -> Self {
        AuthError::PayloadMalformed { field: field.into() }
    }

    /// Creates a store unavailable error with a message.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        AuthError::StoreUnavailable(message.into())
    }

    /// Creates a signing failure error with a message.
    pub fn signing_failure(message: impl Into<String>) -> Self {
        AuthError::SigningFailure(message.into())
    }

    /// Creates an invariant violation error with a message.
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        AuthError::InvariantViolation(message.into())
    }

    /// Returns true for kinds the HTTP boundary maps to the uniform
    /// "authentication denied" response.
    pub fn is_denial(&self) -> bool {
        !matches!(self, AuthError::InvariantViolation(_))
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::StoreUnavailable(_))
    }
}
