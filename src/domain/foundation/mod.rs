//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the provider enum, and error types that form
//! the vocabulary of the identity domain.

mod errors;
mod ids;
mod provider;

pub use errors::AuthError;
pub use ids::{ServiceAccountId, ServiceTokenId, UserId};
pub use provider::{AuthProvider, UnknownProvider};
