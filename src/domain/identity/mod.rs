//! Identity payload union and its projections.
//!
//! Every authenticated request carries exactly one of three principal
//! kinds: an end user, a service account, or scoped service-token data.
//! Downstream authorization code consumes them through the projections on
//! [`AuthPayload`] instead of branching on the concrete kind itself.

mod payload;
mod service_account;
mod service_token;

pub use payload::{AuthPayload, OwningUser, PrincipalId};
pub use service_account::ServiceAccount;
pub use service_token::ServiceTokenData;
