//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, provider enum, errors)
//! - `identity` - Identity payload union and its projections
//! - `token` - Bridge token claim set
//! - `user` - Durable user account records

pub mod foundation;
pub mod identity;
pub mod token;
pub mod user;
