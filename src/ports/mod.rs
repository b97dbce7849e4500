//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProviderStrategy` - Per-provider callback handling
//! - `BridgeTokenIssuer` - Bridge token signing and verification
//! - `UserStore` - Durable user account persistence

mod bridge_token;
mod provider_strategy;
mod user_store;

pub use bridge_token::BridgeTokenIssuer;
pub use provider_strategy::{ProviderLogin, ProviderProfile, ProviderStrategy};
pub use user_store::{StoreError, UserProjection, UserStore};
