//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Provider strategies (Google OAuth2, SAML) and their registry
//! - `store` - User store implementations (PostgreSQL, in-memory)
//! - `token` - Bridge token issuing (JWT)

pub mod auth;
pub mod store;
pub mod token;

pub use auth::{GoogleStrategy, SamlStrategy, StrategySet};
pub use store::{InMemoryUserStore, PostgresUserStore};
pub use token::JwtBridgeTokenIssuer;
