//! Authentication adapters.
//!
//! Provider strategies implementing the `ProviderStrategy` port:
//!
//! - `google` - Google OAuth2 callback handling
//! - `saml` - SAML assertion handling
//! - `registry` - Immutable strategy set assembled at startup

mod google;
mod registry;
mod saml;

pub use google::GoogleStrategy;
pub use registry::StrategySet;
pub use saml::SamlStrategy;
