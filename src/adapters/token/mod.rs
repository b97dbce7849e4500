//! Token adapters.
//!
//! - `jwt` - HS256 bridge token issuer backed by `jsonwebtoken`

mod jwt;

pub use jwt::JwtBridgeTokenIssuer;
