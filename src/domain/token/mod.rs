//! Bridge token claim set.

mod claims;

pub use claims::{BridgeClaims, SignedBridgeToken};
