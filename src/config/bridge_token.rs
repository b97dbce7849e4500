//! Bridge token configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest configurable bridge token lifetime (one day).
const MAX_LIFETIME_SECS: u64 = 86_400;

/// Bridge token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeTokenConfig {
    /// HS256 signing secret shared by issue and verify
    #[serde(default)]
    pub signing_secret: String,

    /// Token lifetime in seconds
    #[serde(default = "default_lifetime_secs")]
    pub lifetime_secs: u64,
}

impl BridgeTokenConfig {
    /// Get token lifetime as Duration
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.lifetime_secs)
    }

    /// Validate bridge token configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.signing_secret.is_empty() {
            return Err(ValidationError::MissingRequired(
                "BRIDGE_TOKEN_SIGNING_SECRET",
            ));
        }
        if self.lifetime_secs == 0 || self.lifetime_secs > MAX_LIFETIME_SECS {
            return Err(ValidationError::InvalidTokenLifetime);
        }
        Ok(())
    }
}

impl Default for BridgeTokenConfig {
    fn default() -> Self {
        Self {
            signing_secret: String::new(),
            lifetime_secs: default_lifetime_secs(),
        }
    }
}

fn default_lifetime_secs() -> u64 {
    900
}
