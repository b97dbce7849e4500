//! Identity provider enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// External identity provider a login arrived through.
///
/// The closed set of providers this system bridges. Serialized in upper
/// case ("GOOGLE", "SAML") to match the stored `auth_provider` column and
/// the bridge token claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthProvider {
    Google,
    Saml,
}

impl AuthProvider {
    /// Returns the stored/wire form of the provider name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "GOOGLE",
            AuthProvider::Saml => "SAML",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unrecognized provider name.
#[derive(Debug, Clone, Error)]
#[error("Unknown auth provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for AuthProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GOOGLE" => Ok(AuthProvider::Google),
            "SAML" => Ok(AuthProvider::Saml),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}
