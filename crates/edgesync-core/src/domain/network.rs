//! CDN network selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The CDN network a purge request targets.
///
/// The purge API exposes exactly two networks. Anything else is a caller
/// error: purging the wrong network silently is a safety hazard, so
/// parsing fails closed instead of defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The live production network.
    Production,
    /// The staging network.
    Staging,
}

impl Network {
    /// The network name as it appears in the purge API path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Staging => "staging",
        }
    }
}

impl Default for Network {
    /// Production, matching the purge operation's documented default.
    fn default() -> Self {
        Self::Production
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a network name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized network '{0}': expected 'production' or 'staging'")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}
