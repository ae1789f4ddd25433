//! Location providers.

use crate::result::LocModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named positioning data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Piggybacks on fixes requested by others; always on
    Passive,
    /// Cell and Wi-Fi based positioning
    Network,
    /// Satellite positioning
    Gps,
}

impl Provider {
    /// All providers, in reporting order
    pub const ALL: [Self; 3] = [Self::Passive, Self::Network, Self::Gps];

    /// Platform name of the provider
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Passive => "passive",
            Self::Network => "network",
            Self::Gps => "gps",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Provider {
    type Err = LocModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passive" => Ok(Self::Passive),
            "network" => Ok(Self::Network),
            "gps" => Ok(Self::Gps),
            other => Err(LocModeError::invalid_argument(format!(
                "unknown location provider '{other}'"
            ))),
        }
    }
}
