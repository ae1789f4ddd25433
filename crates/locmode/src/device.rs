//! Device Class and Platform Era
//!
//! Session-fixed inputs to the policy engine. Neither is derived here; see
//! [`crate::classify`] for the strategies that produce them.

use crate::result::LocModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of device the session runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Virtualized device without network-based positioning
    Emulator,
    /// Real hardware
    #[default]
    PhysicalDevice,
}

impl DeviceClass {
    /// Both device classes
    pub const ALL: [Self; 2] = [Self::Emulator, Self::PhysicalDevice];

    /// Canonical kebab-case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emulator => "emulator",
            Self::PhysicalDevice => "physical",
        }
    }

    /// Check if this is an emulator
    #[must_use]
    pub const fn is_emulator(self) -> bool {
        matches!(self, Self::Emulator)
    }

    /// Whether the device can ever report network positioning
    #[must_use]
    pub const fn supports_network_positioning(self) -> bool {
        !self.is_emulator()
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DeviceClass {
    type Err = LocModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "emulator" | "emu" => Ok(Self::Emulator),
            "physical" | "physical-device" | "device" => Ok(Self::PhysicalDevice),
            other => Err(LocModeError::invalid_argument(format!(
                "unknown device class '{other}'"
            ))),
        }
    }
}

/// Platform behavioral epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformEra {
    /// Legacy model: each provider reports its own enabled state
    #[default]
    PreUnifiedFlag,
    /// Single aggregate "location enabled" flag
    UnifiedFlag,
}

impl PlatformEra {
    /// Both eras
    pub const ALL: [Self; 2] = [Self::PreUnifiedFlag, Self::UnifiedFlag];

    /// Canonical kebab-case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PreUnifiedFlag => "pre-unified",
            Self::UnifiedFlag => "unified",
        }
    }

    /// Whether providers are queried individually in this era
    #[must_use]
    pub const fn has_per_provider_state(self) -> bool {
        matches!(self, Self::PreUnifiedFlag)
    }
}

impl fmt::Display for PlatformEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PlatformEra {
    type Err = LocModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pre-unified" | "pre-unified-flag" | "legacy" => Ok(Self::PreUnifiedFlag),
            "unified" | "unified-flag" => Ok(Self::UnifiedFlag),
            other => Err(LocModeError::invalid_argument(format!(
                "unknown platform era '{other}'"
            ))),
        }
    }
}
