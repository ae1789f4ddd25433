//! Location Mode Policy
//!
//! Pure decision functions from `(mode, device class, era)` to provider
//! state. Nothing here holds state; [`crate::engine`] wraps these with the
//! session's current mode.
//!
//! Pre-unified era decision table:
//!
//! ```text
//! Mode           Passive  Network(emulator)  Network(physical)  Gps
//! off            true     false              false              false
//! sensors-only   true     false              false              true
//! battery-saving true     false              true               false
//! high-accuracy  true     false              true               true
//! ```
//!
//! Unified era: location is enabled iff the mode is not `off`.

use crate::device::{DeviceClass, PlatformEra};
use crate::mode::LocationMode;
use crate::provider::Provider;
use serde::{Deserialize, Serialize};

/// Whether `provider` is enabled under the pre-unified model
#[must_use]
pub const fn provider_enabled(mode: LocationMode, class: DeviceClass, provider: Provider) -> bool {
    match provider {
        Provider::Passive => true,
        Provider::Network => class.supports_network_positioning() && mode.requests_network(),
        Provider::Gps => mode.requests_sensors(),
    }
}

/// Whether location is enabled under the unified model
#[must_use]
pub const fn location_enabled(mode: LocationMode) -> bool {
    mode.is_on()
}

/// Derived provider state for one era
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "era", rename_all = "snake_case")]
pub enum ProviderStateSet {
    /// Per-provider enabled flags
    PreUnifiedFlag {
        /// Passive provider
        passive: bool,
        /// Network provider
        network: bool,
        /// GPS provider
        gps: bool,
    },
    /// Single aggregate flag
    UnifiedFlag {
        /// Location enabled
        location_enabled: bool,
    },
}

impl ProviderStateSet {
    /// Compute the state set for a mode, device class and era
    #[must_use]
    pub const fn evaluate(mode: LocationMode, class: DeviceClass, era: PlatformEra) -> Self {
        match era {
            PlatformEra::PreUnifiedFlag => Self::PreUnifiedFlag {
                passive: provider_enabled(mode, class, Provider::Passive),
                network: provider_enabled(mode, class, Provider::Network),
                gps: provider_enabled(mode, class, Provider::Gps),
            },
            PlatformEra::UnifiedFlag => Self::UnifiedFlag {
                location_enabled: location_enabled(mode),
            },
        }
    }

    /// Era this state set belongs to
    #[must_use]
    pub const fn era(&self) -> PlatformEra {
        match self {
            Self::PreUnifiedFlag { .. } => PlatformEra::PreUnifiedFlag,
            Self::UnifiedFlag { .. } => PlatformEra::UnifiedFlag,
        }
    }

    /// Enabled flag for a provider, `None` in the unified era
    #[must_use]
    pub const fn provider(&self, provider: Provider) -> Option<bool> {
        match *self {
            Self::PreUnifiedFlag {
                passive,
                network,
                gps,
            } => Some(match provider {
                Provider::Passive => passive,
                Provider::Network => network,
                Provider::Gps => gps,
            }),
            Self::UnifiedFlag { .. } => None,
        }
    }

    /// Aggregate flag, `None` in the pre-unified era
    #[must_use]
    pub const fn location_enabled(&self) -> Option<bool> {
        match *self {
            Self::UnifiedFlag { location_enabled } => Some(location_enabled),
            Self::PreUnifiedFlag { .. } => None,
        }
    }

    /// Providers reported enabled, in reporting order
    #[must_use]
    pub fn enabled_providers(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| self.provider(*p) == Some(true))
            .collect()
    }
}

/// One row of a decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRow {
    /// Mode for this row
    pub mode: LocationMode,
    /// Resulting state
    pub state: ProviderStateSet,
}

/// Full decision table for a device class and era, one row per mode
#[must_use]
pub fn decision_table(class: DeviceClass, era: PlatformEra) -> Vec<DecisionRow> {
    LocationMode::ALL
        .into_iter()
        .map(|mode| DecisionRow {
            mode,
            state: ProviderStateSet::evaluate(mode, class, era),
        })
        .collect()
}
