//! Location Mode Engine
//!
//! Session-scoped holder of the current [`LocationMode`]. Device class and
//! platform era are fixed at construction; provider state is never stored,
//! only recomputed from the current mode on every query.
//!
//! ## Example
//!
//! ```rust
//! use locmode::{DeviceClass, LocationMode, LocationModeEngine, PlatformEra, Provider};
//!
//! let engine = LocationModeEngine::new(DeviceClass::Emulator, PlatformEra::PreUnifiedFlag);
//! engine.set_mode(LocationMode::HighAccuracy);
//!
//! assert!(engine.is_provider_enabled(Provider::Passive).unwrap());
//! assert!(!engine.is_provider_enabled(Provider::Network).unwrap());
//! assert!(engine.is_provider_enabled(Provider::Gps).unwrap());
//! assert!(engine.is_location_enabled().is_err());
//! ```

use crate::config::SessionConfig;
use crate::device::{DeviceClass, PlatformEra};
use crate::mode::LocationMode;
use crate::policy::{self, ProviderStateSet};
use crate::provider::Provider;
use crate::result::{LocModeError, LocModeResult};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, trace, warn};

/// The two-operation location settings contract
///
/// Implemented by [`LocationModeEngine`]; external backends (a device bridge,
/// a recorded fixture) implement it to be checked by
/// [`crate::conformance::ConformanceSuite`].
pub trait LocationSettings {
    /// Apply a location mode
    fn set_mode(&self, mode: LocationMode) -> LocModeResult<()>;

    /// Query a single provider (pre-unified era only)
    fn is_provider_enabled(&self, provider: Provider) -> LocModeResult<bool>;

    /// Query the aggregate flag (unified era only)
    fn is_location_enabled(&self) -> LocModeResult<bool>;
}

/// Location mode policy engine for one session
#[derive(Debug)]
pub struct LocationModeEngine {
    device_class: DeviceClass,
    era: PlatformEra,
    mode: RwLock<LocationMode>,
}

impl LocationModeEngine {
    /// Start a session with mode [`LocationMode::Off`]
    #[must_use]
    pub fn new(device_class: DeviceClass, era: PlatformEra) -> Self {
        Self::with_initial_mode(device_class, era, LocationMode::default())
    }

    /// Start a session with an explicit initial mode
    #[must_use]
    pub fn with_initial_mode(
        device_class: DeviceClass,
        era: PlatformEra,
        mode: LocationMode,
    ) -> Self {
        info!(
            device_class = %device_class,
            era = %era,
            mode = %mode,
            "location mode session started"
        );
        Self {
            device_class,
            era,
            mode: RwLock::new(mode),
        }
    }

    /// Start a session from configuration
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::with_initial_mode(config.device_class, config.era, config.initial_mode)
    }

    /// Device class fixed for this session
    #[must_use]
    pub const fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    /// Platform era fixed for this session
    #[must_use]
    pub const fn era(&self) -> PlatformEra {
        self.era
    }

    /// Current mode
    #[must_use]
    pub fn mode(&self) -> LocationMode {
        *self.read_mode()
    }

    /// Record a new current mode
    pub fn set_mode(&self, mode: LocationMode) {
        let previous = {
            let mut guard = self.write_mode();
            std::mem::replace(&mut *guard, mode)
        };
        debug!(from = %previous, to = %mode, "location mode changed");
    }

    /// Record a new current mode from its raw platform value
    ///
    /// # Errors
    /// Returns [`LocModeError::InvalidArgument`] for values outside `0..=3`;
    /// the current mode is left unchanged.
    pub fn set_mode_raw(&self, raw: i32) -> LocModeResult<()> {
        let mode = LocationMode::from_raw(raw)?;
        self.set_mode(mode);
        Ok(())
    }

    /// Whether `provider` is enabled under the current mode
    ///
    /// # Errors
    /// Returns [`LocModeError::UnsupportedInEra`] in the unified era.
    pub fn is_provider_enabled(&self, provider: Provider) -> LocModeResult<bool> {
        if self.era != PlatformEra::PreUnifiedFlag {
            return Err(LocModeError::unsupported_in_era("is_provider_enabled", self.era));
        }
        let mode = self.mode();
        let enabled = policy::provider_enabled(mode, self.device_class, provider);
        trace!(provider = %provider, mode = %mode, enabled, "provider queried");
        Ok(enabled)
    }

    /// Whether location is enabled under the current mode
    ///
    /// # Errors
    /// Returns [`LocModeError::UnsupportedInEra`] in the pre-unified era.
    pub fn is_location_enabled(&self) -> LocModeResult<bool> {
        if self.era != PlatformEra::UnifiedFlag {
            return Err(LocModeError::unsupported_in_era("is_location_enabled", self.era));
        }
        let mode = self.mode();
        let enabled = policy::location_enabled(mode);
        trace!(mode = %mode, enabled, "location enabled queried");
        Ok(enabled)
    }

    /// Full provider state for the current mode in this session's era
    #[must_use]
    pub fn provider_states(&self) -> ProviderStateSet {
        ProviderStateSet::evaluate(self.mode(), self.device_class, self.era)
    }

    // The guarded value is a Copy enum, so a poisoned lock still holds a whole mode.
    fn read_mode(&self) -> RwLockReadGuard<'_, LocationMode> {
        self.mode.read().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("recovering poisoned location mode lock");
            poisoned.into_inner()
        })
    }

    fn write_mode(&self) -> RwLockWriteGuard<'_, LocationMode> {
        self.mode.write().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("recovering poisoned location mode lock");
            poisoned.into_inner()
        })
    }
}

impl LocationSettings for LocationModeEngine {
    fn set_mode(&self, mode: LocationMode) -> LocModeResult<()> {
        Self::set_mode(self, mode);
        Ok(())
    }

    fn is_provider_enabled(&self, provider: Provider) -> LocModeResult<bool> {
        Self::is_provider_enabled(self, provider)
    }

    fn is_location_enabled(&self) -> LocModeResult<bool> {
        Self::is_location_enabled(self)
    }
}
