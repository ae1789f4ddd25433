//! Session configuration
//!
//! Fixes the device class and platform era for a session, plus the mode the
//! session starts in. Loadable from YAML or JSON.

use crate::classify::{
    DeviceClassifier, EraClassifier, FingerprintClassifier, SdkThresholdClassifier,
};
use crate::device::{DeviceClass, PlatformEra};
use crate::mode::LocationMode;
use crate::result::{LocModeError, LocModeResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Device class for the session
    pub device_class: DeviceClass,
    /// Platform era for the session
    pub era: PlatformEra,
    /// Mode active when the session starts
    pub initial_mode: LocationMode,
}

impl SessionConfig {
    /// Create a default configuration (physical device, pre-unified era, mode off)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive device class and era with the default classifiers
    #[must_use]
    pub fn detect(fingerprint: &str, sdk_level: u32) -> Self {
        Self::detect_with(
            &FingerprintClassifier::default(),
            &SdkThresholdClassifier::default(),
            fingerprint,
            sdk_level,
        )
    }

    /// Derive device class and era with injected classifiers
    #[must_use]
    pub fn detect_with(
        devices: &dyn DeviceClassifier,
        eras: &dyn EraClassifier,
        fingerprint: &str,
        sdk_level: u32,
    ) -> Self {
        let device_class = devices.classify(fingerprint);
        let era = eras.classify(sdk_level);
        debug!(fingerprint, sdk_level, %device_class, %era, "session inputs detected");
        Self {
            device_class,
            era,
            initial_mode: LocationMode::default(),
        }
    }

    /// Set device class
    #[must_use]
    pub const fn with_device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = device_class;
        self
    }

    /// Set platform era
    #[must_use]
    pub const fn with_era(mut self, era: PlatformEra) -> Self {
        self.era = era;
        self
    }

    /// Set initial mode
    #[must_use]
    pub const fn with_initial_mode(mut self, mode: LocationMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Parse from YAML
    pub fn from_yaml_str(yaml: &str) -> LocModeResult<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse from JSON
    pub fn from_json_str(json: &str) -> LocModeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a file; `.json` files are read as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> LocModeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(LocModeError::config(format!(
                "session config {} is empty",
                path.display()
            )));
        }
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> LocModeResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
