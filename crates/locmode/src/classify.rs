//! Session Input Classification
//!
//! Strategies that turn raw build facts into the session-fixed inputs of the
//! engine. The engine itself never classifies; callers pick a strategy and
//! pass the result in through [`crate::SessionConfig`].
//!
//! Fingerprints that match no emulator marker (custom ROMs included) are
//! classified as [`DeviceClass::PhysicalDevice`].

use crate::device::{DeviceClass, PlatformEra};
use serde::{Deserialize, Serialize};

/// First SDK level with the unified location flag (Android Q)
pub const UNIFIED_FLAG_SDK_LEVEL: u32 = 29;

/// Default fingerprint marker for emulator builds
pub const DEFAULT_EMULATOR_MARKER: &str = "generic";

/// Derives a [`DeviceClass`] from a build fingerprint
pub trait DeviceClassifier {
    /// Classify a fingerprint
    fn classify(&self, fingerprint: &str) -> DeviceClass;
}

/// Derives a [`PlatformEra`] from an SDK level
pub trait EraClassifier {
    /// Classify an SDK level
    fn classify(&self, sdk_level: u32) -> PlatformEra;
}

/// Substring match on the build fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintClassifier {
    markers: Vec<String>,
}

impl Default for FingerprintClassifier {
    fn default() -> Self {
        Self::with_markers([DEFAULT_EMULATOR_MARKER])
    }
}

impl FingerprintClassifier {
    /// Classifier that treats any fingerprint containing one of `markers` as an emulator
    #[must_use]
    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    /// Add another emulator marker
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        if !marker.is_empty() && !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    /// Configured markers
    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}

impl DeviceClassifier for FingerprintClassifier {
    fn classify(&self, fingerprint: &str) -> DeviceClass {
        if self.markers.iter().any(|m| fingerprint.contains(m.as_str())) {
            DeviceClass::Emulator
        } else {
            DeviceClass::PhysicalDevice
        }
    }
}

/// SDK level threshold for the unified flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkThresholdClassifier {
    threshold: u32,
}

impl Default for SdkThresholdClassifier {
    fn default() -> Self {
        Self::new(UNIFIED_FLAG_SDK_LEVEL)
    }
}

impl SdkThresholdClassifier {
    /// Classifier with a custom first unified-flag SDK level
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// First SDK level classified as unified
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl EraClassifier for SdkThresholdClassifier {
    fn classify(&self, sdk_level: u32) -> PlatformEra {
        if sdk_level >= self.threshold {
            PlatformEra::UnifiedFlag
        } else {
            PlatformEra::PreUnifiedFlag
        }
    }
}

/// Fixed answer, for sessions whose device class is already known
impl DeviceClassifier for DeviceClass {
    fn classify(&self, _fingerprint: &str) -> DeviceClass {
        *self
    }
}

/// Fixed answer, for sessions whose era is already known
impl EraClassifier for PlatformEra {
    fn classify(&self, _sdk_level: u32) -> PlatformEra {
        *self
    }
}
