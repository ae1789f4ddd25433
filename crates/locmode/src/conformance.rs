//! Location Mode Conformance Suite
//!
//! Replays the location-mode behavior checks against any
//! [`LocationSettings`] backend. Each check sweeps all four modes in raw-value
//! order and compares what the backend reports with the expected table.
//! Checks that do not apply to the session's era or device class are
//! reported as skipped, never run.

use crate::device::{DeviceClass, PlatformEra};
use crate::engine::LocationSettings;
use crate::mode::LocationMode;
use crate::provider::Provider;
use crate::result::LocModeResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// A single behavioral check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Passive provider stays enabled in every mode
    PassiveAlwaysEnabled,
    /// Network provider never turns on for an emulator
    NetworkNeverOnEmulator,
    /// Network provider follows battery-saving-or-better on real hardware
    NetworkOnPhysicalDevice,
    /// GPS provider follows sensors-only and high-accuracy
    GpsForSensorsAndHighAccuracy,
    /// Aggregate flag is off only when the mode is off
    LocationEnabledUnified,
}

impl Check {
    /// All checks in run order
    pub const ALL: [Self; 5] = [
        Self::PassiveAlwaysEnabled,
        Self::NetworkNeverOnEmulator,
        Self::NetworkOnPhysicalDevice,
        Self::GpsForSensorsAndHighAccuracy,
        Self::LocationEnabledUnified,
    ];

    /// Stable snake_case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PassiveAlwaysEnabled => "passive_always_enabled",
            Self::NetworkNeverOnEmulator => "network_never_on_emulator",
            Self::NetworkOnPhysicalDevice => "network_on_physical_device",
            Self::GpsForSensorsAndHighAccuracy => "gps_for_sensors_and_high_accuracy",
            Self::LocationEnabledUnified => "location_enabled_unified",
        }
    }

    /// Why the check does not apply to a context, `None` if it does
    #[must_use]
    pub const fn skip_reason(self, era: PlatformEra, class: DeviceClass) -> Option<&'static str> {
        match self {
            Self::LocationEnabledUnified => match era {
                PlatformEra::UnifiedFlag => None,
                PlatformEra::PreUnifiedFlag => Some("only applies to the unified era"),
            },
            _ if !era.has_per_provider_state() => Some("only applies before the unified era"),
            Self::NetworkNeverOnEmulator if !class.is_emulator() => {
                Some("device is not an emulator")
            }
            Self::NetworkOnPhysicalDevice if class.is_emulator() => Some("device is an emulator"),
            _ => None,
        }
    }

    /// What is queried
    #[must_use]
    pub const fn target(self) -> Target {
        match self {
            Self::PassiveAlwaysEnabled => Target::Provider(Provider::Passive),
            Self::NetworkNeverOnEmulator | Self::NetworkOnPhysicalDevice => {
                Target::Provider(Provider::Network)
            }
            Self::GpsForSensorsAndHighAccuracy => Target::Provider(Provider::Gps),
            Self::LocationEnabledUnified => Target::LocationEnabled,
        }
    }

    /// Expected answer for each mode, indexed by raw mode value
    #[must_use]
    pub const fn expected(self) -> [bool; 4] {
        match self {
            Self::PassiveAlwaysEnabled => [true, true, true, true],
            Self::NetworkNeverOnEmulator => [false, false, false, false],
            Self::NetworkOnPhysicalDevice => [false, false, true, true],
            Self::GpsForSensorsAndHighAccuracy => [false, true, false, true],
            Self::LocationEnabledUnified => [false, true, true, true],
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// What a check queries after each mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// A single provider
    Provider(Provider),
    /// The aggregate flag
    LocationEnabled,
}

impl Target {
    fn query(self, backend: &dyn LocationSettings) -> LocModeResult<bool> {
        match self {
            Self::Provider(provider) => backend.is_provider_enabled(provider),
            Self::LocationEnabled => backend.is_location_enabled(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(provider) => write!(f, "{provider} provider"),
            Self::LocationEnabled => f.write_str("location enabled"),
        }
    }
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Every mode matched
    Passed,
    /// A mode mismatched or the backend errored
    Failed {
        /// First failure
        message: String,
    },
    /// Not applicable to this context
    Skipped {
        /// Why it was skipped
        reason: String,
    },
}

impl CheckOutcome {
    /// Check if passed
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Check if failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Check if skipped
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Result of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Which check
    pub check: Check,
    /// How it went
    pub outcome: CheckOutcome,
}

/// Results of a suite run in one context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Era of the session
    pub era: PlatformEra,
    /// Device class of the session
    pub device_class: DeviceClass,
    /// One result per check, in run order
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// Number of passed checks
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_passed()).count()
    }

    /// Number of failed checks
    #[must_use]
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_failed()).count()
    }

    /// Number of skipped checks
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_skipped()).count()
    }

    /// True if nothing failed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Outcome of a specific check
    #[must_use]
    pub fn outcome(&self, check: Check) -> Option<&CheckOutcome> {
        self.results
            .iter()
            .find(|r| r.check == check)
            .map(|r| &r.outcome)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> LocModeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs checks against a backend in a fixed era and device class
#[derive(Debug, Clone)]
pub struct ConformanceSuite {
    era: PlatformEra,
    device_class: DeviceClass,
    checks: Vec<Check>,
}

impl ConformanceSuite {
    /// Suite with every check
    #[must_use]
    pub fn new(era: PlatformEra, device_class: DeviceClass) -> Self {
        Self {
            era,
            device_class,
            checks: Check::ALL.to_vec(),
        }
    }

    /// Restrict to the given checks
    #[must_use]
    pub fn only(mut self, checks: impl IntoIterator<Item = Check>) -> Self {
        self.checks = checks.into_iter().collect();
        self
    }

    /// Run every configured check
    pub fn run(&self, backend: &dyn LocationSettings) -> ConformanceReport {
        let results = self
            .checks
            .iter()
            .map(|&check| CheckResult {
                check,
                outcome: self.run_check(backend, check),
            })
            .collect();
        let report = ConformanceReport {
            era: self.era,
            device_class: self.device_class,
            results,
        };
        info!(
            era = %self.era,
            device_class = %self.device_class,
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            "conformance run finished"
        );
        report
    }

    fn run_check(&self, backend: &dyn LocationSettings, check: Check) -> CheckOutcome {
        if let Some(reason) = check.skip_reason(self.era, self.device_class) {
            debug!(%check, reason, "check skipped");
            return CheckOutcome::Skipped {
                reason: reason.to_string(),
            };
        }
        match sweep(backend, check) {
            Ok(None) => CheckOutcome::Passed,
            Ok(Some(message)) | Err(message) => {
                debug!(%check, %message, "check failed");
                CheckOutcome::Failed { message }
            }
        }
    }
}

// Ok(None) on success, Ok(Some(..)) on the first mismatch, Err(..) on a backend error.
fn sweep(backend: &dyn LocationSettings, check: Check) -> Result<Option<String>, String> {
    let target = check.target();
    for (mode, expected) in LocationMode::ALL.into_iter().zip(check.expected()) {
        backend
            .set_mode(mode)
            .map_err(|e| format!("setting mode {mode} failed: {e}"))?;
        let actual = target
            .query(backend)
            .map_err(|e| format!("querying {target} in mode {mode} failed: {e}"))?;
        if actual != expected {
            return Ok(Some(format!(
                "{target} in mode {mode}: expected {expected}, got {actual}"
            )));
        }
    }
    Ok(None)
}

/// Run the suite in every era and device class, building a fresh backend per context
pub fn run_all_contexts<B, F>(mut make_backend: F) -> Vec<ConformanceReport>
where
    B: LocationSettings,
    F: FnMut(PlatformEra, DeviceClass) -> B,
{
    let mut reports = Vec::with_capacity(PlatformEra::ALL.len() * DeviceClass::ALL.len());
    for era in PlatformEra::ALL {
        for class in DeviceClass::ALL {
            let backend = make_backend(era, class);
            reports.push(ConformanceSuite::new(era, class).run(&backend));
        }
    }
    reports
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::engine::LocationModeEngine;
    use crate::result::LocModeError;
    use std::cell::Cell;

    /// Backend that reports GPS on in every mode
    struct StuckGps {
        mode: Cell<LocationMode>,
    }

    impl LocationSettings for StuckGps {
        fn set_mode(&self, mode: LocationMode) -> LocModeResult<()> {
            self.mode.set(mode);
            Ok(())
        }

        fn is_provider_enabled(&self, provider: Provider) -> LocModeResult<bool> {
            Ok(match provider {
                Provider::Passive | Provider::Gps => true,
                Provider::Network => false,
            })
        }

        fn is_location_enabled(&self) -> LocModeResult<bool> {
            Ok(self.mode.get().is_on())
        }
    }

    /// Backend whose settings writes always fail
    struct Unreachable;

    impl LocationSettings for Unreachable {
        fn set_mode(&self, _mode: LocationMode) -> LocModeResult<()> {
            Err(LocModeError::invalid_argument("device offline"))
        }

        fn is_provider_enabled(&self, _provider: Provider) -> LocModeResult<bool> {
            Ok(true)
        }

        fn is_location_enabled(&self) -> LocModeResult<bool> {
            Ok(true)
        }
    }

    #[test]
    fn test_engine_passes_legacy_emulator() {
        let engine = LocationModeEngine::new(DeviceClass::Emulator, PlatformEra::PreUnifiedFlag);
        let report = ConformanceSuite::new(PlatformEra::PreUnifiedFlag, DeviceClass::Emulator)
            .run(&engine);
        assert!(report.all_passed());
        assert_eq!(report.passed(), 3);
        assert_eq!(report.skipped(), 2);
        assert!(report
            .outcome(Check::NetworkOnPhysicalDevice)
            .unwrap()
            .is_skipped());
        assert!(report
            .outcome(Check::LocationEnabledUnified)
            .unwrap()
            .is_skipped());
    }

    #[test]
    fn test_engine_passes_legacy_physical() {
        let engine =
            LocationModeEngine::new(DeviceClass::PhysicalDevice, PlatformEra::PreUnifiedFlag);
        let report =
            ConformanceSuite::new(PlatformEra::PreUnifiedFlag, DeviceClass::PhysicalDevice)
                .run(&engine);
        assert!(report.all_passed());
        assert_eq!(report.passed(), 3);
        assert!(report
            .outcome(Check::NetworkNeverOnEmulator)
            .unwrap()
            .is_skipped());
    }

    #[test]
    fn test_engine_passes_unified() {
        for class in DeviceClass::ALL {
            let engine = LocationModeEngine::new(class, PlatformEra::UnifiedFlag);
            let report = ConformanceSuite::new(PlatformEra::UnifiedFlag, class).run(&engine);
            assert!(report.all_passed());
            assert_eq!(report.passed(), 1);
            assert_eq!(report.skipped(), 4);
        }
    }

    #[test]
    fn test_run_all_contexts_with_engine() {
        let reports = run_all_contexts(|era, class| LocationModeEngine::new(class, era));
        assert_eq!(reports.len(), 4);
        assert!(reports.iter().all(ConformanceReport::all_passed));
        let total_passed: usize = reports.iter().map(ConformanceReport::passed).sum();
        assert_eq!(total_passed, 3 + 3 + 1 + 1);
    }

    #[test]
    fn test_mismatch_is_reported_with_first_failing_mode() {
        let backend = StuckGps {
            mode: Cell::new(LocationMode::Off),
        };
        let report = ConformanceSuite::new(PlatformEra::PreUnifiedFlag, DeviceClass::Emulator)
            .only([Check::GpsForSensorsAndHighAccuracy])
            .run(&backend);
        assert_eq!(report.failed(), 1);
        match report.outcome(Check::GpsForSensorsAndHighAccuracy).unwrap() {
            CheckOutcome::Failed { message } => {
                assert!(message.contains("gps provider"));
                assert!(message.contains("mode off"));
                assert!(message.contains("expected false, got true"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_backend_error_fails_check() {
        let report = ConformanceSuite::new(PlatformEra::UnifiedFlag, DeviceClass::PhysicalDevice)
            .run(&Unreachable);
        assert_eq!(report.failed(), 1);
        match report.outcome(Check::LocationEnabledUnified).unwrap() {
            CheckOutcome::Failed { message } => assert!(message.contains("device offline")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_era_mismatch_from_engine_is_failure_not_panic() {
        // Suite believes the era is legacy, backend is unified.
        let engine = LocationModeEngine::new(DeviceClass::Emulator, PlatformEra::UnifiedFlag);
        let report = ConformanceSuite::new(PlatformEra::PreUnifiedFlag, DeviceClass::Emulator)
            .only([Check::PassiveAlwaysEnabled])
            .run(&engine);
        match report.outcome(Check::PassiveAlwaysEnabled).unwrap() {
            CheckOutcome::Failed { message } => assert!(message.contains("not supported")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_skip_reasons() {
        assert_eq!(
            Check::PassiveAlwaysEnabled
                .skip_reason(PlatformEra::UnifiedFlag, DeviceClass::Emulator),
            Some("only applies before the unified era")
        );
        assert_eq!(
            Check::NetworkNeverOnEmulator
                .skip_reason(PlatformEra::PreUnifiedFlag, DeviceClass::PhysicalDevice),
            Some("device is not an emulator")
        );
        assert_eq!(
            Check::NetworkOnPhysicalDevice
                .skip_reason(PlatformEra::PreUnifiedFlag, DeviceClass::Emulator),
            Some("device is an emulator")
        );
        assert_eq!(
            Check::GpsForSensorsAndHighAccuracy
                .skip_reason(PlatformEra::PreUnifiedFlag, DeviceClass::Emulator),
            None
        );
    }

    #[test]
    fn test_report_json() {
        let engine = LocationModeEngine::new(DeviceClass::Emulator, PlatformEra::UnifiedFlag);
        let report =
            ConformanceSuite::new(PlatformEra::UnifiedFlag, DeviceClass::Emulator).run(&engine);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["era"], "unified_flag");
        assert_eq!(json["results"][4]["check"], "location_enabled_unified");
        assert_eq!(json["results"][4]["outcome"]["status"], "passed");
        assert_eq!(json["results"][0]["outcome"]["status"], "skipped");
    }
}
