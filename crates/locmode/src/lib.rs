//! locmode: Location Mode Policy Engine
//!
//! Test double for an Android-style location subsystem. Given a coarse
//! location mode, a device class and a platform era, it answers the provider
//! queries a device would answer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │ Classifiers  │──►│ SessionConfig│──►│ LocationMode     │
//! │ (fingerprint,│   │ (class, era, │   │ Engine           │
//! │  SDK level)  │   │  init mode)  │   │  set_mode/query  │
//! └──────────────┘   └──────────────┘   └────────┬─────────┘
//!                                                │ policy::*
//!                                       ┌────────▼─────────┐
//!                                       │ ProviderStateSet │
//!                                       └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use locmode::{LocationMode, LocationModeEngine, SessionConfig};
//!
//! let config = SessionConfig::detect("google/coral/coral:10/QQ3A.200805.001", 29);
//! let engine = LocationModeEngine::from_config(&config);
//! engine.set_mode(LocationMode::SensorsOnly);
//! assert!(engine.is_location_enabled().unwrap());
//! ```

#![warn(missing_docs)]

pub mod classify;
mod config;
pub mod conformance;
mod device;
mod engine;
mod mode;
pub mod policy;
mod provider;
mod result;

/// Proptest strategies for location mode property tests
#[cfg(any(test, feature = "proptest"))]
pub mod strategies;

pub use classify::{
    DeviceClassifier, EraClassifier, FingerprintClassifier, SdkThresholdClassifier,
    DEFAULT_EMULATOR_MARKER, UNIFIED_FLAG_SDK_LEVEL,
};
pub use config::SessionConfig;
pub use conformance::{
    run_all_contexts, Check, CheckOutcome, CheckResult, ConformanceReport, ConformanceSuite,
};
pub use device::{DeviceClass, PlatformEra};
pub use engine::{LocationModeEngine, LocationSettings};
pub use mode::LocationMode;
pub use policy::{decision_table, DecisionRow, ProviderStateSet};
pub use provider::Provider;
pub use result::{LocModeError, LocModeResult};
