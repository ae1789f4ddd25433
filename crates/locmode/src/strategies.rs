//! Proptest Strategies for Location Mode Testing
//!
//! Generators for modes, session contexts and mode-change sequences, for
//! property tests against [`crate::LocationModeEngine`] or any other
//! [`crate::LocationSettings`] backend.
//!
//! ```rust,ignore
//! proptest! {
//!     #[test]
//!     fn prop_query_reflects_last_mode(modes in mode_sequence(1..20)) {
//!         let engine =
//!             LocationModeEngine::new(DeviceClass::Emulator, PlatformEra::PreUnifiedFlag);
//!         for mode in &modes {
//!             engine.set_mode(*mode);
//!         }
//!         prop_assert_eq!(engine.mode(), *modes.last().unwrap());
//!     }
//! }
//! ```

use crate::device::{DeviceClass, PlatformEra};
use crate::mode::LocationMode;
use crate::provider::Provider;
use proptest::prelude::*;
use std::ops::Range;

/// Any of the four modes
pub fn any_mode() -> impl Strategy<Value = LocationMode> {
    prop::sample::select(LocationMode::ALL.to_vec())
}

/// Any raw integer outside the valid mode range
pub fn invalid_raw_mode() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..0, 4..=i32::MAX]
}

/// Any provider
pub fn any_provider() -> impl Strategy<Value = Provider> {
    prop::sample::select(Provider::ALL.to_vec())
}

/// Any device class
pub fn any_device_class() -> impl Strategy<Value = DeviceClass> {
    prop::sample::select(DeviceClass::ALL.to_vec())
}

/// Any platform era
pub fn any_era() -> impl Strategy<Value = PlatformEra> {
    prop::sample::select(PlatformEra::ALL.to_vec())
}

/// Any `(era, device class)` session context
pub fn any_context() -> impl Strategy<Value = (PlatformEra, DeviceClass)> {
    (any_era(), any_device_class())
}

/// A sequence of mode changes
pub fn mode_sequence(len: Range<usize>) -> impl Strategy<Value = Vec<LocationMode>> {
    prop::collection::vec(any_mode(), len)
}

/// A sequence where every mode is applied twice in a row
pub fn repeated_mode_sequence(len: Range<usize>) -> impl Strategy<Value = Vec<LocationMode>> {
    mode_sequence(len).prop_map(|modes| modes.into_iter().flat_map(|m| [m, m]).collect())
}
