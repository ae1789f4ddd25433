//! Location Modes
//!
//! The four coarse location-precision levels a user can select. Raw values
//! match the platform's secure-settings integers so a mode can travel as a
//! plain number between processes.

use crate::result::{LocModeError, LocModeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse location-precision setting
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LocationMode {
    /// Location access disabled
    #[default]
    Off,
    /// Only on-device sensors (GPS)
    SensorsOnly,
    /// Network-based positioning only
    BatterySaving,
    /// Both GPS and network positioning
    HighAccuracy,
}

impl LocationMode {
    /// All modes, in ascending raw-value order
    pub const ALL: [Self; 4] = [
        Self::Off,
        Self::SensorsOnly,
        Self::BatterySaving,
        Self::HighAccuracy,
    ];

    /// Convert a raw platform value into a mode
    ///
    /// # Errors
    /// Returns [`LocModeError::InvalidArgument`] for values outside `0..=3`.
    pub fn from_raw(raw: i32) -> LocModeResult<Self> {
        match raw {
            0 => Ok(Self::Off),
            1 => Ok(Self::SensorsOnly),
            2 => Ok(Self::BatterySaving),
            3 => Ok(Self::HighAccuracy),
            other => Err(LocModeError::invalid_argument(format!(
                "location mode {other} is out of range (expected 0..=3)"
            ))),
        }
    }

    /// Raw platform value of this mode
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::Off => 0,
            Self::SensorsOnly => 1,
            Self::BatterySaving => 2,
            Self::HighAccuracy => 3,
        }
    }

    /// Canonical kebab-case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::SensorsOnly => "sensors-only",
            Self::BatterySaving => "battery-saving",
            Self::HighAccuracy => "high-accuracy",
        }
    }

    /// Whether on-device sensors (GPS) are requested
    #[must_use]
    pub const fn requests_sensors(self) -> bool {
        matches!(self, Self::SensorsOnly | Self::HighAccuracy)
    }

    /// Whether network positioning is requested ("battery saving or better")
    #[must_use]
    pub const fn requests_network(self) -> bool {
        matches!(self, Self::BatterySaving | Self::HighAccuracy)
    }

    /// Whether any form of positioning is requested
    #[must_use]
    pub const fn is_on(self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for LocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for LocationMode {
    type Err = LocModeError;

    /// Accepts kebab, snake and camel case names, or a raw integer
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(raw) = trimmed.parse::<i32>() {
            return Self::from_raw(raw);
        }
        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "off" => Ok(Self::Off),
            "sensorsonly" => Ok(Self::SensorsOnly),
            "batterysaving" => Ok(Self::BatterySaving),
            "highaccuracy" => Ok(Self::HighAccuracy),
            _ => Err(LocModeError::invalid_argument(format!(
                "unknown location mode '{trimmed}'"
            ))),
        }
    }
}

impl TryFrom<i32> for LocationMode {
    type Error = LocModeError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<LocationMode> for i32 {
    fn from(mode: LocationMode) -> Self {
        mode.as_raw()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values_match_platform() {
        assert_eq!(LocationMode::Off.as_raw(), 0);
        assert_eq!(LocationMode::SensorsOnly.as_raw(), 1);
        assert_eq!(LocationMode::BatterySaving.as_raw(), 2);
        assert_eq!(LocationMode::HighAccuracy.as_raw(), 3);
    }

    #[test]
    fn test_from_raw_out_of_range() {
        for raw in [-1, 4, 99, i32::MIN, i32::MAX] {
            let err = LocationMode::from_raw(raw).unwrap_err();
            assert!(matches!(err, LocModeError::InvalidArgument { .. }), "raw {raw}");
        }
    }

    #[test]
    fn test_all_is_ordered_by_raw_value() {
        let raws: Vec<i32> = LocationMode::ALL.iter().map(|m| m.as_raw()).collect();
        assert_eq!(raws, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_default_is_off() {
        assert_eq!(LocationMode::default(), LocationMode::Off);
    }

    #[test]
    fn test_requests_sensors() {
        assert!(!LocationMode::Off.requests_sensors());
        assert!(LocationMode::SensorsOnly.requests_sensors());
        assert!(!LocationMode::BatterySaving.requests_sensors());
        assert!(LocationMode::HighAccuracy.requests_sensors());
    }

    #[test]
    fn test_requests_network() {
        assert!(!LocationMode::Off.requests_network());
        assert!(!LocationMode::SensorsOnly.requests_network());
        assert!(LocationMode::BatterySaving.requests_network());
        assert!(LocationMode::HighAccuracy.requests_network());
    }

    #[test]
    fn test_sensor_and_network_halves_overlap_only_at_high_accuracy() {
        let both: Vec<_> = LocationMode::ALL
            .into_iter()
            .filter(|m| m.requests_sensors() && m.requests_network())
            .collect();
        assert_eq!(both, vec![LocationMode::HighAccuracy]);
    }

    #[test]
    fn test_is_on() {
        assert!(!LocationMode::Off.is_on());
        assert!(LocationMode::SensorsOnly.is_on());
        assert!(LocationMode::BatterySaving.is_on());
        assert!(LocationMode::HighAccuracy.is_on());
    }

    #[test]
    fn test_parse_spellings() {
        assert_eq!("off".parse::<LocationMode>().unwrap(), LocationMode::Off);
        assert_eq!(
            "sensors-only".parse::<LocationMode>().unwrap(),
            LocationMode::SensorsOnly
        );
        assert_eq!(
            "battery_saving".parse::<LocationMode>().unwrap(),
            LocationMode::BatterySaving
        );
        assert_eq!(
            "HighAccuracy".parse::<LocationMode>().unwrap(),
            LocationMode::HighAccuracy
        );
        assert_eq!("2".parse::<LocationMode>().unwrap(), LocationMode::BatterySaving);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("medium".parse::<LocationMode>().is_err());
        assert!("5".parse::<LocationMode>().is_err());
        assert!("".parse::<LocationMode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for mode in LocationMode::ALL {
            assert_eq!(mode.to_string().parse::<LocationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&LocationMode::SensorsOnly).unwrap();
        assert_eq!(json, "\"sensors_only\"");
        let back: LocationMode = serde_json::from_str("\"high_accuracy\"").unwrap();
        assert_eq!(back, LocationMode::HighAccuracy);
    }
}
