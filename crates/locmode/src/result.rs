//! Result and error types for the location mode engine.

use crate::device::PlatformEra;
use thiserror::Error;

/// Result type for location mode operations
pub type LocModeResult<T> = Result<T, LocModeError>;

/// Errors that can occur in the location mode engine
#[derive(Debug, Error)]
pub enum LocModeError {
    /// A value outside an enumerated set was supplied (programming error)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Query style does not match the session's platform era
    #[error("{operation} is not supported in the {era} era")]
    UnsupportedInEra {
        /// Operation that was attempted
        operation: &'static str,
        /// Era the session is fixed to
        era: PlatformEra,
    },

    /// Session configuration could not be interpreted
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl LocModeError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an era mismatch error
    #[must_use]
    pub const fn unsupported_in_era(operation: &'static str, era: PlatformEra) -> Self {
        Self::UnsupportedInEra { operation, era }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error is a caller contract violation rather than an environment failure
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::UnsupportedInEra { .. }
        )
    }
}
