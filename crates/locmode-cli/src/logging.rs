//! Log subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the filter follows `-q` / `-v`.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Build the log filter for a verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Install the global stderr subscriber
///
/// A second call is a no-op.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
