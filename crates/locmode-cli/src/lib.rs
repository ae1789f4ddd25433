//! locmode CLI Library
//!
//! Command-line front end for the location mode policy engine.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{CheckArgs, Cli, ColorArg, Commands, DetectArgs, QueryArgs, TableArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_report, render_state, render_table, OutputFormat};
