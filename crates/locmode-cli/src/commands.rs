//! CLI command definitions using clap

use crate::output::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use locmode::{DeviceClass, LocationMode, PlatformEra, Provider};
use std::path::PathBuf;

/// locmode: inspect and verify location mode provider policy
#[derive(Parser, Debug)]
#[command(name = "locmode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (log errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Session config file (YAML, or JSON with a .json extension)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Device class (emulator, physical); overrides the config file
    #[arg(long, global = true, value_parser = parse_device_class)]
    pub device: Option<DeviceClass>,

    /// Platform era (pre-unified, unified); overrides the config file
    #[arg(long, global = true, value_parser = parse_era)]
    pub era: Option<PlatformEra>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the decision table for the session
    Table(TableArgs),

    /// Set a mode and print the resulting provider state
    Query(QueryArgs),

    /// Classify a device from its build fingerprint and SDK level
    Detect(DetectArgs),

    /// Run the conformance checks against the engine
    Check(CheckArgs),
}

/// Arguments for the table command
#[derive(Parser, Debug)]
pub struct TableArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the query command
#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Location mode (off, sensors-only, battery-saving, high-accuracy, or 0-3)
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: LocationMode,

    /// Single provider to query (passive, network, gps)
    #[arg(short, long, value_parser = parse_provider)]
    pub provider: Option<Provider>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the detect command
#[derive(Parser, Debug)]
pub struct DetectArgs {
    /// Build fingerprint
    #[arg(long)]
    pub fingerprint: String,

    /// SDK level
    #[arg(long)]
    pub sdk: u32,

    /// Emulator fingerprint markers (default: generic)
    #[arg(long = "marker")]
    pub markers: Vec<String>,

    /// First SDK level with the unified flag (default: 29)
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Run in every era and device class instead of the configured session
    #[arg(long)]
    pub all_contexts: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

fn parse_mode(s: &str) -> Result<LocationMode, String> {
    s.parse().map_err(|e: locmode::LocModeError| e.to_string())
}

fn parse_provider(s: &str) -> Result<Provider, String> {
    s.parse().map_err(|e: locmode::LocModeError| e.to_string())
}

fn parse_device_class(s: &str) -> Result<DeviceClass, String> {
    s.parse().map_err(|e: locmode::LocModeError| e.to_string())
}

fn parse_era(s: &str) -> Result<PlatformEra, String> {
    s.parse().map_err(|e: locmode::LocModeError| e.to_string())
}
