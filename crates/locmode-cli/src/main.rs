//! locmode: command-line interface for the location mode policy engine
//!
//! ## Usage
//!
//! ```bash
//! locmode --device emulator table              # Decision table for an emulator
//! locmode --era unified query --mode off       # Aggregate flag for a mode
//! locmode query --mode 2 --provider network    # Single provider, raw mode value
//! locmode detect --fingerprint "$FP" --sdk 28  # Classify a device
//! locmode check --all-contexts                 # Conformance in every context
//! ```

use clap::Parser;
use locmode_cli::{handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    debug!(session = ?config.session, "configuration resolved");

    match cli.command {
        Commands::Table(args) => handlers::execute_table(&config, &args),
        Commands::Query(args) => handlers::execute_query(&config, &args),
        Commands::Detect(args) => handlers::execute_detect(&args),
        Commands::Check(args) => handlers::execute_check(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    logging::init(verbosity);

    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .load_session(cli.config.as_deref(), cli.device, cli.era)
}
