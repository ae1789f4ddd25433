//! Query command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_state, OutputFormat};
use crate::QueryArgs;
use locmode::LocationModeEngine;
use serde_json::json;

/// Execute the query command
pub fn execute_query(config: &CliConfig, args: &QueryArgs) -> CliResult<()> {
    print!("{}", query_output(config, args)?);
    Ok(())
}

/// Set the requested mode on a fresh session and render what it reports
///
/// A single-provider query in the unified era fails the same way the engine
/// does.
pub fn query_output(config: &CliConfig, args: &QueryArgs) -> CliResult<String> {
    let engine = LocationModeEngine::from_config(&config.session);
    engine.set_mode(args.mode);

    if let Some(provider) = args.provider {
        let enabled = engine.is_provider_enabled(provider)?;
        return Ok(match args.format {
            OutputFormat::Text => format!("{provider}: {}\n", if enabled { "on" } else { "off" }),
            OutputFormat::Json => {
                let value = json!({
                    "mode": args.mode,
                    "provider": provider,
                    "enabled": enabled,
                });
                serde_json::to_string_pretty(&value)? + "\n"
            }
        });
    }

    let state = engine.provider_states();
    Ok(match args.format {
        OutputFormat::Text => render_state(&state),
        OutputFormat::Json => {
            let value = json!({ "mode": args.mode, "state": state });
            serde_json::to_string_pretty(&value)? + "\n"
        }
    })
}
