//! Check command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{render_report, OutputFormat};
use crate::CheckArgs;
use locmode::{run_all_contexts, ConformanceReport, ConformanceSuite, LocationModeEngine};

/// Execute the check command; fails if any check fails
pub fn execute_check(config: &CliConfig, args: &CheckArgs) -> CliResult<()> {
    let reports = run_reports(config, args.all_contexts);
    let use_color = config.color.should_color();
    print!("{}", check_output(&reports, args.format, use_color)?);
    ensure_all_passed(&reports)
}

/// Fail with the total number of failed checks across `reports`
pub fn ensure_all_passed(reports: &[ConformanceReport]) -> CliResult<()> {
    let failed: usize = reports.iter().map(ConformanceReport::failed).sum();
    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::CheckFailed { failed })
    }
}

/// Run the suite against the configured session, or against every context
#[must_use]
pub fn run_reports(config: &CliConfig, all_contexts: bool) -> Vec<ConformanceReport> {
    if all_contexts {
        return run_all_contexts(|era, class| LocationModeEngine::new(class, era));
    }
    let session = &config.session;
    let engine = LocationModeEngine::from_config(session);
    vec![ConformanceSuite::new(session.era, session.device_class).run(&engine)]
}

/// Render reports
pub fn check_output(
    reports: &[ConformanceReport],
    format: OutputFormat,
    use_color: bool,
) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|r| render_report(r, use_color))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)? + "\n"),
    }
}
