//! Output formatting

use clap::ValueEnum;
use console::style;
use locmode::{
    CheckOutcome, ConformanceReport, DecisionRow, DeviceClass, PlatformEra, Provider,
    ProviderStateSet,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

fn flag(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Render a decision table as aligned text
#[must_use]
pub fn render_table(rows: &[DecisionRow], class: DeviceClass, era: PlatformEra) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Location mode table ({class}, {era} era)");
    match era {
        PlatformEra::PreUnifiedFlag => {
            let _ = writeln!(out, "{:<16}{:<10}{:<10}{:<10}", "MODE", "PASSIVE", "NETWORK", "GPS");
            for row in rows {
                let cell = |p| flag(row.state.provider(p).unwrap_or(false));
                let _ = writeln!(
                    out,
                    "{:<16}{:<10}{:<10}{:<10}",
                    row.mode,
                    cell(Provider::Passive),
                    cell(Provider::Network),
                    cell(Provider::Gps)
                );
            }
        }
        PlatformEra::UnifiedFlag => {
            let _ = writeln!(out, "{:<16}{:<10}", "MODE", "LOCATION");
            for row in rows {
                let _ = writeln!(
                    out,
                    "{:<16}{:<10}",
                    row.mode,
                    flag(row.state.location_enabled().unwrap_or(false))
                );
            }
        }
    }
    out
}

/// Render a full provider state set as text
#[must_use]
pub fn render_state(state: &ProviderStateSet) -> String {
    match state {
        ProviderStateSet::PreUnifiedFlag {
            passive,
            network,
            gps,
        } => format!(
            "passive: {}\nnetwork: {}\ngps: {}\n",
            flag(*passive),
            flag(*network),
            flag(*gps)
        ),
        ProviderStateSet::UnifiedFlag { location_enabled } => {
            format!("location: {}\n", flag(*location_enabled))
        }
    }
}

/// Render a conformance report as text
#[must_use]
pub fn render_report(report: &ConformanceReport, use_color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Conformance ({}, {} era)",
        report.device_class, report.era
    );
    for result in &report.results {
        let (label, detail) = match &result.outcome {
            CheckOutcome::Passed => (paint("PASS", Paint::Pass, use_color), String::new()),
            CheckOutcome::Failed { message } => {
                (paint("FAIL", Paint::Fail, use_color), format!(" - {message}"))
            }
            CheckOutcome::Skipped { reason } => {
                (paint("SKIP", Paint::Skip, use_color), format!(" ({reason})"))
            }
        };
        let _ = writeln!(out, "  {label} {}{detail}", result.check);
    }
    let _ = writeln!(
        out,
        "{} passed, {} failed, {} skipped",
        report.passed(),
        report.failed(),
        report.skipped()
    );
    out
}

#[derive(Clone, Copy)]
enum Paint {
    Pass,
    Fail,
    Skip,
}

fn paint(text: &str, kind: Paint, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let styled = match kind {
        Paint::Pass => style(text).green(),
        Paint::Fail => style(text).red().bold(),
        Paint::Skip => style(text).yellow(),
    };
    styled.force_styling(true).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use locmode::{decision_table, ConformanceSuite, LocationModeEngine};

    #[test]
    fn test_render_legacy_table() {
        let rows = decision_table(DeviceClass::Emulator, PlatformEra::PreUnifiedFlag);
        let text = render_table(&rows, DeviceClass::Emulator, PlatformEra::PreUnifiedFlag);
        assert!(text.contains("emulator, pre-unified era"));
        assert!(text.contains("NETWORK"));
        let high = text
            .lines()
            .find(|l| l.starts_with("high-accuracy"))
            .unwrap();
        let cells: Vec<&str> = high.split_whitespace().collect();
        assert_eq!(cells, vec!["high-accuracy", "on", "off", "on"]);
    }

    #[test]
    fn test_render_unified_table() {
        let rows = decision_table(DeviceClass::PhysicalDevice, PlatformEra::UnifiedFlag);
        let text = render_table(&rows, DeviceClass::PhysicalDevice, PlatformEra::UnifiedFlag);
        assert!(text.contains("LOCATION"));
        assert!(!text.contains("GPS"));
        let off = text.lines().find(|l| l.starts_with("off")).unwrap();
        assert_eq!(off.split_whitespace().collect::<Vec<_>>(), vec!["off", "off"]);
    }

    #[test]
    fn test_render_state() {
        let state = ProviderStateSet::PreUnifiedFlag {
            passive: true,
            network: true,
            gps: false,
        };
        assert_eq!(render_state(&state), "passive: on\nnetwork: on\ngps: off\n");
        let unified = ProviderStateSet::UnifiedFlag {
            location_enabled: true,
        };
        assert_eq!(render_state(&unified), "location: on\n");
    }

    #[test]
    fn test_render_report_without_color() {
        let engine = LocationModeEngine::new(DeviceClass::Emulator, PlatformEra::PreUnifiedFlag);
        let report =
            ConformanceSuite::new(PlatformEra::PreUnifiedFlag, DeviceClass::Emulator).run(&engine);
        let text = render_report(&report, false);
        assert!(text.contains("PASS passive_always_enabled"));
        assert!(text.contains("SKIP network_on_physical_device (device is an emulator)"));
        assert!(text.contains("3 passed, 0 failed, 2 skipped"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_paint_with_color_adds_escape_codes() {
        assert!(paint("PASS", Paint::Pass, true).contains('\u{1b}'));
        assert_eq!(paint("PASS", Paint::Pass, false), "PASS");
    }
}
