//! Table command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_table, OutputFormat};
use crate::TableArgs;
use locmode::decision_table;

/// Execute the table command
pub fn execute_table(config: &CliConfig, args: &TableArgs) -> CliResult<()> {
    print!("{}", table_output(config, args.format)?);
    Ok(())
}

/// Render the session's decision table
pub fn table_output(config: &CliConfig, format: OutputFormat) -> CliResult<String> {
    let session = &config.session;
    let rows = decision_table(session.device_class, session.era);
    match format {
        OutputFormat::Text => Ok(render_table(&rows, session.device_class, session.era)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)? + "\n"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use locmode::{DeviceClass, PlatformEra, SessionConfig};

    fn config(class: DeviceClass, era: PlatformEra) -> CliConfig {
        CliConfig::new().with_session(SessionConfig::new().with_device_class(class).with_era(era))
    }

    #[test]
    fn test_text_table_for_physical_device() {
        let out = table_output(
            &config(DeviceClass::PhysicalDevice, PlatformEra::PreUnifiedFlag),
            OutputFormat::Text,
        )
        .unwrap();
        let battery = out.lines().find(|l| l.starts_with("battery-saving")).unwrap();
        assert_eq!(
            battery.split_whitespace().collect::<Vec<_>>(),
            vec!["battery-saving", "on", "on", "off"]
        );
    }

    #[test]
    fn test_json_table_rows() {
        let out = table_output(
            &config(DeviceClass::Emulator, PlatformEra::UnifiedFlag),
            OutputFormat::Json,
        )
        .unwrap();
        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 4);
        assert_eq!(rows[0]["mode"], "off");
        assert_eq!(rows[0]["state"]["location_enabled"], false);
        assert_eq!(rows[3]["state"]["location_enabled"], true);
    }
}
