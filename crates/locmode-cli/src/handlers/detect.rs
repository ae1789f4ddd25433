//! Detect command handler

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use crate::DetectArgs;
use locmode::{FingerprintClassifier, SdkThresholdClassifier, SessionConfig};
use serde_json::json;

/// Execute the detect command
pub fn execute_detect(args: &DetectArgs) -> CliResult<()> {
    print!("{}", detect_output(args)?);
    Ok(())
}

/// Classifiers selected by the arguments, falling back to the defaults
#[must_use]
pub fn classifiers(args: &DetectArgs) -> (FingerprintClassifier, SdkThresholdClassifier) {
    let devices = if args.markers.is_empty() {
        FingerprintClassifier::default()
    } else {
        FingerprintClassifier::with_markers(args.markers.iter().cloned())
    };
    let eras = args
        .threshold
        .map_or_else(SdkThresholdClassifier::default, SdkThresholdClassifier::new);
    (devices, eras)
}

/// Classify and render
pub fn detect_output(args: &DetectArgs) -> CliResult<String> {
    if args.fingerprint.trim().is_empty() {
        return Err(CliError::invalid_argument("fingerprint must not be empty"));
    }
    if args.markers.iter().any(|m| m.trim().is_empty()) {
        return Err(CliError::invalid_argument("emulator marker must not be empty"));
    }
    let (devices, eras) = classifiers(args);
    let session = SessionConfig::detect_with(&devices, &eras, &args.fingerprint, args.sdk);
    Ok(match args.format {
        OutputFormat::Text => format!(
            "device: {}\nera: {}\n",
            session.device_class, session.era
        ),
        OutputFormat::Json => {
            let value = json!({
                "fingerprint": args.fingerprint,
                "sdk": args.sdk,
                "device_class": session.device_class,
                "era": session.era,
            });
            serde_json::to_string_pretty(&value)? + "\n"
        }
    })
}
