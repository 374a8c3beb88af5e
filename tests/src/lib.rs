//! Fixtures shared by the end-to-end tests

use pulse_report::ReportKind;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A representative backend answer for each report kind
pub fn sample_payload(kind: ReportKind) -> Value {
    match kind {
        ReportKind::Updates => json!({
            "Identity Trust": ["Shipped passkey enrollment", "Fixed MFA prompt loop"],
            "AIC": ["Migrated audit log store"]
        }),
        ReportKind::Metrics => json!({
            "Identity Trust": [12, 4, 2, 1, 0, 3, 75.0, 36.5, 10.25],
            "AIC": [3, 1, 0, 0, 0, 1, 100, 12, 4]
        }),
        ReportKind::Holidays => json!(["January 1 | New Year's Day", "May 27 | Memorial Day"]),
        ReportKind::Risk => json!(["Bulk export delayed to Q3 | waiting on storage quota"]),
    }
}

/// Write a pulse.toml pointing at `base_url` into `dir`
pub fn write_config(dir: &Path, base_url: &str, extra: &str) -> std::io::Result<PathBuf> {
    let path = dir.join("pulse.toml");
    let content = format!("[backend]\nbase_url = \"{}\"\n{}", base_url, extra);
    fs::write(&path, content)?;
    Ok(path)
}
