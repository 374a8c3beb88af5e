use crate::error::{CliError, Result};
use crate::settings;
use pulse_report::ReportClient;

#[cfg(feature = "tui")]
pub fn execute(config_path: String, base_url: Option<String>, snapshot: String) -> Result<()> {
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    let config = settings::load_config(&config_path, base_url.as_deref())?;
    let client = ReportClient::from_config(config)?;

    // the draw loop blocks this thread; requests run on the runtime's workers
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    pulse_report::renderers::tui::run_dashboard(client, rt.handle().clone(), PathBuf::from(snapshot))?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
pub fn execute(config_path: String, base_url: Option<String>, _snapshot: String) -> Result<()> {
    // still surface configuration problems before the feature error
    let config = settings::load_config(&config_path, base_url.as_deref())?;
    ReportClient::from_config(config)?;
    Err(CliError::Other(
        "Terminal dashboard not compiled. Rebuild with the `tui` feature or use `pulse report`."
            .to_string(),
    ))
}
