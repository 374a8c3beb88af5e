use crate::error::{ReportError, Result};
use std::fs;
use std::path::Path;

/// Generate the default pulse.toml template with comments
pub fn generate_default_config_template() -> String {
    r#"# Ping Pulse configuration
# Settings for the report backend and HTML rendering

[backend]
# Origin serving /updates, /metrics, /holidays and /risk
base_url = "http://127.0.0.1:8000"
# Request timeout in seconds; leave unset to wait for the backend indefinitely
# timeout_seconds = 60

# Extra headers sent with every report request (optional)
[backend.headers]
# "X-Team" = "identity"

[render]
# Escape text returned by the backend instead of rendering it as markup
escape_html = false
"#
    .to_string()
}

/// Write the default configuration when missing (or always, with `force`)
///
/// Returns whether a file was written.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, force: bool) -> Result<bool> {
    let path = config_path.as_ref();

    if path.exists() && !force {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(ReportError::Io)?;
        }
    }

    fs::write(path, generate_default_config_template()).map_err(ReportError::Io)?;
    Ok(true)
}
