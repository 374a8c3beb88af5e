use crate::error::{Result, ResultExt};
use pulse_report::PulseConfig;
use pulse_report::config::ConfigValidatorImpl;
use pulse_report::traits::ConfigValidator;
use std::path::Path;

/// Load the configuration file (defaults when it is missing) and apply the
/// `--base-url` override
pub fn load_config(path: &str, base_url: Option<&str>) -> Result<PulseConfig> {
    let config = PulseConfig::load_or_default(Path::new(path))
        .with_context(|| format!("Failed to load configuration from {}", path))?;

    let config = match base_url {
        Some(url) => {
            let config = config.with_base_url(url);
            ConfigValidatorImpl::new()
                .validate(&config)
                .with_context(|| "Invalid --base-url")?;
            config
        }
        None => config,
    };

    tracing::debug!(path, base_url = %config.backend.base_url, "configuration loaded");
    Ok(config)
}
