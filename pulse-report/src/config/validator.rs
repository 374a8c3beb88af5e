use crate::config::types::PulseConfig;
use crate::error::{ReportError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;
use url::Url;

/// Configuration validator implementation
#[derive(Default)]
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = PulseConfig;

    /// Validate configuration (uses enhanced validation with default context)
    fn validate(&self, config: &PulseConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation with enhanced error context
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &PulseConfig,
        config_path: P,
    ) -> Result<()> {
        let config_path_str = config_path.as_ref().to_string_lossy();
        let base_url = &config.backend.base_url;

        let parsed = Url::parse(base_url).map_err(|e| {
            ReportError::invalid_config(format!(
                "Invalid base_url '{}' in {}: {}",
                base_url, config_path_str, e
            ))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ReportError::invalid_config(format!(
                "base_url '{}' in {} must use http or https",
                base_url, config_path_str
            )));
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ReportError::invalid_config(format!(
                "base_url '{}' in {} must not carry a query string or fragment",
                base_url, config_path_str
            )));
        }

        if config.backend.timeout_seconds == Some(0) {
            return Err(ReportError::invalid_config(format!(
                "timeout_seconds in {} must be greater than zero; remove it to disable the timeout",
                config_path_str
            )));
        }

        for name in config.backend.headers.keys() {
            if name.trim().is_empty() {
                return Err(ReportError::invalid_config(format!(
                    "Empty header name in [backend.headers] of {}",
                    config_path_str
                )));
            }
        }

        Ok(())
    }
}
