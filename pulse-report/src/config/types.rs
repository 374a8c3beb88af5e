use crate::error::Result;
use crate::formatter::FormatterConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Origin the dashboard backend listens on unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pulse.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PulseConfig {
    /// Backend connection settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// HTML rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Backend origin, timeout and extra headers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Origin the report paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; unset means the transport never times out
    pub timeout_seconds: Option<u64>,
    /// Extra headers sent with every report request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// Rendering options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Escape backend-supplied text instead of trusting it as markup
    #[serde(default)]
    pub escape_html: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            headers: BTreeMap::new(),
        }
    }
}

impl PulseConfig {
    /// Full URL of a report endpoint, keeping any path prefix on the base
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        let base = self.backend.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// Formatter options derived from the render section
    pub fn formatter_config(&self) -> FormatterConfig {
        FormatterConfig {
            escape_html: self.render.escape_html,
        }
    }

    /// Replace the base URL, typically from a command-line override
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.backend.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PulseConfig::default();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert!(config.backend.timeout_seconds.is_none());
        assert!(!config.render.escape_html);
    }

    #[test]
    fn test_endpoint_url_keeps_prefix() {
        let config = PulseConfig::default().with_base_url("https://reports.internal/pulse/");
        assert_eq!(
            config.endpoint_url("/metrics").unwrap().as_str(),
            "https://reports.internal/pulse/metrics"
        );

        let config = PulseConfig::default();
        assert_eq!(
            config.endpoint_url("/holidays").unwrap().as_str(),
            "http://127.0.0.1:8000/holidays"
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: PulseConfig = toml::from_str("[render]\nescape_html = true\n").unwrap();
        assert_eq!(config.backend, BackendConfig::default());
        assert!(config.formatter_config().escape_html);
    }
}
