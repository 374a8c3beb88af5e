use crate::config::types::{BackendConfig, PulseConfig, RenderConfig};
use crate::error::Result;

/// Builder for PulseConfig to improve API ergonomics
#[derive(Default)]
pub struct PulseConfigBuilder {
    backend: BackendConfig,
    render: RenderConfig,
}

impl PulseConfigBuilder {
    /// Create a new config builder starting from defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend origin
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.backend.base_url = base_url.into();
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.backend.timeout_seconds = Some(seconds);
        self
    }

    /// Add a header sent with every report request
    #[must_use]
    pub fn header<S: Into<String>>(mut self, key: S, value: S) -> Self {
        self.backend.headers.insert(key.into(), value.into());
        self
    }

    /// Escape backend text before shaping it into HTML
    #[must_use]
    pub fn escape_html(mut self, escape: bool) -> Self {
        self.render.escape_html = escape;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// Returns an error if the base URL is not an http(s) URL or the timeout is zero
    pub fn build(self) -> Result<PulseConfig> {
        let config = PulseConfig {
            backend: self.backend,
            render: self.render,
        };

        use crate::config::validator::ConfigValidatorImpl;
        use crate::traits::ConfigValidator;
        ConfigValidatorImpl::new().validate(&config)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = PulseConfig::builder()
            .base_url("http://localhost:8123")
            .timeout(5)
            .header("X-Team", "identity")
            .escape_html(true)
            .build()
            .unwrap();

        assert_eq!(config.backend.base_url, "http://localhost:8123");
        assert_eq!(config.backend.timeout_seconds, Some(5));
        assert_eq!(config.backend.headers.len(), 1);
        assert!(config.render.escape_html);
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        assert!(PulseConfig::builder().timeout(0).build().is_err());
    }
}
