use crate::config::types::PulseConfig;
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{ReportError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PulseConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<PulseConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a pulse.toml file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PulseConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| ReportError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: PulseConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with enhanced error context and validation
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<PulseConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ReportError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(ReportError::Io)?;

        let config: PulseConfig = toml::from_str(&content).map_err(|e| {
            ReportError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;
        Ok(config)
    }
}

// Convenience functions maintaining the API
impl PulseConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::PulseConfigBuilder {
        crate::config::builder::PulseConfigBuilder::new()
    }

    /// Load configuration from a pulse.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration with enhanced error context
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Load and validate the file when present, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_with_validation(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }
}
