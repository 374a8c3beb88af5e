use crate::types::ReportKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Text shown in place of a report whenever fetching or shaping it fails
pub const GENERIC_FAILURE_MESSAGE: &str = "Error fetching data";

/// Error types for report requests, shaping and configuration
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("HTTP error! status: {status} ({kind} report)")]
    HttpStatus { kind: ReportKind, status: u16 },

    #[error("Failed to decode {kind} response: {source}")]
    Decode {
        kind: ReportKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected {kind} response shape: expected {expected}")]
    UnexpectedShape {
        kind: ReportKind,
        expected: &'static str,
    },

    #[error("General error: {message}")]
    General { message: String },
}

impl ReportError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new unexpected shape error
    pub fn unexpected_shape(kind: ReportKind, expected: &'static str) -> Self {
        Self::UnexpectedShape { kind, expected }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_names_status() {
        let err = ReportError::HttpStatus {
            kind: ReportKind::Metrics,
            status: 503,
        };
        assert!(err.to_string().contains("status: 503"));
    }

    #[test]
    fn test_constructors() {
        let err = ReportError::invalid_config("bad base url");
        assert!(err.to_string().contains("Invalid configuration"));

        let err = ReportError::unexpected_shape(ReportKind::Holidays, "a JSON array");
        assert_eq!(
            err.to_string(),
            "Unexpected holidays response shape: expected a JSON array"
        );
    }
}
