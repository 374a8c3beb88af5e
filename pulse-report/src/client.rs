use crate::config::PulseConfig;
use crate::error::{ReportError, Result};
use crate::formatter::ReportFormatter;
use crate::http::HttpTransport;
use crate::traits::ReportTransport;
use crate::types::{Query, ReportKind};

/// One client for all four reports, parameterized by [`ReportKind`]
#[derive(Clone)]
pub struct ReportClient<T: ReportTransport> {
    transport: T,
    formatter: ReportFormatter,
}

impl ReportClient<HttpTransport> {
    /// Create a client talking to the configured backend over HTTP
    pub fn from_config(config: PulseConfig) -> Result<Self> {
        let formatter = ReportFormatter::with_config(config.formatter_config());
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(transport, formatter))
    }
}

impl<T: ReportTransport> ReportClient<T> {
    pub fn new(transport: T, formatter: ReportFormatter) -> Self {
        Self {
            transport,
            formatter,
        }
    }

    /// Request a report and shape the answer into an HTML fragment
    pub async fn generate(&self, kind: ReportKind, query: &Query) -> Result<String> {
        let body = serde_json::to_value(kind.request_body(query))
            .map_err(|e| ReportError::general(format!("Failed to encode request: {}", e)))?;

        let response = self.transport.post_json(kind.path(), &body).await?;
        if !response.is_success() {
            return Err(ReportError::HttpStatus {
                kind,
                status: response.status,
            });
        }

        let result: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|source| ReportError::Decode { kind, source })?;

        self.formatter.shape(kind, query, &result)
    }

    /// Curl equivalent of the request [`generate`](Self::generate) would send
    pub fn curl_command(&self, kind: ReportKind, query: &Query) -> Result<String> {
        let body = serde_json::to_value(kind.request_body(query))
            .map_err(|e| ReportError::general(format!("Failed to encode request: {}", e)))?;
        self.transport.curl_command(kind.path(), &body)
    }
}
