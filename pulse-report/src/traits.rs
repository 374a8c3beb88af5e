use crate::error::Result;
use crate::types::TransportResponse;
use std::future::Future;

/// Trait for the HTTP layer underneath the report client
pub trait ReportTransport: Send + Sync + Clone + 'static {
    /// POST a JSON body to a path on the backend origin
    fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;

    /// Equivalent curl command for a request, for diagnostics
    fn curl_command(&self, path: &str, body: &serde_json::Value) -> Result<String>;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
