//! Pulse Report - report client and dashboard controller for Ping Pulse
//!
//! This crate requests team reports (updates, metrics, holidays, risk) from the
//! report backend, shapes the JSON answers into HTML fragments and drives the
//! dashboard state that displays them.

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Report pipeline
pub mod client;
pub mod formatter;
pub mod http;

// Dashboard
pub mod dashboard;
pub mod renderers;

pub mod testing;

// Re-export main types for convenience
pub use client::ReportClient;
pub use config::{PulseConfig, PulseConfigBuilder};
pub use dashboard::{update, DashboardSession, DashboardState, Display, Effect, Msg, Settlement};
pub use error::{ReportError, Result, GENERIC_FAILURE_MESSAGE};
pub use formatter::{FormatterConfig, ReportFormatter};
pub use http::HttpTransport;
pub use renderers::{DashboardRenderer, PageRenderer};
pub use traits::ReportTransport;
pub use types::{Query, ReportKind, Stream};

/// Request one report over HTTP and return its HTML fragment
pub async fn generate_report(config: PulseConfig, kind: ReportKind, query: &Query) -> Result<String> {
    let client = ReportClient::from_config(config)?;
    client.generate(kind, query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_report_against_backend() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/risk"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Feature X slipped"])))
            .mount(&server)
            .await;

        let config = PulseConfig::builder().base_url(server.uri()).build().unwrap();
        let html = generate_report(config, ReportKind::Risk, &Query::default())
            .await
            .unwrap();

        assert_eq!(
            html,
            "<ul style=\"list-style: none; padding: 0;\"><li style=\"margin-bottom: 10px;\">Feature X slipped</li></ul>"
        );
    }

    #[test]
    fn test_module_imports() {
        let state = DashboardState::new();
        let page = PageRenderer::without_styles().render(&state);
        assert!(!page.contains(GENERIC_FAILURE_MESSAGE));
        assert_eq!(ReportKind::ALL.len(), 4);
        assert_eq!(Stream::ALL.len(), 8);
    }
}
