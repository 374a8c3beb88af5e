use crate::config::PulseConfig;
use crate::error::Result;
use crate::formatter::shell;
use crate::http::{RequestBuilderImpl, ResponseConverterImpl};
use crate::traits::ReportTransport;
use crate::types::TransportResponse;
use reqwest::Client;
use std::time::Duration;

/// reqwest-backed transport for the report endpoints
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl HttpTransport {
    /// Create a new HTTP transport with configuration
    pub fn new(config: PulseConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.backend.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        let request_builder = RequestBuilderImpl::new(client.clone(), config);
        let response_converter = ResponseConverterImpl::new();

        Ok(Self {
            client,
            request_builder,
            response_converter,
        })
    }
}

impl ReportTransport for HttpTransport {
    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<TransportResponse> {
        let request = self.request_builder.build_request(path, body)?;

        tracing::debug!(url = %request.url(), "sending report request");
        let response = self.client.execute(request).await?;
        tracing::debug!(url = %response.url(), status = response.status().as_u16(), "report response received");

        self.response_converter
            .convert_response(response)
            .await
    }

    fn curl_command(&self, path: &str, body: &serde_json::Value) -> Result<String> {
        let url = self.request_builder.config().endpoint_url(path)?;
        Ok(shell::format_curl_command(
            "POST",
            url.as_str(),
            &self.request_builder.headers(),
            Some(&body.to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_post_json_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/holidays"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"fromDate": "2024-12-01", "toDate": "2024-12-31"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["December 25 | Christmas (US)"])))
            .expect(1)
            .mount(&server)
            .await;

        let config = PulseConfig::default().with_base_url(server.uri());
        let transport = HttpTransport::new(config).unwrap();

        let response = transport
            .post_json("/holidays", &json!({"fromDate": "2024-12-01", "toDate": "2024-12-31"}))
            .await
            .unwrap();

        assert!(response.is_success());
        assert!(response.body.contains("Christmas"));
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/risk"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(PulseConfig::default().with_base_url(server.uri())).unwrap();
        let response = transport.post_json("/risk", &json!({})).await.unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
    }

    #[test]
    fn test_curl_command_includes_configured_headers() {
        let config = PulseConfig::builder()
            .header("X-Team", "identity")
            .build()
            .unwrap();
        let transport = HttpTransport::new(config).unwrap();

        let cmd = transport
            .curl_command("/metrics", &json!({"selected_stream": "AIC"}))
            .unwrap();

        assert!(cmd.contains("'http://127.0.0.1:8000/metrics'"));
        assert!(cmd.contains("-H 'content-type: application/json'"));
        assert!(cmd.contains("-H 'X-Team: identity'"));
        assert!(cmd.contains(r#"-d '{"selected_stream":"AIC"}'"#));
    }
}
