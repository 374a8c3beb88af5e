use crate::config::PulseConfig;
use crate::error::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Request};

/// Builds report POST requests against the configured origin
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    config: PulseConfig,
}

impl RequestBuilderImpl {
    /// Create a new request builder
    pub fn new(client: Client, config: PulseConfig) -> Self {
        Self { client, config }
    }

    /// Headers every report request carries, in the order they are sent
    pub fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(CONTENT_TYPE.to_string(), "application/json".to_string())];
        headers.extend(
            self.config
                .backend
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        headers
    }

    /// Build a POST with a JSON body for the given endpoint path
    pub fn build_request(&self, path: &str, body: &serde_json::Value) -> Result<Request> {
        let url = self.config.endpoint_url(path)?;

        let mut request_builder = self.client.post(url).json(body);
        for (key, value) in &self.config.backend.headers {
            request_builder = request_builder.header(key, value);
        }

        request_builder.build().map_err(Into::into)
    }

    pub fn config(&self) -> &PulseConfig {
        &self.config
    }
}
