use crate::error::Result;
use crate::types::TransportResponse;
use reqwest::Response;

/// Converts reqwest responses into transport responses
#[derive(Clone, Default)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    /// Read status and body text
    pub async fn convert_response(&self, response: Response) -> Result<TransportResponse> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse::new(status, body))
    }
}
