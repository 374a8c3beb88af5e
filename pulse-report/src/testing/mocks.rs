use crate::error::{ReportError, Result};
use crate::formatter::shell;
use crate::traits::ReportTransport;
use crate::types::{ReportKind, TransportResponse};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock transport for testing
#[derive(Clone, Default)]
pub struct MockTransport {
    pub responses: HashMap<String, TransportResponse>,
    pub delays: HashMap<String, Duration>,
    pub failure_message: Option<String>,
    requests: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `kind` with a 200 and the given JSON body
    pub fn with_json(self, kind: ReportKind, body: serde_json::Value) -> Self {
        self.with_status(kind, 200, &body.to_string())
    }

    /// Answer `kind` with an arbitrary status and raw body
    pub fn with_status(mut self, kind: ReportKind, status: u16, body: &str) -> Self {
        self.responses
            .insert(kind.path().to_string(), TransportResponse::new(status, body));
        self
    }

    /// Hold the answer for `kind` back for `delay`
    pub fn with_delay(mut self, kind: ReportKind, delay: Duration) -> Self {
        self.delays.insert(kind.path().to_string(), delay);
        self
    }

    /// Fail every request as if the network were unreachable
    pub fn with_failure<S: Into<String>>(mut self, message: S) -> Self {
        self.failure_message = Some(message.into());
        self
    }

    /// Every (path, body) pair received so far, in arrival order
    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl ReportTransport for MockTransport {
    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<TransportResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((path.to_string(), body.clone()));
        }

        if let Some(delay) = self.delays.get(path) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(message) = &self.failure_message {
            return Err(ReportError::general(message.clone()));
        }

        self.responses.get(path).cloned().ok_or_else(|| {
            ReportError::general(format!("Mock response not found for path: {}", path))
        })
    }

    fn curl_command(&self, path: &str, body: &serde_json::Value) -> Result<String> {
        Ok(shell::format_curl_command(
            "POST",
            &format!("mock://backend{}", path),
            &[],
            Some(&body.to_string()),
        ))
    }
}
