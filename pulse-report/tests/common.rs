//! Shared helpers for pulse-report integration tests

#![allow(dead_code)]

use pulse_report::{DashboardSession, HttpTransport, PulseConfig, ReportClient};
use serde_json::Value;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mount a JSON answer for one report endpoint
pub async fn mount_json(server: &MockServer, endpoint: &str, body: Value) {
    mount_response(server, endpoint, ResponseTemplate::new(200).set_body_json(body)).await;
}

/// Mount a JSON answer that is held back for `delay`
pub async fn mount_delayed(server: &MockServer, endpoint: &str, body: Value, delay: Duration) {
    mount_response(
        server,
        endpoint,
        ResponseTemplate::new(200).set_body_json(body).set_delay(delay),
    )
    .await;
}

/// Mount a non-success status for one report endpoint
pub async fn mount_status(server: &MockServer, endpoint: &str, status: u16) {
    mount_response(
        server,
        endpoint,
        ResponseTemplate::new(status).set_body_string("backend exploded"),
    )
    .await;
}

pub async fn mount_response(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn config_for(server: &MockServer) -> PulseConfig {
    PulseConfig::builder()
        .base_url(server.uri())
        .build()
        .expect("mock server uri is a valid base url")
}

pub fn client_for(server: &MockServer) -> ReportClient<HttpTransport> {
    ReportClient::from_config(config_for(server)).expect("failed to build client")
}

pub fn session_for(server: &MockServer) -> DashboardSession<HttpTransport> {
    DashboardSession::current(client_for(server)).expect("tests run inside a tokio runtime")
}
