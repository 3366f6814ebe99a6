//! Common test utilities for OctoPrint tests.

use std::io::Write;
use std::sync::{Arc, Mutex};

use octoapi::OctoClient;
use serde_json::Value;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key every test client sends.
pub const API_KEY: &str = "test-api-key";

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server.
#[allow(dead_code)] // Not all test files use this
pub fn client_for(server: &MockServer) -> OctoClient {
    OctoClient::builder()
        .url(server.uri())
        .api_key(API_KEY)
        .build()
}

/// Mount a GET mock for `api_path` (relative to `/api/`).
pub async fn mock_get(server: &MockServer, api_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{}", api_path)))
        .and(header("X-Api-Key", API_KEY))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a POST mock that only matches the exact JSON `body`.
#[allow(dead_code)]
pub async fn mock_post(server: &MockServer, api_path: &str, body: Value, status: u16) {
    Mock::given(method("POST"))
        .and(path(format!("/api/{}", api_path)))
        .and(header("X-Api-Key", API_KEY))
        .and(body_json(body))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

/// A successful JSON response.
pub fn json_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Captured log output.
#[derive(Clone, Default)]
#[allow(dead_code)] // Not all test files capture logs
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Record WARN-and-above events on the current thread until the guard drops.
#[allow(dead_code)]
pub fn capture_warnings() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
