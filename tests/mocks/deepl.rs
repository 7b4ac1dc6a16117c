//! Mock DeepL API server for testing
//!
//! Provides wiremock-based mocks for `GET /v2/usage`.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::deepl::MockDeepLServer;
//!
//! #[tokio::test]
//! async fn test_with_deepl_mock() {
//!     let mock_server = MockDeepLServer::start().await;
//!     mock_server.mock_usage_success("test-key", 1000, 500000).await;
//!
//!     // Use mock_server.usage_url() as the DeepL endpoint
//! }
//! ```

#![allow(dead_code)]

use std::time::Duration;

use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Path of the usage endpoint on every DeepL host
pub const USAGE_PATH: &str = "/v2/usage";

/// Mock DeepL API server wrapper
pub struct MockDeepLServer {
    server: MockServer,
}

impl MockDeepLServer {
    /// Start a new mock DeepL server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Full URL of the mocked usage endpoint
    pub fn usage_url(&self) -> String {
        format!("{}{}", self.server.uri(), USAGE_PATH)
    }

    /// Get all received requests (for assertion in tests)
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Mock a successful usage response for the given key
    pub async fn mock_usage_success(&self, api_key: &str, count: i64, limit: i64) {
        Mock::given(method("GET"))
            .and(path(USAGE_PATH))
            .and(header("Authorization", format!("DeepL-Auth-Key {}", api_key).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "character_count": count,
                "character_limit": limit,
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an error status with a plain-text body
    pub async fn mock_usage_error(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(USAGE_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response with a raw body
    pub async fn mock_usage_body(&self, body: &str) {
        Mock::given(method("GET"))
            .and(path(USAGE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_string(body),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose body is not JSON
    pub async fn mock_usage_malformed(&self) {
        Mock::given(method("GET"))
            .and(path(USAGE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&self.server)
            .await;
    }

    /// Mock a response that arrives only after `delay`
    pub async fn mock_usage_slow(&self, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(USAGE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"character_count": 1, "character_limit": 2}))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }
}
