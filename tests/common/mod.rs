//! Shared helpers for the integration tests

#![allow(dead_code)]

use btse_rust_sdk::{Agent, Config};
use wiremock::{MockServer, Request};

pub const TEST_KEY: &str = "test_key";
pub const TEST_SECRET: &str = "test_secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Authenticated spot configuration pointed at the mock server
pub fn test_config(server: &MockServer) -> Config {
    Config::new(TEST_KEY, TEST_SECRET)
        .unwrap()
        .with_base_url(&server.uri())
        .unwrap()
}

/// Authenticated agent pointed at the mock server
pub fn test_agent(server: &MockServer) -> Agent {
    Agent::new(test_config(server)).unwrap()
}

/// The single request the server received
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

/// Value of a header as a string
pub fn header_str<'a>(request: &'a Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("missing header {}", name))
        .to_str()
        .unwrap()
}
