/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ftx-adapter tests

use ftx_adapter::{ClientConfig, FtxClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_API_SECRET: &str = "test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client with test credentials pointed at the mock server
pub fn authed_client(server: &MockServer) -> FtxClient {
    FtxClient::new(ClientConfig {
        api_key: TEST_API_KEY.to_string(),
        api_secret: TEST_API_SECRET.to_string(),
        endpoint: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
}

/// Client without credentials for public endpoints
#[allow(dead_code)]
pub fn public_client(server: &MockServer) -> FtxClient {
    FtxClient::new(ClientConfig {
        endpoint: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
}
