//! Shared setup for integration tests.
//!
//! Every test runs against its own `wiremock` server; the SDK is pointed at
//! it through `api_host`.

#![allow(dead_code)]

use tiendanube_api::{AccessToken, HostUrl, Store, TiendanubeClient, TiendanubeConfig};
use wiremock::MockServer;

pub const STORE_ID: u64 = 1234;
pub const ACCESS_TOKEN: &str = "test-access-token";

/// Builds a configuration that targets the given mock server.
pub fn config_for(server: &MockServer) -> TiendanubeConfig {
    TiendanubeConfig::builder()
        .access_token(AccessToken::new(ACCESS_TOKEN).unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .user_agent_prefix("IntegrationTests (dev@example.com)")
        .build()
        .unwrap()
}

/// Starts a mock server and returns it with a store handle pointed at it.
pub async fn setup() -> (MockServer, Store) {
    let server = MockServer::start().await;
    let client = TiendanubeClient::new(&config_for(&server)).unwrap();
    let store = client.store(STORE_ID);
    (server, store)
}

/// Returns the request path for `rest` under the test store.
pub fn store_path(rest: &str) -> String {
    format!("/v1/{STORE_ID}/{rest}")
}
