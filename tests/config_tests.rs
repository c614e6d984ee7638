//! Integration tests for configuration and client sharing.

mod common;

use std::time::Duration;

use serde_json::json;
use tiendanube_api::{
    AccessToken, ApiVersion, ConfigError, HostUrl, StoreId, TiendanubeClient, TiendanubeConfig,
};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::config_for;

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_version_strings_parse() {
    assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
    assert_eq!(
        "2025-03".parse::<ApiVersion>().unwrap(),
        ApiVersion::V2025_03
    );

    let future: ApiVersion = "2026-01".parse().unwrap();
    assert!(!future.is_known());
    assert_eq!(future.to_string(), "2026-01");

    assert!(matches!(
        "2025-13".parse::<ApiVersion>(),
        Err(ConfigError::InvalidApiVersion { .. })
    ));
}

#[test]
fn test_invalid_values_fail_fast() {
    assert!(matches!(
        AccessToken::new(""),
        Err(ConfigError::EmptyAccessToken)
    ));
    assert!(matches!(
        StoreId::new("12/34"),
        Err(ConfigError::InvalidStoreId { .. })
    ));
    assert!(matches!(
        HostUrl::new("api.tiendanube.com"),
        Err(ConfigError::InvalidHostUrl { .. })
    ));
}

#[test]
fn test_client_builds_with_timeout() {
    let config = TiendanubeConfig::builder()
        .access_token(AccessToken::new("token").unwrap())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let client = TiendanubeClient::new(&config).unwrap();
    assert_eq!(
        client.http_client().base_uri(),
        "https://api.tiendanube.com/v1"
    );
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn test_stores_are_usable_from_concurrent_tasks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/v1/\d+/customers/1$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(3)
        .mount(&server)
        .await;

    let client = TiendanubeClient::new(&config_for(&server)).unwrap();

    let handles: Vec<_> = (1..=3_u64)
        .map(|store_id| {
            let store = client.store(store_id);
            tokio::spawn(async move { store.resource("customers").get(1).await })
        })
        .collect();

    for handle in handles {
        let customer = handle.await.unwrap().unwrap();
        assert_eq!(customer.get_u64("id"), Some(1));
    }
}
