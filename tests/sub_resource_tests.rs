//! Integration tests for nested collection accessors.
//!
//! These tests verify that `get`, `list`, `add` and `update` address
//! `{resource}/{resource_id}/{subresource}[/{id}]`.

mod common;

use serde_json::json;
use tiendanube_api::rest::resources::{ProductImage, ProductVariant};
use tiendanube_api::rest::Filters;
use tiendanube_api::ResourceError;
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{setup, store_path};

#[tokio::test]
async fn test_get_addresses_nested_instance() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path(store_path("products/10/variants/20")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 20,
            "product_id": 10,
            "price": "99.90",
            "stock": 3,
            "values": [{"es": "Rojo"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let variant: ProductVariant = store.product_variants().get(10, 20).await.unwrap();

    assert_eq!(variant.id, Some(20));
    assert_eq!(variant.product_id, Some(10));
    assert_eq!(variant.stock, Some(3));
}

#[tokio::test]
async fn test_list_addresses_nested_collection_with_query() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path(store_path("products/10/images")))
        .and(query_param("fields", "id,src"))
        .and(query_param("since_id", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 101, "src": "https://cdn.example.com/a.jpg", "position": 1},
            {"id": 102, "src": "https://cdn.example.com/b.jpg", "position": 2}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let images: Vec<ProductImage> = store
        .product_images()
        .list(10, &Filters::new().with("since_id", 100), Some(&["id", "src"]))
        .await
        .unwrap();

    assert_eq!(images.len(), 2);
    assert_eq!(images[1].position, Some(2));
}

#[tokio::test]
async fn test_add_posts_to_nested_collection() {
    let (server, store) = setup().await;

    Mock::given(method("POST"))
        .and(path(store_path("products/10/images")))
        .and(body_json(json!({"src": "https://cdn.example.com/c.jpg"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 103,
            "product_id": 10,
            "src": "https://cdn.example.com/c.jpg"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = ProductImage {
        src: Some("https://cdn.example.com/c.jpg".to_string()),
        ..Default::default()
    };
    let created = store.product_images().add(10, &image).await.unwrap();

    assert_eq!(created.id, Some(103));
}

#[tokio::test]
async fn test_update_puts_to_nested_instance_from_payload_id() {
    let (server, store) = setup().await;

    Mock::given(method("PUT"))
        .and(path(store_path("products/10/variants/20")))
        .and(body_json(json!({"id": 20, "price": "12.50"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 20,
            "product_id": 10,
            "price": "12.50"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let variants = store.products().sub_resource::<tiendanube_api::ApiObject>("variants");
    let updated = variants
        .update(10, &json!({"id": 20, "price": "12.50"}))
        .await
        .unwrap();

    assert_eq!(updated["price"], "12.50");
}

#[tokio::test]
async fn test_update_without_id_sends_nothing() {
    let (server, store) = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = store
        .product_variants()
        .update(10, &ProductVariant::default())
        .await;

    assert!(matches!(
        result,
        Err(ResourceError::MissingField { ref resource, field: "id" }) if resource == "variants"
    ));
}

#[tokio::test]
async fn test_nested_error_status_is_reported() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path(store_path("products/10/variants/404")))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"code":404}"#))
        .mount(&server)
        .await;

    let error = store.product_variants().get(10, 404).await.unwrap_err();
    assert_eq!(error.status_code(), Some(404));
}
