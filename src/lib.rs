//! # Tiendanube API Rust SDK
//!
//! A Rust SDK for the Tiendanube (Nuvemshop) REST API. It maps CRUD-style
//! calls onto store-scoped HTTP requests and decodes the JSON responses into
//! generic objects or typed models.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`TiendanubeConfig`] and [`TiendanubeConfigBuilder`]
//! - Validated newtypes for the access token, store id and API host
//! - An async HTTP client that targets `{host}/{version}/{store_id}/...`
//! - Collection accessors with `get`, `list`, `add`, `update` and `delete`
//! - Nested collection accessors (product variants, product images)
//! - [`ApiObject`], an ordered key-value view over any JSON object
//! - Typed models for products, categories, customers, orders and webhooks
//!
//! ## Quick Start
//!
//! ```rust
//! use tiendanube_api::{TiendanubeConfig, AccessToken, ApiVersion};
//!
//! let config = TiendanubeConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .api_version(ApiVersion::V1)
//!     .user_agent_prefix("MyApp (dev@example.com)")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use serde_json::json;
//! use tiendanube_api::{TiendanubeClient, ResourceError};
//! use tiendanube_api::rest::Filters;
//!
//! let client = TiendanubeClient::new(&config)?;
//! let store = client.store(123_456_u64);
//!
//! // Typed collection
//! let product = store.products().get(42).await?;
//! println!("{:?}", product.name.get("es"));
//!
//! // Generic collection
//! let customers = store.resource("customers");
//! let since = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let recent = customers
//!     .list(&Filters::new().with("created_at_min", since), None)
//!     .await?;
//!
//! let created = customers.add(&json!({"name": "Acme"})).await?;
//! println!("{}", created["name"]);
//!
//! // Errors carry the status code
//! match store.orders().get(1).await {
//!     Err(ResourceError::Api(e)) if e.status_code == 404 => println!("{}", e.message),
//!     other => println!("{:?}", other.map(|order| order.number)),
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`](https://docs.rs/tracing) events: `debug` for each
//! request and each rejected response, `warn` when the rate limit reported by
//! the API is exhausted. Install a subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One call, one request**: No retries, throttling or pagination loops

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
mod store;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiVersion, HostUrl, StoreId, TiendanubeConfig, TiendanubeConfigBuilder,
};
pub use error::ConfigError;
pub use store::{Store, TiendanubeClient};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, InvalidHttpRequestError,
    RateLimit, RequestOptions,
};

// Re-export REST accessor types
pub use rest::{
    ApiError, ApiObject, Filters, ListResource, ListSubResource, Resource, ResourceError,
};
