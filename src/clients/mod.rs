//! HTTP client types for Tiendanube API communication.
//!
//! This module provides the transport layer that every resource accessor
//! goes through. It builds store-scoped URLs, attaches the authentication
//! and identification headers, and returns raw responses.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`RequestOptions`]: The options of a single resource call
//! - [`HttpRequest`]: A validated, path-resolved request
//! - [`HttpResponse`]: A raw response with parsed rate limit metadata
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use tiendanube_api::{TiendanubeConfig, AccessToken, StoreId};
//! use tiendanube_api::clients::{HttpClient, RequestOptions};
//!
//! let config = TiendanubeConfig::builder()
//!     .access_token(AccessToken::new("access-token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config)?;
//!
//! let options = RequestOptions::get().resource_id("42");
//! let response = client.make_request(&StoreId::from(1234_u64), "products", options).await?;
//! ```
//!
//! # Status Codes
//!
//! The client never retries and never turns a status code into an error.
//! Resource accessors accept [`SUCCESS_STATUS_CODES`] and report anything
//! else as an API error.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, RequestOptions};
pub use http_response::{HttpResponse, RateLimit, SUCCESS_STATUS_CODES};
