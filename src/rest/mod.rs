//! REST resource accessors for the Tiendanube API.
//!
//! This module maps CRUD calls onto HTTP requests against named collections:
//!
//! - [`Resource`]: a store-scoped handle; issues one request and accepts
//!   only status 200 and 201
//! - [`ListResource`]: `get`, `list`, `add`, `update` and `delete` on a
//!   collection such as `customers`
//! - [`ListSubResource`]: `get`, `list`, `add` and `update` on a collection
//!   nested under one instance, such as `products/{id}/variants`
//! - [`ApiObject`]: the generic decoded object
//! - [`Filters`]: query filters for `list`
//! - [`ApiError`] and [`ResourceError`]: failure types
//! - [`resources`]: typed models for known resources
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use serde_json::json;
//! use tiendanube_api::rest::Filters;
//!
//! let customers = store.resource("customers");
//!
//! let since = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let recent = customers
//!     .list(&Filters::new().with("created_at_min", since), Some(&["id", "name"]))
//!     .await?;
//!
//! let created = customers.add(&json!({"name": "Acme"})).await?;
//! assert_eq!(created["name"], "Acme");
//! ```
//!
//! # Errors
//!
//! Any status other than 200 or 201 fails with [`ResourceError::Api`]. No
//! request is retried.

mod errors;
mod filters;
mod list;
mod object;
mod resource;
pub mod resources;
mod sub_resource;

pub use errors::{ApiError, ResourceError};
pub use filters::{FilterValue, Filters};
pub use list::ListResource;
pub use object::ApiObject;
pub use resource::Resource;
pub use sub_resource::ListSubResource;
