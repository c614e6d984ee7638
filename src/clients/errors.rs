//! HTTP-specific error types for the Tiendanube API SDK.
//!
//! This module contains error types for HTTP operations: request validation
//! failures and transport errors.
//!
//! Non-success status codes are not errors at this layer. [`HttpClient`]
//! returns every response it receives; deciding which statuses are acceptable
//! belongs to the resource accessors (see [`crate::rest::ApiError`]).
//!
//! [`HttpClient`]: crate::clients::HttpClient
//!
//! # Example
//!
//! ```rust,ignore
//! use tiendanube_api::clients::{HttpClient, HttpError, RequestOptions};
//!
//! match client.make_request(&store_id, "products", RequestOptions::get()).await {
//!     Ok(response) => println!("Status {}: {}", response.status_code, response.text),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use tiendanube_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request has no resource path.
    #[error("Cannot send a request without a resource path.")]
    EmptyPath,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send data with {method}; bodies are only sent for post and put.")]
    UnexpectedBody {
        /// The HTTP method that cannot carry a body.
        method: String,
    },

    /// A sub-resource was addressed without the id of its parent.
    #[error("Sub-resource '{subresource}' requires a parent resource id.")]
    MissingResourceId {
        /// The sub-resource name.
        subresource: String,
    },

    /// A sub-resource id was given without naming the sub-resource.
    #[error("A sub-resource id was given without a sub-resource name.")]
    OrphanSubresourceId,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use put without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_unexpected_body() {
        let error = InvalidHttpRequestError::UnexpectedBody {
            method: "delete".to_string(),
        };
        assert!(error.to_string().contains("delete"));
        assert!(error.to_string().contains("post and put"));
    }

    #[test]
    fn test_invalid_request_error_missing_resource_id() {
        let error = InvalidHttpRequestError::MissingResourceId {
            subresource: "variants".to_string(),
        };
        assert!(error.to_string().contains("variants"));
    }

    #[test]
    fn test_http_error_wraps_invalid_request_transparently() {
        let error: HttpError = InvalidHttpRequestError::EmptyPath.into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
        assert_eq!(
            error.to_string(),
            "Cannot send a request without a resource path."
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::OrphanSubresourceId;
        let _ = invalid_error;
    }
}
