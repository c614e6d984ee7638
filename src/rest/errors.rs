//! Error types for REST resource operations.
//!
//! The API layer has a single failure rule: any status code outside
//! [`SUCCESS_STATUS_CODES`] is an [`ApiError`]. There is no distinction
//! between client and server errors and no mapping to semantic variants.
//! [`ResourceError`] is the error every accessor returns; it wraps
//! [`ApiError`] together with the failures that can happen around a request.
//!
//! # Example
//!
//! ```rust,ignore
//! use tiendanube_api::rest::ResourceError;
//!
//! match store.products().get(123).await {
//!     Ok(product) => println!("Found: {:?}", product["name"]),
//!     Err(ResourceError::Api(e)) if e.status_code == 404 => println!("No such product"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! [`SUCCESS_STATUS_CODES`]: crate::clients::SUCCESS_STATUS_CODES

use thiserror::Error;

use crate::clients::{HttpError, HttpResponse};

/// A response from the API whose status was not accepted as success.
///
/// The message is the reason phrase followed by the response body text.
///
/// # Example
///
/// ```rust
/// use tiendanube_api::rest::ApiError;
///
/// let error = ApiError::new("Not Found", r#"{"error":"not found"}"#, 404);
/// assert_eq!(error.message, r#"Not Found. {"error":"not found"}"#);
/// assert_eq!(error.status_code, 404);
/// assert_eq!(error.to_string(), error.message);
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// Reason phrase and body text, joined by `". "`.
    pub message: String,
    /// The HTTP status code of the response.
    pub status_code: u16,
}

impl ApiError {
    /// Creates an error from a reason phrase, body text and status code.
    #[must_use]
    pub fn new(reason: &str, text: &str, status_code: u16) -> Self {
        Self {
            message: format!("{reason}. {text}"),
            status_code,
        }
    }

    /// Creates an error from a raw response.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        Self::new(&response.reason, &response.text, response.status_code)
    }
}

/// Error type for resource accessor operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A payload lacked a field required to address the request.
    ///
    /// Raised by `update` and `delete` when the payload has no `id`. No
    /// request is sent.
    #[error("Cannot address {resource}: payload has no '{field}' field")]
    MissingField {
        /// The resource being addressed.
        resource: String,
        /// The missing field name.
        field: &'static str,
    },

    /// The request could not be sent.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A successful response body could not be decoded.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The resource that was requested.
        resource: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A request payload could not be serialized to JSON.
    #[error("Failed to serialize {resource} payload: {source}")]
    Serialize {
        /// The resource the payload was meant for.
        resource: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

impl ResourceError {
    /// Returns the HTTP status code when the API rejected the request.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status_code),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
    assert_send_sync::<ApiError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;
    use std::collections::HashMap;

    #[test]
    fn test_api_error_from_response_joins_reason_and_text() {
        let response = HttpResponse::new(
            404,
            "Not Found",
            HashMap::new(),
            r#"{"error":"not found"}"#,
        );
        let error = ApiError::from_response(&response);

        assert_eq!(error.status_code, 404);
        assert_eq!(error.message, r#"Not Found. {"error":"not found"}"#);
    }

    #[test]
    fn test_api_error_with_empty_reason_and_body() {
        let error = ApiError::new("", "", 599);
        assert_eq!(error.message, ". ");
        assert_eq!(error.status_code, 599);
    }

    #[test]
    fn test_resource_error_status_code() {
        let error: ResourceError = ApiError::new("Unprocessable Entity", "{}", 422).into();
        assert_eq!(error.status_code(), Some(422));
        assert!(error.to_string().starts_with("Unprocessable Entity. "));

        let error = ResourceError::MissingField {
            resource: "customers".to_string(),
            field: "id",
        };
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_missing_field_message_names_resource_and_field() {
        let error = ResourceError::MissingField {
            resource: "products".to_string(),
            field: "id",
        };
        let message = error.to_string();
        assert!(message.contains("products"));
        assert!(message.contains("'id'"));
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error: HttpError = InvalidHttpRequestError::EmptyPath.into();
        let error: ResourceError = http_error.into();
        assert!(matches!(error, ResourceError::Http(_)));
    }

    #[test]
    fn test_decode_error_names_resource() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = ResourceError::Decode {
            resource: "orders".to_string(),
            source,
        };
        assert!(error.to_string().contains("orders"));
    }
}
