//! HTTP response types for the Tiendanube API SDK.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! metadata parsed from Tiendanube's response headers.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// Status codes accepted as success by the resource accessors.
pub const SUCCESS_STATUS_CODES: [u16; 2] = [200, 201];

/// Rate limit information parsed from the `x-rate-limit-*` headers.
///
/// Tiendanube uses a leaky bucket: `limit` is the bucket size, `remaining`
/// the requests left, and `reset_ms` the milliseconds until the bucket is
/// empty again. The SDK only reports these values; it never throttles.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tiendanube_api::clients::RateLimit;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-limit".to_string(), vec!["40".to_string()]);
/// headers.insert("x-rate-limit-remaining".to_string(), vec!["39".to_string()]);
/// headers.insert("x-rate-limit-reset".to_string(), vec!["500".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 40);
/// assert_eq!(limit.remaining, 39);
/// assert_eq!(limit.reset_ms, Some(500));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// The bucket size.
    pub limit: u32,
    /// Requests left in the bucket.
    pub remaining: u32,
    /// Milliseconds until the bucket drains, if reported.
    pub reset_ms: Option<u64>,
}

impl RateLimit {
    /// Parses rate limit headers from lowercase header names.
    ///
    /// Returns `None` unless both the limit and remaining headers are present
    /// and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(|value| value.trim())
        };

        let limit = first("x-rate-limit-limit")?.parse().ok()?;
        let remaining = first("x-rate-limit-remaining")?.parse().ok()?;
        let reset_ms = first("x-rate-limit-reset").and_then(|v| v.parse().ok());

        Some(Self {
            limit,
            remaining,
            reset_ms,
        })
    }

    /// Returns `true` when no requests are left in the bucket.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// A raw HTTP response from the Tiendanube API.
///
/// The body is kept as text; decoding is left to the caller. Responses are
/// returned for every status code.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status_code: u16,
    /// The reason phrase for the status code (e.g., "Not Found").
    pub reason: String,
    /// Response headers keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The response body as text.
    pub text: String,
    /// Rate limit information, if the server reported it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit headers.
    ///
    /// Header names are expected in lowercase.
    #[must_use]
    pub fn new(
        status_code: u16,
        reason: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        text: impl Into<String>,
    ) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);
        Self {
            status_code,
            reason: reason.into(),
            headers,
            text: text.into(),
            rate_limit,
        }
    }

    /// Returns `true` if the status code is one of [`SUCCESS_STATUS_CODES`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        SUCCESS_STATUS_CODES.contains(&self.status_code)
    }

    /// Returns the raw body bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `x-total-count` header, reported on collection reads.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        self.header("x-total-count")
            .and_then(|value| value.trim().parse().ok())
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.text)
    }
}
