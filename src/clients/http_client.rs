//! HTTP client for Tiendanube API communication.
//!
//! This module provides the [`HttpClient`] type, the single transport that
//! every resource accessor sends its requests through.

use std::collections::HashMap;

use hyper::ext::ReasonPhrase;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestOptions};
use crate::clients::http_response::HttpResponse;
use crate::config::{StoreId, TiendanubeConfig, DEFAULT_API_HOST};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Tiendanube API.
///
/// The client handles:
/// - Base URI construction from the configured host and API version
/// - Default headers including User-Agent and the `Authentication` token
/// - Path, query and body assembly from [`RequestOptions`]
///
/// It does not interpret status codes: every response is returned as an
/// [`HttpResponse`]. Only validation and transport failures are errors.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Share one instance (typically behind an
/// `Arc`) between all accessors so connections are reused.
///
/// # Example
///
/// ```rust,ignore
/// use tiendanube_api::{TiendanubeConfig, AccessToken, StoreId};
/// use tiendanube_api::clients::{HttpClient, RequestOptions};
///
/// let config = TiendanubeConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config)?;
///
/// let response = client
///     .make_request(&StoreId::from(123_u64), "products", RequestOptions::get())
///     .await?;
/// println!("{} {}", response.status_code, response.text);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI including the API version (e.g., `https://api.tiendanube.com/v1`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &TiendanubeConfig) -> Result<Self, HttpError> {
        let host = config
            .api_host()
            .map_or(DEFAULT_API_HOST, |host| host.base_uri());
        let base_uri = format!("{host}/{}", config.api_version());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Tiendanube API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authentication".to_string(),
            format!("bearer {}", config.access_token().as_ref()),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client, including the API version.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for a request path under a store.
    #[must_use]
    pub fn url_for(&self, store_id: &StoreId, path: &str) -> String {
        format!("{}/{}/{}", self.base_uri, store_id, path)
    }

    /// Issues one request for `resource` under `store_id`.
    ///
    /// The options are validated and resolved into a path of the form
    /// `{resource}[/{id}[/{subresource}[/{subresource_id}]]]`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the options fail validation
    /// and [`HttpError::Network`] if the request cannot be sent or its body
    /// cannot be read. Non-success status codes are not errors here.
    pub async fn make_request(
        &self,
        store_id: &StoreId,
        resource: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        let request = options.into_request(resource)?;
        self.send(store_id, request).await
    }

    /// Sends an already resolved request.
    ///
    /// # Errors
    ///
    /// Same as [`make_request`](Self::make_request).
    pub async fn send(
        &self,
        store_id: &StoreId,
        request: HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(store_id, &request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(
            "Sending {} request to Tiendanube API at {}",
            request.http_method,
            url
        );

        let res = req_builder.send().await?;

        let status = res.status();
        let reason = Self::reason_phrase(status, res.extensions());
        let headers = Self::parse_response_headers(res.headers());
        let text = res.text().await?;

        let response = HttpResponse::new(status.as_u16(), reason, headers, text);

        if response.rate_limit.is_some_and(|limit| limit.is_exhausted()) {
            tracing::warn!(
                "Tiendanube API rate limit exhausted after request to {}",
                request.path
            );
        }

        Ok(response)
    }

    /// Returns the reason phrase sent by the server, or the canonical phrase
    /// of `status` when the server sent the standard one.
    fn reason_phrase(
        status: reqwest::StatusCode,
        extensions: &hyper::http::Extensions,
    ) -> String {
        extensions.get::<ReasonPhrase>().map_or_else(
            || status.canonical_reason().unwrap_or_default().to_string(),
            |reason| String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        )
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
