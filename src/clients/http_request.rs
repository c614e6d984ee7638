//! HTTP request types for the Tiendanube API SDK.
//!
//! This module provides two layers:
//!
//! - [`RequestOptions`]: the options of a single resource call (verb, resource
//!   id, sub-resource name and id, query extras, body). This is what resource
//!   accessors hand to [`HttpClient::make_request`].
//! - [`HttpRequest`]: the validated, path-resolved request the client sends.
//!
//! [`HttpClient::make_request`]: crate::clients::HttpClient::make_request

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Tiendanube API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    #[default]
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for the verbs that carry a JSON body.
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Options for a single resource call.
///
/// Every call addresses one `(resource, id?, subresource?, subresource_id?)`
/// tuple. Query extras are sent as query parameters; `data` is sent as a JSON
/// body and is only valid for POST and PUT.
///
/// # Example
///
/// ```rust
/// use tiendanube_api::clients::{HttpMethod, RequestOptions};
/// use serde_json::json;
///
/// let options = RequestOptions::new(HttpMethod::Put)
///     .resource_id("123")
///     .subresource("variants")
///     .subresource_id("456")
///     .data(json!({"id": 456, "price": "10.00"}));
///
/// assert_eq!(options.path("products"), "products/123/variants/456");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    /// The HTTP verb.
    pub verb: HttpMethod,
    /// Id of the addressed resource instance.
    pub resource_id: Option<String>,
    /// Name of the nested collection.
    pub subresource: Option<String>,
    /// Id of the addressed sub-resource instance.
    pub subresource_id: Option<String>,
    /// Extra query parameters.
    pub extra: HashMap<String, String>,
    /// JSON body for write verbs.
    pub data: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Creates options for the given verb with nothing else set.
    #[must_use]
    pub fn new(verb: HttpMethod) -> Self {
        Self {
            verb,
            ..Self::default()
        }
    }

    /// Shorthand for `RequestOptions::new(HttpMethod::Get)`.
    #[must_use]
    pub fn get() -> Self {
        Self::new(HttpMethod::Get)
    }

    /// Sets the resource id.
    #[must_use]
    pub fn resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    /// Sets the sub-resource name.
    #[must_use]
    pub fn subresource(mut self, name: impl Into<String>) -> Self {
        self.subresource = Some(name.into());
        self
    }

    /// Sets the sub-resource id.
    #[must_use]
    pub fn subresource_id(mut self, id: impl Into<String>) -> Self {
        self.subresource_id = Some(id.into());
        self
    }

    /// Replaces the query extras.
    #[must_use]
    pub fn extra(mut self, extra: HashMap<String, String>) -> Self {
        self.extra = extra;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn data(mut self, data: impl Into<serde_json::Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Builds the request path for `resource`, relative to the store root.
    ///
    /// Ids are percent-encoded so that they always occupy a single segment.
    #[must_use]
    pub fn path(&self, resource: &str) -> String {
        let mut path = resource.trim_matches('/').to_string();

        if let Some(id) = &self.resource_id {
            path.push('/');
            path.push_str(&urlencoding::encode(id));
        }
        if let Some(subresource) = &self.subresource {
            path.push('/');
            path.push_str(subresource.trim_matches('/'));
            if let Some(id) = &self.subresource_id {
                path.push('/');
                path.push_str(&urlencoding::encode(id));
            }
        }

        path
    }

    /// Validates the addressing tuple and resolves these options into an
    /// [`HttpRequest`] for `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if a sub-resource lacks its parent
    /// id, a sub-resource id lacks its sub-resource, or the resulting request
    /// fails [`HttpRequest::verify`].
    pub fn into_request(self, resource: &str) -> Result<HttpRequest, InvalidHttpRequestError> {
        if self.subresource_id.is_some() && self.subresource.is_none() {
            return Err(InvalidHttpRequestError::OrphanSubresourceId);
        }
        if let Some(subresource) = &self.subresource {
            if self.resource_id.is_none() {
                return Err(InvalidHttpRequestError::MissingResourceId {
                    subresource: subresource.clone(),
                });
            }
        }

        let path = self.path(resource);
        let request = HttpRequest {
            http_method: self.verb,
            path,
            body: self.data,
            query: self.extra,
        };
        request.verify()?;
        Ok(request)
    }
}

/// A resolved HTTP request, relative to the store root
/// (`{host}/{version}/{store_id}/`).
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the store root.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: HashMap<String, String>,
}

impl HttpRequest {
    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - `http_method` is `Get` or `Delete` but `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        match (self.http_method.is_write(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
