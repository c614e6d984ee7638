//! Base resource accessor.
//!
//! [`Resource`] binds the shared [`HttpClient`] to one store. Every accessor
//! routes its single request through [`Resource::make_request`], which is the
//! only place where a status code is judged.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpResponse, RequestOptions};
use crate::config::StoreId;
use crate::rest::{ApiError, ResourceError};

/// A store-scoped handle on the API.
///
/// Cloning is cheap: the HTTP client is shared.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use tiendanube_api::clients::{HttpClient, RequestOptions};
/// use tiendanube_api::rest::Resource;
/// use tiendanube_api::StoreId;
///
/// let client = Arc::new(HttpClient::new(&config)?);
/// let resource = Resource::new(client, StoreId::from(1234_u64));
///
/// let response = resource.make_request("store", RequestOptions::get()).await?;
/// println!("{}", response.text);
/// ```
#[derive(Clone, Debug)]
pub struct Resource {
    client: Arc<HttpClient>,
    store_id: StoreId,
}

// Verify Resource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource>();
};

impl Resource {
    /// Creates a resource handle for `store_id`.
    #[must_use]
    pub const fn new(client: Arc<HttpClient>, store_id: StoreId) -> Self {
        Self { client, store_id }
    }

    /// Returns the store this handle is scoped to.
    #[must_use]
    pub const fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    /// Returns the shared HTTP client.
    #[must_use]
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Issues one request for `resource` and checks its status.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the status is not 200 or 201, and
    /// [`ResourceError::Http`] if the request could not be sent.
    pub async fn make_request(
        &self,
        resource: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, ResourceError> {
        tracing::debug!(
            "{} {} for store {}",
            options.verb,
            options.path(resource),
            self.store_id
        );

        let response = self
            .client
            .make_request(&self.store_id, resource, options)
            .await?;

        if !response.is_success() {
            tracing::debug!(
                "Tiendanube API returned {} for {} in store {}",
                response.status_code,
                resource,
                self.store_id
            );
            return Err(ApiError::from_response(&response).into());
        }

        Ok(response)
    }
}

/// Decodes a successful response body into `T`.
pub(crate) fn decode<T: DeserializeOwned>(
    resource: &str,
    response: &HttpResponse,
) -> Result<T, ResourceError> {
    response.json().map_err(|source| ResourceError::Decode {
        resource: resource.to_string(),
        source,
    })
}

/// Serializes a request payload to JSON.
pub(crate) fn to_payload<D: Serialize + ?Sized>(
    resource: &str,
    data: &D,
) -> Result<Value, ResourceError> {
    serde_json::to_value(data).map_err(|source| ResourceError::Serialize {
        resource: resource.to_string(),
        source,
    })
}

/// Reads the `id` of a payload as a path segment.
///
/// Strings are used as-is; numbers and other values use their JSON text.
pub(crate) fn payload_id(resource: &str, payload: &Value) -> Result<String, ResourceError> {
    match payload.get("id") {
        None | Some(Value::Null) => Err(ResourceError::MissingField {
            resource: resource.to_string(),
            field: "id",
        }),
        Some(Value::String(id)) => Ok(id.clone()),
        Some(id) => Ok(id.to_string()),
    }
}
