//! Accessor for collections nested under one resource instance.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpMethod, RequestOptions};
use crate::rest::list::list_options;
use crate::rest::resource::{decode, payload_id, to_payload};
use crate::rest::{ApiObject, Filters, Resource, ResourceError};

/// Accessor for `{resource}/{resource_id}/{subresource}`, e.g. the variants
/// of a product.
///
/// Offers `get`, `list`, `add` and `update`. There is no `delete`.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use tiendanube_api::rest::Filters;
///
/// let variants = store.product_variants();
///
/// let all = variants.list(123, &Filters::new(), None).await?;
/// let one = variants.get(123, 456).await?;
/// variants.update(123, &json!({"id": 456, "price": "12.50"})).await?;
/// ```
pub struct ListSubResource<T = ApiObject> {
    base: Resource,
    resource: String,
    subresource: String,
    _model: PhantomData<fn() -> T>,
}

// Verify ListSubResource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ListSubResource>();
};

impl<T> Clone for ListSubResource<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            resource: self.resource.clone(),
            subresource: self.subresource.clone(),
            _model: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ListSubResource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSubResource")
            .field("store_id", self.base.store_id())
            .field("resource", &self.resource)
            .field("subresource", &self.subresource)
            .finish()
    }
}

impl<T> ListSubResource<T> {
    /// Creates an accessor for `subresource` nested under `resource`.
    #[must_use]
    pub fn new(
        base: Resource,
        resource: impl Into<String>,
        subresource: impl Into<String>,
    ) -> Self {
        Self {
            base,
            resource: resource.into(),
            subresource: subresource.into(),
            _model: PhantomData,
        }
    }

    /// Returns the parent collection name.
    #[must_use]
    pub fn parent_name(&self) -> &str {
        &self.resource
    }

    /// Returns the nested collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.subresource
    }

    /// Returns the same nested collection decoding into `U`.
    #[must_use]
    pub fn into_model<U>(self) -> ListSubResource<U> {
        ListSubResource {
            base: self.base,
            resource: self.resource,
            subresource: self.subresource,
            _model: PhantomData,
        }
    }

    fn options(&self, verb: HttpMethod, resource_id: &dyn fmt::Display) -> RequestOptions {
        RequestOptions::new(verb)
            .resource_id(resource_id.to_string())
            .subresource(self.subresource.clone())
    }
}

impl<T: DeserializeOwned> ListSubResource<T> {
    /// Fetches one nested instance:
    /// `GET {resource}/{resource_id}/{subresource}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the API rejects the request and
    /// [`ResourceError::Decode`] if the body does not decode into `T`.
    pub async fn get(
        &self,
        resource_id: impl fmt::Display,
        id: impl fmt::Display,
    ) -> Result<T, ResourceError> {
        let options = self
            .options(HttpMethod::Get, &resource_id)
            .subresource_id(id.to_string());
        let response = self.base.make_request(&self.resource, options).await?;
        decode(&self.subresource, &response)
    }

    /// Fetches one page of the nested collection:
    /// `GET {resource}/{resource_id}/{subresource}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the API rejects the request and
    /// [`ResourceError::Decode`] if the body is not a list of `T`.
    pub async fn list(
        &self,
        resource_id: impl fmt::Display,
        filters: &Filters,
        fields: Option<&[&str]>,
    ) -> Result<Vec<T>, ResourceError> {
        let mut options = list_options(filters, fields);
        options.resource_id = Some(resource_id.to_string());
        options.subresource = Some(self.subresource.clone());
        let response = self.base.make_request(&self.resource, options).await?;
        decode(&self.subresource, &response)
    }

    /// Creates a nested instance:
    /// `POST {resource}/{resource_id}/{subresource}` with `data` as body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] if `data` cannot be serialized,
    /// [`ResourceError::Api`] if the API rejects it, and
    /// [`ResourceError::Decode`] if the body does not decode into `T`.
    pub async fn add<D: Serialize + ?Sized>(
        &self,
        resource_id: impl fmt::Display,
        data: &D,
    ) -> Result<T, ResourceError> {
        let payload = to_payload(&self.subresource, data)?;
        let options = self.options(HttpMethod::Post, &resource_id).data(payload);
        let response = self.base.make_request(&self.resource, options).await?;
        decode(&self.subresource, &response)
    }

    /// Updates a nested instance:
    /// `PUT {resource}/{resource_id}/{subresource}/{id}` with `data` as body.
    ///
    /// The id is read from the `id` field of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] without sending anything when
    /// `data` has no `id`. Otherwise as [`add`](Self::add).
    pub async fn update<D: Serialize + ?Sized>(
        &self,
        resource_id: impl fmt::Display,
        data: &D,
    ) -> Result<T, ResourceError> {
        let payload = to_payload(&self.subresource, data)?;
        let id = payload_id(&self.subresource, &payload)?;
        let options = self
            .options(HttpMethod::Put, &resource_id)
            .subresource_id(id)
            .data(payload);
        let response = self.base.make_request(&self.resource, options).await?;
        decode(&self.subresource, &response)
    }
}
