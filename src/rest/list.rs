//! CRUD accessor for a named collection.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpMethod, RequestOptions};
use crate::rest::resource::{decode, payload_id, to_payload};
use crate::rest::{ApiObject, Filters, ListSubResource, Resource, ResourceError};

/// Accessor for a named collection such as `products` or `customers`.
///
/// Every operation issues exactly one request. Responses decode into `T`,
/// which defaults to [`ApiObject`]. Write operations accept any
/// [`Serialize`] payload: a typed model, an [`ApiObject`] or a
/// [`serde_json::Value`].
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use tiendanube_api::rest::Filters;
///
/// let customers = store.resource("customers");
///
/// let created = customers.add(&json!({"name": "Acme", "email": "acme@example.com"})).await?;
/// let id = created.get_u64("id").unwrap();
///
/// let page = customers.list(&Filters::new().with("q", "acme"), Some(&["id", "name"])).await?;
/// customers.update(&json!({"id": id, "note": "VIP"})).await?;
/// customers.delete(&json!({"id": id})).await?;
/// ```
pub struct ListResource<T = ApiObject> {
    base: Resource,
    resource: String,
    _model: PhantomData<fn() -> T>,
}

// Verify ListResource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ListResource>();
};

impl<T> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            resource: self.resource.clone(),
            _model: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ListResource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListResource")
            .field("store_id", self.base.store_id())
            .field("resource", &self.resource)
            .finish()
    }
}

impl<T> ListResource<T> {
    /// Creates an accessor for `resource` under the store of `base`.
    #[must_use]
    pub fn new(base: Resource, resource: impl Into<String>) -> Self {
        Self {
            base,
            resource: resource.into(),
            _model: PhantomData,
        }
    }

    /// Returns the collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.resource
    }

    /// Returns the underlying store handle.
    #[must_use]
    pub const fn base(&self) -> &Resource {
        &self.base
    }

    /// Returns the same collection decoding into `U`.
    #[must_use]
    pub fn into_model<U>(self) -> ListResource<U> {
        ListResource {
            base: self.base,
            resource: self.resource,
            _model: PhantomData,
        }
    }

    /// Returns an accessor for a collection nested under this one, such as
    /// `products/{id}/variants`.
    #[must_use]
    pub fn sub_resource<U>(&self, subresource: impl Into<String>) -> ListSubResource<U> {
        ListSubResource::new(self.base.clone(), self.resource.clone(), subresource)
    }
}

impl<T: DeserializeOwned> ListResource<T> {
    /// Fetches one instance: `GET {resource}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the API rejects the request and
    /// [`ResourceError::Decode`] if the body does not decode into `T`.
    pub async fn get(&self, id: impl fmt::Display) -> Result<T, ResourceError> {
        let options = RequestOptions::get().resource_id(id.to_string());
        let response = self.base.make_request(&self.resource, options).await?;
        decode(&self.resource, &response)
    }

    /// Fetches one page of the collection: `GET {resource}`.
    ///
    /// Each filter becomes a query parameter. `fields`, when given, is sent
    /// comma-joined as the `fields` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the API rejects the request and
    /// [`ResourceError::Decode`] if the body is not a list of `T`.
    pub async fn list(
        &self,
        filters: &Filters,
        fields: Option<&[&str]>,
    ) -> Result<Vec<T>, ResourceError> {
        let options = list_options(filters, fields);
        let response = self.base.make_request(&self.resource, options).await?;
        decode(&self.resource, &response)
    }

    /// Creates an instance: `POST {resource}` with `data` as body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] if `data` cannot be serialized,
    /// [`ResourceError::Api`] if the API rejects it, and
    /// [`ResourceError::Decode`] if the body does not decode into `T`.
    pub async fn add<D: Serialize + ?Sized>(&self, data: &D) -> Result<T, ResourceError> {
        let payload = to_payload(&self.resource, data)?;
        let options = RequestOptions::new(HttpMethod::Post).data(payload);
        let response = self.base.make_request(&self.resource, options).await?;
        decode(&self.resource, &response)
    }

    /// Updates an instance: `PUT {resource}/{id}` with `data` as body.
    ///
    /// The id is read from the `id` field of `data`; the full payload is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] without sending anything when
    /// `data` has no `id`. Otherwise as [`add`](Self::add).
    pub async fn update<D: Serialize + ?Sized>(&self, data: &D) -> Result<T, ResourceError> {
        let payload = to_payload(&self.resource, data)?;
        let id = payload_id(&self.resource, &payload)?;
        let options = RequestOptions::new(HttpMethod::Put)
            .resource_id(id)
            .data(payload);
        let response = self.base.make_request(&self.resource, options).await?;
        decode(&self.resource, &response)
    }
}

impl<T> ListResource<T> {
    /// Deletes an instance: `DELETE {resource}/{id}`.
    ///
    /// The id is read from the `id` field of `data`; nothing else is sent.
    /// Returns the decoded response object. An empty body, or a JSON body
    /// that is not an object, yields an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] without sending anything when
    /// `data` has no `id`, and [`ResourceError::Api`] if the API rejects the
    /// request.
    pub async fn delete<D: Serialize + ?Sized>(
        &self,
        data: &D,
    ) -> Result<ApiObject, ResourceError> {
        let payload = to_payload(&self.resource, data)?;
        let id = payload_id(&self.resource, &payload)?;
        let options = RequestOptions::new(HttpMethod::Delete).resource_id(id);
        let response = self.base.make_request(&self.resource, options).await?;

        if response.text.trim().is_empty() {
            return Ok(ApiObject::new());
        }
        match decode::<Value>(&self.resource, &response)? {
            Value::Object(map) => Ok(ApiObject::from(map)),
            _ => Ok(ApiObject::new()),
        }
    }
}

/// Builds the options of a collection read.
pub(crate) fn list_options(filters: &Filters, fields: Option<&[&str]>) -> RequestOptions {
    let mut options = RequestOptions::get().extra(filters.to_query());
    if let Some(fields) = fields {
        options = options.query_param("fields", fields.join(","));
    }
    options
}
