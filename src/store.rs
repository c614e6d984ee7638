//! Client facade and store handles.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpError};
use crate::config::{StoreId, TiendanubeConfig};
use crate::rest::resources::{
    Category, Customer, Order, Product, ProductImage, ProductVariant, Webhook,
};
use crate::rest::{ApiObject, ListResource, ListSubResource, Resource};

/// Entry point of the SDK.
///
/// Owns one shared [`HttpClient`] and hands out [`Store`] handles. Creating
/// a store handle is cheap; keep a single `TiendanubeClient` per access token.
///
/// # Example
///
/// ```rust,ignore
/// use tiendanube_api::{TiendanubeClient, TiendanubeConfig, AccessToken};
///
/// let config = TiendanubeConfig::builder()
///     .access_token(AccessToken::new("access-token").unwrap())
///     .user_agent_prefix("MyApp (dev@example.com)")
///     .build()
///     .unwrap();
///
/// let client = TiendanubeClient::new(&config)?;
/// let store = client.store(123_456_u64);
///
/// let product = store.products().get(42).await?;
/// ```
#[derive(Clone, Debug)]
pub struct TiendanubeClient {
    http_client: Arc<HttpClient>,
}

// Verify TiendanubeClient and Store are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TiendanubeClient>();
    assert_send_sync::<Store>();
};

impl TiendanubeClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &TiendanubeConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self::from_http_client(Arc::new(http_client)))
    }

    /// Wraps an existing shared HTTP client.
    #[must_use]
    pub const fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Returns the shared HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Returns a handle scoped to one store.
    #[must_use]
    pub fn store(&self, store_id: impl Into<StoreId>) -> Store {
        Store {
            base: Resource::new(Arc::clone(&self.http_client), store_id.into()),
        }
    }
}

/// A handle on one store, exposing its collections.
///
/// Every accessor is built on demand and shares the client's connection pool.
#[derive(Clone, Debug)]
pub struct Store {
    base: Resource,
}

impl Store {
    /// Returns the store id.
    #[must_use]
    pub const fn id(&self) -> &StoreId {
        self.base.store_id()
    }

    /// Returns the underlying store-scoped handle.
    #[must_use]
    pub const fn base(&self) -> &Resource {
        &self.base
    }

    /// Returns an untyped accessor for any collection by name.
    #[must_use]
    pub fn resource(&self, name: &str) -> ListResource<ApiObject> {
        ListResource::new(self.base.clone(), name)
    }

    /// Products: `products`.
    #[must_use]
    pub fn products(&self) -> ListResource<Product> {
        ListResource::new(self.base.clone(), "products")
    }

    /// Product variants: `products/{product_id}/variants`.
    #[must_use]
    pub fn product_variants(&self) -> ListSubResource<ProductVariant> {
        self.products().sub_resource("variants")
    }

    /// Product images: `products/{product_id}/images`.
    #[must_use]
    pub fn product_images(&self) -> ListSubResource<ProductImage> {
        self.products().sub_resource("images")
    }

    /// Categories: `categories`.
    #[must_use]
    pub fn categories(&self) -> ListResource<Category> {
        ListResource::new(self.base.clone(), "categories")
    }

    /// Customers: `customers`.
    #[must_use]
    pub fn customers(&self) -> ListResource<Customer> {
        ListResource::new(self.base.clone(), "customers")
    }

    /// Orders: `orders`.
    #[must_use]
    pub fn orders(&self) -> ListResource<Order> {
        ListResource::new(self.base.clone(), "orders")
    }

    /// Coupons: `coupons`.
    #[must_use]
    pub fn coupons(&self) -> ListResource<ApiObject> {
        self.resource("coupons")
    }

    /// Webhook subscriptions: `webhooks`.
    #[must_use]
    pub fn webhooks(&self) -> ListResource<Webhook> {
        ListResource::new(self.base.clone(), "webhooks")
    }

    /// Storefront scripts: `scripts`.
    #[must_use]
    pub fn scripts(&self) -> ListResource<ApiObject> {
        self.resource("scripts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    fn client() -> TiendanubeClient {
        let config = TiendanubeConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();
        TiendanubeClient::new(&config).unwrap()
    }

    #[test]
    fn test_store_accepts_numeric_and_validated_ids() {
        let client = client();
        assert_eq!(client.store(123_u64).id().as_ref(), "123");
        assert_eq!(
            client.store(StoreId::new("456").unwrap()).id().as_ref(),
            "456"
        );
    }

    #[test]
    fn test_store_accessor_names() {
        let store = client().store(1_u64);
        assert_eq!(store.products().name(), "products");
        assert_eq!(store.categories().name(), "categories");
        assert_eq!(store.customers().name(), "customers");
        assert_eq!(store.orders().name(), "orders");
        assert_eq!(store.coupons().name(), "coupons");
        assert_eq!(store.webhooks().name(), "webhooks");
        assert_eq!(store.scripts().name(), "scripts");
        assert_eq!(store.resource("locations").name(), "locations");
    }

    #[test]
    fn test_product_sub_resources() {
        let store = client().store(1_u64);
        let variants = store.product_variants();
        assert_eq!(variants.parent_name(), "products");
        assert_eq!(variants.name(), "variants");
        assert_eq!(store.product_images().name(), "images");
    }

    #[test]
    fn test_stores_share_the_http_client() {
        let client = client();
        let a = client.store(1_u64);
        let b = client.store(2_u64);
        assert!(std::ptr::eq(a.base().client(), b.base().client()));
    }
}
