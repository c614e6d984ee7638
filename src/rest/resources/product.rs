//! Product, variant and image models.
//!
//! Products live at `products`; their variants and images are nested
//! collections at `products/{id}/variants` and `products/{id}/images`.
//!
//! # Example
//!
//! ```rust,ignore
//! use tiendanube_api::rest::resources::{Product, ProductVariant};
//! use tiendanube_api::rest::Filters;
//!
//! let products = store.products();
//! let product: Product = products.get(123).await?;
//! println!("{:?}", product.name.get("es"));
//!
//! let variants: Vec<ProductVariant> = store
//!     .product_variants()
//!     .list(123, &Filters::new(), None)
//!     .await?;
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{deserialize_timestamp, LocalizedText};
use super::Category;

/// A product in a Tiendanube store.
///
/// Localized fields (`name`, `description`, `handle`, SEO texts) are keyed by
/// language code. `id` is sent on update; timestamps and nested collections
/// are read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub handle: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_shipping: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub seo_title: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub seo_description: LocalizedText,
    /// Comma separated tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,
    #[serde(default, skip_serializing)]
    pub images: Vec<ProductImage>,
    #[serde(default, skip_serializing)]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A purchasable variant of a product.
///
/// Prices are decimal strings, as the API sends them. `stock` is `None`
/// when stock is not managed (infinite stock).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing)]
    pub product_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotional_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_management: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Values of the product's attributes, in attribute order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<LocalizedText>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing)]
    pub product_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Base64 encoded image content, as an alternative to `src` on upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}
