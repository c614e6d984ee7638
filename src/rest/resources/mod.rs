//! Typed models for the resources whose shape is known.
//!
//! Any accessor can decode into these instead of the generic
//! [`ApiObject`](crate::rest::ApiObject). The [`Store`](crate::Store)
//! shortcuts already do so:
//!
//! | Accessor                    | Path                          | Model            |
//! |-----------------------------|-------------------------------|------------------|
//! | `products()`                | `products`                    | [`Product`]      |
//! | `product_variants()`        | `products/{id}/variants`      | [`ProductVariant`] |
//! | `product_images()`          | `products/{id}/images`        | [`ProductImage`] |
//! | `categories()`              | `categories`                  | [`Category`]     |
//! | `customers()`               | `customers`                   | [`Customer`]     |
//! | `orders()`                  | `orders`                      | [`Order`]        |
//! | `webhooks()`                | `webhooks`                    | [`Webhook`]      |
//!
//! Fields are optional and unknown fields are ignored, so models keep
//! decoding as the API grows. Read-only fields are never serialized; `id` is
//! serialized when set so that `update` can address the instance.

mod category;
mod common;
mod customer;
mod order;
mod product;
mod webhook;

pub use category::Category;
pub use common::LocalizedText;
pub use customer::Customer;
pub use order::{Order, OrderLineItem, OrderStatus};
pub use product::{Product, ProductImage, ProductVariant};
pub use webhook::Webhook;
