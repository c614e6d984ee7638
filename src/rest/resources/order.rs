//! Order and order line item models.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{deserialize_lenient_u32, deserialize_timestamp};
use super::Customer;

/// The lifecycle status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Closed,
    Cancelled,
    /// A status this version of the crate does not know.
    #[serde(other)]
    Unknown,
}

/// An order placed in a Tiendanube store.
///
/// Amounts are decimal strings in the order's `currency`. Orders are
/// created by checkout; the API only allows updating a few fields (such as
/// `owner_note`) and transitioning status.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
    /// Human-facing order number, sequential per store.
    #[serde(default, skip_serializing)]
    pub number: Option<u64>,
    #[serde(default, skip_serializing)]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing)]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing)]
    pub currency: Option<String>,
    #[serde(default, skip_serializing)]
    pub subtotal: Option<String>,
    #[serde(default, skip_serializing)]
    pub discount: Option<String>,
    #[serde(default, skip_serializing)]
    pub total: Option<String>,
    #[serde(default, skip_serializing)]
    pub gateway: Option<String>,
    #[serde(default, skip_serializing)]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing)]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing)]
    pub shipping_status: Option<String>,
    #[serde(default, skip_serializing)]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_note: Option<String>,
    #[serde(default, skip_serializing)]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing)]
    pub products: Vec<OrderLineItem>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub paid_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub closed_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub cancelled_at: Option<DateTime<FixedOffset>>,
}

/// One purchased variant within an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderLineItem {
    pub id: Option<u64>,
    pub product_id: Option<u64>,
    pub variant_id: Option<u64>,
    /// Product name at the time of purchase, including variant values.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub sku: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_json() -> serde_json::Value {
        json!({
            "id": 450_789_469,
            "token": "8d4f5b2a",
            "number": 123,
            "contact_email": "amy@example.com",
            "currency": "ARS",
            "subtotal": "200.00",
            "total": "215.00",
            "status": "open",
            "payment_status": "paid",
            "shipping_status": "unpacked",
            "customer": {"id": 1, "name": "Amy Pond"},
            "products": [
                {"id": 7, "product_id": 1234, "variant_id": 11, "name": "Remera (M)",
                 "price": "100.00", "quantity": "2", "sku": null}
            ],
            "created_at": "2013-04-08T19:21:12+0000",
            "paid_at": "2013-04-08T19:25:00+0000",
            "closed_at": null
        })
    }

    #[test]
    fn test_order_deserialization() {
        let order: Order = serde_json::from_value(order_json()).unwrap();

        assert_eq!(order.id, Some(450_789_469));
        assert_eq!(order.status, Some(OrderStatus::Open));
        assert_eq!(
            order.customer.as_ref().and_then(|c| c.name.as_deref()),
            Some("Amy Pond")
        );
        assert_eq!(order.products.len(), 1);
        assert_eq!(order.products[0].quantity, Some(2));
        assert!(order.paid_at.is_some());
        assert!(order.closed_at.is_none());
    }

    #[test]
    fn test_unknown_order_status() {
        let mut value = order_json();
        value["status"] = json!("archived");
        let order: Order = serde_json::from_value(value).unwrap();
        assert_eq!(order.status, Some(OrderStatus::Unknown));
    }

    #[test]
    fn test_order_serialization_only_sends_writable_fields() {
        let mut order: Order = serde_json::from_value(order_json()).unwrap();
        order.owner_note = Some("Gift wrap".to_string());

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({"id": 450_789_469, "owner_note": "Gift wrap"})
        );
    }
}
