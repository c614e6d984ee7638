//! Customer model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::deserialize_timestamp;
use crate::rest::ApiObject;

/// A customer of a Tiendanube store.
///
/// Monetary totals are decimal strings. Addresses are kept as generic
/// objects since their shape varies by country.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Tax identification number (CPF/CNPJ, DNI, CUIT...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_address: Option<ApiObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<ApiObject>,
    #[serde(default, skip_serializing)]
    pub total_spent: Option<String>,
    #[serde(default, skip_serializing)]
    pub total_spent_currency: Option<String>,
    #[serde(default, skip_serializing)]
    pub last_order_id: Option<u64>,
    #[serde(default, skip_serializing)]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts_marketing: Option<bool>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_deserialization() {
        let customer: Customer = serde_json::from_value(json!({
            "id": 1,
            "name": "Amy Pond",
            "email": "amy@example.com",
            "identification": "20-12345678-9",
            "total_spent": "1800.00",
            "total_spent_currency": "ARS",
            "last_order_id": 90,
            "active": true,
            "default_address": {"city": "Rosario", "zipcode": "2000"},
            "addresses": [{"city": "Rosario", "zipcode": "2000"}],
            "created_at": "2013-04-08T19:21:12+0000",
            "updated_at": "2013-04-08T19:21:12+0000"
        }))
        .unwrap();

        assert_eq!(customer.name.as_deref(), Some("Amy Pond"));
        assert_eq!(customer.total_spent.as_deref(), Some("1800.00"));
        assert_eq!(
            customer.default_address.as_ref().and_then(|a| a.get_str("city")),
            Some("Rosario")
        );
        assert_eq!(customer.addresses.len(), 1);
    }

    #[test]
    fn test_customer_serialization_skips_computed_fields() {
        let customer = Customer {
            id: Some(1),
            email: Some("amy@example.com".to_string()),
            total_spent: Some("10.00".to_string()),
            active: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&customer).unwrap(),
            json!({"id": 1, "email": "amy@example.com"})
        );
    }
}
