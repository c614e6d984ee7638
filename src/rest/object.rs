//! Generic attribute-accessible API object.
//!
//! Resources without a typed model decode into [`ApiObject`], an ordered
//! string-keyed map over JSON values. Keys keep the order the API sent them.

use std::ops::{Deref, DerefMut, Index};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// An ordered key-value view over a JSON object returned by the API.
///
/// Indexing with a missing key yields [`Value::Null`] rather than panicking,
/// so `obj["name"]` is always safe. Typed accessors return `None` when the
/// key is missing or holds a different type.
///
/// `ApiObject` dereferences to [`serde_json::Map`], so every map method
/// (`get`, `insert`, `keys`, `len`, ...) is available directly.
///
/// # Example
///
/// ```rust
/// use tiendanube_api::rest::ApiObject;
/// use serde_json::json;
///
/// let obj: ApiObject = serde_json::from_value(json!({"id": 7, "name": "Acme"})).unwrap();
///
/// assert_eq!(obj["name"], "Acme");
/// assert_eq!(obj.get_str("name"), Some("Acme"));
/// assert_eq!(obj.get_u64("id"), Some(7));
/// assert!(obj["missing"].is_null());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiObject(Map<String, Value>);

impl ApiObject {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value under `key` as a string slice.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns the value under `key` as a signed integer.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    /// Returns the value under `key` as an unsigned integer.
    #[must_use]
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    /// Returns the value under `key` as a float.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Returns the value under `key` as a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Returns the value under `key` as an array.
    #[must_use]
    pub fn get_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key).and_then(Value::as_array)
    }

    /// Returns the value under `key` as a nested object.
    #[must_use]
    pub fn get_object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    /// Decodes the value under `key` into `T`.
    ///
    /// Returns `None` if the key is missing or the value does not fit `T`.
    #[must_use]
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Consumes the object, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for ApiObject {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ApiObject {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Index<&str> for ApiObject {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&NULL)
    }
}

impl From<Map<String, Value>> for ApiObject {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ApiObject> for Value {
    fn from(obj: ApiObject) -> Self {
        Self::Object(obj.0)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ApiObject {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ApiObject {
        serde_json::from_value(json!({
            "id": 1234,
            "name": "Acme",
            "price": "19.90",
            "weight": 0.5,
            "balance": -3,
            "published": true,
            "tags": ["a", "b"],
            "address": {"city": "Buenos Aires"}
        }))
        .unwrap()
    }

    #[test]
    fn test_index_returns_null_for_missing_keys() {
        let obj = sample();
        assert_eq!(obj["name"], "Acme");
        assert_eq!(obj["missing"], Value::Null);
    }

    #[test]
    fn test_typed_accessors() {
        let obj = sample();
        assert_eq!(obj.get_str("name"), Some("Acme"));
        assert_eq!(obj.get_u64("id"), Some(1234));
        assert_eq!(obj.get_i64("balance"), Some(-3));
        assert_eq!(obj.get_f64("weight"), Some(0.5));
        assert_eq!(obj.get_bool("published"), Some(true));
        assert_eq!(obj.get_array("tags").map(Vec::len), Some(2));
        assert_eq!(
            obj.get_object("address").and_then(|a| a.get("city")),
            Some(&json!("Buenos Aires"))
        );
    }

    #[test]
    fn test_typed_accessors_return_none_on_type_mismatch() {
        let obj = sample();
        assert_eq!(obj.get_u64("name"), None);
        assert_eq!(obj.get_str("id"), None);
        assert_eq!(obj.get_bool("missing"), None);
    }

    #[test]
    fn test_get_as_decodes_nested_values() {
        let obj = sample();
        let tags: Vec<String> = obj.get_as("tags").unwrap();
        assert_eq!(tags, vec!["a".to_string(), "b".to_string()]);
        assert!(obj.get_as::<Vec<String>>("address").is_none());
    }

    #[test]
    fn test_preserves_key_order() {
        let obj: ApiObject = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&String> = obj.keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(serde_json::to_string(&obj).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn test_mutation_through_deref_mut() {
        let mut obj = ApiObject::new();
        obj.insert("id".to_string(), json!(7));
        assert_eq!(obj.get_u64("id"), Some(7));
        assert_eq!(Value::from(obj), json!({"id": 7}));
    }

    #[test]
    fn test_from_iterator() {
        let obj: ApiObject = [("id", json!(1)), ("name", json!("x"))].into_iter().collect();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["name"], "x");
    }
}
