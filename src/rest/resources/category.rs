//! Category model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{deserialize_timestamp, LocalizedText};

/// A product category. Categories form a tree through `parent`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "LocalizedText::is_empty")]
    pub handle: LocalizedText,
    /// Id of the parent category; `None` for top level categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    #[serde(default, skip_serializing)]
    pub subcategories: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_shopping_category: Option<String>,
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
    fn test_category_tree_fields() {
        let category: Category = serde_json::from_value(json!({
            "id": 4567,
            "name": {"es": "Poleras", "pt": "Camisetas"},
            "parent": 4566,
            "subcategories": [4568, 4569],
            "created_at": "2013-01-03T09:11:51+0000"
        }))
        .unwrap();

        assert_eq!(category.parent, Some(4566));
        assert_eq!(category.subcategories, vec![4568, 4569]);
        assert_eq!(category.name.len(), 2);
        assert!(category.updated_at.is_none());
    }

    #[test]
    fn test_category_serialization_omits_subcategories() {
        let category = Category {
            id: Some(1),
            subcategories: vec![2, 3],
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&category).unwrap(), json!({"id": 1}));
    }
}
