//! Types shared by several resource models.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{de, Deserialize, Deserializer};

/// Text translated per language, keyed by language code (`es`, `pt`, `en`).
///
/// Stores can publish in several languages, so names, descriptions and
/// handles arrive as maps such as `{"es": "Remera", "pt": "Camiseta"}`.
pub type LocalizedText = BTreeMap<String, String>;

/// Deserializes API timestamps such as `2013-01-03T09:11:51+0000`.
///
/// Offsets with and without a colon are accepted, as are fractional
/// seconds. `null` and missing values map to `None`.
pub(crate) fn deserialize_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_timestamp(&raw).map(Some).map_err(de::Error::custom)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map_err(|e| format!("invalid timestamp '{raw}': {e}"))
}

/// Deserializes counts that the API sends either as numbers or as strings.
pub(crate) fn deserialize_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
    }
}
