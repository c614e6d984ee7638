//! Query filters for collection reads.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone};

/// A single filter value.
///
/// Datetimes are rendered as ISO-8601; every other value is sent in its plain
/// textual form.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    /// A datetime with an offset, rendered as RFC 3339 (`2021-01-01T00:00:00+00:00`).
    DateTime(DateTime<FixedOffset>),
    /// A datetime without an offset, rendered as `2021-01-01T00:00:00`.
    NaiveDateTime(NaiveDateTime),
    /// A text value, sent as-is.
    Text(String),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value, sent as `true` or `false`.
    Bool(bool),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateTime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
            Self::NaiveDateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FilterValue {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::DateTime(dt.fixed_offset())
    }
}

impl From<NaiveDateTime> for FilterValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::NaiveDateTime(dt)
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for FilterValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Filters for [`ListResource::list`](crate::rest::ListResource::list) and
/// [`ListSubResource::list`](crate::rest::ListSubResource::list).
///
/// Each filter becomes one query parameter. Filter names are not validated;
/// the API ignores names it does not know.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use tiendanube_api::rest::Filters;
///
/// let since = NaiveDate::from_ymd_opt(2021, 1, 1)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
///
/// let filters = Filters::new()
///     .with("created_at_min", since)
///     .with("per_page", 50)
///     .with("q", "shirt");
///
/// let query = filters.to_query();
/// assert_eq!(query["created_at_min"], "2021-01-01T00:00:00");
/// assert_eq!(query["per_page"], "50");
/// assert_eq!(query["q"], "shirt");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters(BTreeMap<String, FilterValue>);

impl Filters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter, returning the updated set.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a filter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the filter under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.0.get(name)
    }

    /// Returns `true` when no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Renders the filters as query parameters.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
