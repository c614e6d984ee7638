//! Webhook subscription model.
//!
//! Only the subscription resource is modelled here. Receiving and verifying
//! webhook deliveries is outside this crate.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::deserialize_timestamp;

/// A webhook subscription: the API POSTs to `url` when `event` happens.
///
/// Events are named `{resource}/{action}`, e.g. `order/created` or
/// `product/updated`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Webhook {
    /// Creates an unsaved subscription for `event` delivered to `url`.
    #[must_use]
    pub fn new(event: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            event: Some(event.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }
}
