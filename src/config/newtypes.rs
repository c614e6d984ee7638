//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Tiendanube access token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use tiendanube_api::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// The identifier of a Tiendanube store.
///
/// Store ids scope every request: they form the first path segment after the
/// API version. The value is opaque to the SDK. It is usually numeric, but any
/// non-empty string that is safe to place in a URL path is accepted.
///
/// # Example
///
/// ```rust
/// use tiendanube_api::StoreId;
///
/// let from_number = StoreId::from(123_456_u64);
/// let from_string = StoreId::new("123456").unwrap();
/// assert_eq!(from_number, from_string);
/// assert_eq!(from_number.to_string(), "123456");
///
/// assert!(StoreId::new("").is_err());
/// assert!(StoreId::new("12/34").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreId(String);

impl StoreId {
    /// Creates a new validated store id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreId`] if the id is empty or contains
    /// characters that would change the request path.
    pub fn new(store_id: impl Into<String>) -> Result<Self, ConfigError> {
        let store_id = store_id.into().trim().to_string();

        let is_valid = !store_id.is_empty()
            && !store_id
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'));
        if !is_valid {
            return Err(ConfigError::InvalidStoreId { store_id });
        }

        Ok(Self(store_id))
    }
}

impl From<u64> for StoreId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for StoreId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StoreId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Webhook payloads and API responses carry store ids as numbers.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self::from(n)),
            Raw::Text(s) => Self::new(s).map_err(de::Error::custom),
        }
    }
}

/// A validated API host URL.
///
/// Used to point the client at a different API host, such as the Nuvemshop
/// domain, a proxy, or a local mock server. Only `http` and `https` hosts
/// are accepted; trailing slashes are dropped.
///
/// # Example
///
/// ```rust
/// use tiendanube_api::HostUrl;
///
/// let url = HostUrl::new("https://api.nuvemshop.com.br/").unwrap();
/// assert_eq!(url.base_uri(), "https://api.nuvemshop.com.br");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the scheme is not `http` or
    /// `https`, or the host is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();

        let host = match url.split_once("://") {
            Some(("http" | "https", rest)) => rest.split([':', '/', '?', '#']).next(),
            _ => None,
        };
        if host.map_or(true, str::is_empty) {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self(url))
    }

    /// Returns the URL that request paths are appended to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_store_id_accepts_numbers_and_strings() {
        assert_eq!(StoreId::from(42_u64).as_ref(), "42");
        assert_eq!(StoreId::new(" 1234 ").unwrap().as_ref(), "1234");
        assert_eq!(StoreId::new("store-abc").unwrap().as_ref(), "store-abc");
    }

    #[test]
    fn test_store_id_rejects_path_breaking_values() {
        assert!(StoreId::new("").is_err());
        assert!(StoreId::new("12/34").is_err());
        assert!(StoreId::new("12?x=1").is_err());
        assert!(StoreId::new("12#frag").is_err());
        assert!(StoreId::new("12 34").is_err());
    }

    #[test]
    fn test_store_id_deserializes_from_number_or_string() {
        let from_number: StoreId = serde_json::from_str("1234").unwrap();
        let from_string: StoreId = serde_json::from_str(r#""1234""#).unwrap();
        assert_eq!(from_number, from_string);

        assert!(serde_json::from_str::<StoreId>(r#""""#).is_err());
        assert_eq!(serde_json::to_string(&from_number).unwrap(), r#""1234""#);
    }

    #[test]
    fn test_host_url_accepts_http_and_https() {
        let url = HostUrl::new(" https://api.tiendanube.com ").unwrap();
        assert_eq!(url.base_uri(), "https://api.tiendanube.com");

        let url = HostUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.base_uri(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("api.tiendanube.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
        assert!(HostUrl::new("ftp://example.com").is_err());
        assert!(HostUrl::new("https://:8080").is_err());
    }

    #[test]
    fn test_host_url_base_uri_strips_trailing_slashes() {
        let url = HostUrl::new("https://proxy.example.com/tiendanube//").unwrap();
        assert_eq!(url.base_uri(), "https://proxy.example.com/tiendanube");
    }
}
