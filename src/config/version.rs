//! Tiendanube API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Tiendanube API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Tiendanube API version.
///
/// The version is the first path segment of every request
/// (`/{version}/{store_id}/...`). The original API is `v1`; newer releases are
/// dated (`YYYY-MM`). Unknown but well-formed versions parse as `Custom`.
///
/// # Example
///
/// ```rust
/// use tiendanube_api::ApiVersion;
///
/// let version = ApiVersion::default();
/// assert_eq!(version, ApiVersion::V1);
///
/// let version: ApiVersion = "2025-03".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_03);
///
/// assert_eq!(format!("{}", ApiVersion::V1), "v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// The original `v1` API.
    #[default]
    V1,
    /// API version 2025-03 (March 2025)
    V2025_03,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns `true` for the versions this SDK knows about.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        // vN
        if let Some(number) = s.strip_prefix('v') {
            return !number.is_empty() && number.chars().all(|c| c.is_ascii_digit());
        }

        // YYYY-MM
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };
        if year.len() != 4 || month.len() != 2 {
            return false;
        }
        if !year.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        matches!(month.parse::<u8>(), Ok(1..=12))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V1 => "v1",
            Self::V2025_03 => "2025-03",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v1" => Ok(Self::V1),
            "2025-03" => Ok(Self::V2025_03),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}
