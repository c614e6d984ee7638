//! Configuration types for the Tiendanube API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Tiendanube.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TiendanubeConfig`]: The main configuration struct holding all SDK settings
//! - [`TiendanubeConfigBuilder`]: A builder for constructing [`TiendanubeConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`StoreId`]: A validated store identifier
//! - [`HostUrl`]: A validated API host URL
//! - [`ApiVersion`]: The Tiendanube API version to use
//!
//! # Example
//!
//! ```rust
//! use tiendanube_api::{TiendanubeConfig, AccessToken, ApiVersion};
//!
//! let config = TiendanubeConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::V1)
//!     .user_agent_prefix("MyApp (dev@example.com)")
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, StoreId};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Default API host used when no `api_host` is configured.
pub const DEFAULT_API_HOST: &str = "https://api.tiendanube.com";

/// Configuration for the Tiendanube API SDK.
///
/// # Thread Safety
///
/// `TiendanubeConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # User-Agent
///
/// Tiendanube asks every app to identify itself with a `User-Agent` that
/// names the app and a contact address, e.g. `MyApp (dev@example.com)`. Pass
/// that value as `user_agent_prefix`; the SDK appends its own identification.
#[derive(Clone, Debug)]
pub struct TiendanubeConfig {
    access_token: AccessToken,
    api_host: Option<HostUrl>,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl TiendanubeConfig {
    /// Creates a new builder for constructing a `TiendanubeConfig`.
    #[must_use]
    pub fn builder() -> TiendanubeConfigBuilder {
        TiendanubeConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify TiendanubeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TiendanubeConfig>();
};

/// Builder for constructing [`TiendanubeConfig`] instances.
///
/// The only required field is `access_token`.
///
/// # Defaults
///
/// - `api_host`: `None` ([`DEFAULT_API_HOST`] is used)
/// - `api_version`: [`ApiVersion::V1`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tiendanube_api::{TiendanubeConfig, AccessToken, ApiVersion, HostUrl};
///
/// let config = TiendanubeConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .api_host(HostUrl::new("https://api.nuvemshop.com.br").unwrap())
///     .api_version(ApiVersion::V2025_03)
///     .user_agent_prefix("MyApp (dev@example.com)")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct TiendanubeConfigBuilder {
    access_token: Option<AccessToken>,
    api_host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl TiendanubeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`TiendanubeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<TiendanubeConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(TiendanubeConfig {
            access_token,
            api_host: self.api_host,
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
