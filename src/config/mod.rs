//! Configuration types for the GitLab API SDK.
//!
//! # Overview
//!
//! - [`GitlabConfig`]: settings shared by every client built from it
//! - [`GitlabConfigBuilder`]: fluent builder validating those settings
//! - [`HostUrl`]: a validated GitLab instance URL
//! - [`ApiVersion`]: the REST API version (only `v4`)
//!
//! Configuration is instance-based: there is no global state, and two
//! clients built from two configurations never share settings.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use gitlab_api::{AccessToken, Credentials, GitlabConfig, HostUrl};
//!
//! let config = GitlabConfig::builder()
//!     .host(HostUrl::new("https://gitlab.example.com").unwrap())
//!     .credentials(Credentials::PrivateToken(AccessToken::new("glpat-token").unwrap()))
//!     .timeout(Duration::from_secs(30))
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::HostUrl;
pub use version::ApiVersion;

use crate::auth::Credentials;
use crate::error::ConfigError;

/// Configuration for the GitLab API SDK.
///
/// `GitlabConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct GitlabConfig {
    host: HostUrl,
    credentials: Option<Credentials>,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    tries: u32,
}

impl GitlabConfig {
    /// Creates a new builder for constructing a `GitlabConfig`.
    #[must_use]
    pub fn builder() -> GitlabConfigBuilder {
        GitlabConfigBuilder::new()
    }

    /// Returns the GitLab instance URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the credentials, if configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns how many times a request is attempted on 429/5xx responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify GitlabConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GitlabConfig>();
};

/// Builder for constructing [`GitlabConfig`] instances.
///
/// `host` is the only required field.
///
/// # Defaults
///
/// - `credentials`: `None` (anonymous requests)
/// - `api_version`: [`ApiVersion::V4`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
/// - `tries`: `1` (no retries)
#[derive(Debug, Default)]
pub struct GitlabConfigBuilder {
    host: Option<HostUrl>,
    credentials: Option<Credentials>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    tries: Option<u32>,
}

impl GitlabConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GitLab instance URL (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the credentials sent with every request.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets how many times a request is attempted.
    ///
    /// Only 429 and 5xx responses are retried.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`GitlabConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` is not set,
    /// or [`ConfigError::InvalidTries`] if `tries` is zero.
    pub fn build(self) -> Result<GitlabConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(GitlabConfig {
            host,
            credentials: self.credentials,
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            tries,
        })
    }
}
