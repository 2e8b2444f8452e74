//! GitLab REST API version definitions.
//!
//! GitLab exposes a single stable REST API generation, `v4`, under
//! `{host}/api/v4`. The [`ApiVersion`] enum keeps the version explicit in
//! configuration so request paths are built from it rather than hard-coded.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// GitLab REST API version.
///
/// # Example
///
/// ```rust
/// use gitlab_api::ApiVersion;
///
/// let version: ApiVersion = "4".parse().unwrap();
/// assert_eq!(version, ApiVersion::V4);
/// assert_eq!(version.to_string(), "v4");
/// assert_eq!(version.base_path(), "/api/v4");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The v4 REST API.
    #[default]
    V4,
}

impl ApiVersion {
    /// Returns the latest supported API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V4
    }

    /// Returns the path prefix every REST call is issued under.
    #[must_use]
    pub const fn base_path(self) -> &'static str {
        match self {
            Self::V4 => "/api/v4",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => f.write_str("v4"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "4" | "v4" => Ok(Self::V4),
            other => Err(ConfigError::InvalidApiVersion {
                version: other.to_string(),
            }),
        }
    }
}
