//! Access tokens and the credential kinds GitLab understands.

use crate::error::ConfigError;
use std::fmt;

/// A validated, non-empty access token.
///
/// The `Debug` implementation masks the value, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use gitlab_api::AccessToken;
///
/// let token = AccessToken::new("glpat-secret").unwrap();
/// assert_eq!(token.as_ref(), "glpat-secret");
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty or whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyToken);
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

/// Credentials attached to every request sent by a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// A personal, project or group access token.
    PrivateToken(AccessToken),
    /// An OAuth 2.0 access token, sent as a bearer token.
    OAuthToken(AccessToken),
    /// A CI/CD job token.
    JobToken(AccessToken),
}

impl Credentials {
    /// Returns the header name and value carrying these credentials.
    #[must_use]
    pub fn header(&self) -> (&'static str, String) {
        match self {
            Self::PrivateToken(token) => ("PRIVATE-TOKEN", token.as_ref().to_string()),
            Self::OAuthToken(token) => ("Authorization", format!("Bearer {}", token.as_ref())),
            Self::JobToken(token) => ("JOB-TOKEN", token.as_ref().to_string()),
        }
    }

    /// Returns the underlying token.
    #[must_use]
    pub const fn token(&self) -> &AccessToken {
        match self {
            Self::PrivateToken(token) | Self::OAuthToken(token) | Self::JobToken(token) => token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> AccessToken {
        AccessToken::new(value).unwrap()
    }

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(AccessToken::new(""), Err(ConfigError::EmptyToken)));
        assert!(matches!(AccessToken::new("   "), Err(ConfigError::EmptyToken)));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let debug_output = format!("{:?}", token("super-secret"));
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_private_token_header() {
        let (name, value) = Credentials::PrivateToken(token("abc")).header();
        assert_eq!(name, "PRIVATE-TOKEN");
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_oauth_token_uses_bearer_authorization() {
        let (name, value) = Credentials::OAuthToken(token("abc")).header();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer abc");
    }

    #[test]
    fn test_job_token_header() {
        let credentials = Credentials::JobToken(token("ci-token"));
        assert_eq!(credentials.header().0, "JOB-TOKEN");
        assert_eq!(credentials.token().as_ref(), "ci-token");
    }

    #[test]
    fn test_credentials_debug_hides_token() {
        let debug_output = format!("{:?}", Credentials::OAuthToken(token("hidden")));
        assert!(debug_output.contains("OAuthToken"));
        assert!(!debug_output.contains("hidden"));
    }
}
