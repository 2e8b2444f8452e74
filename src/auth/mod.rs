//! Authentication types for the GitLab API SDK.
//!
//! GitLab accepts three kinds of credentials on REST calls, each carried in
//! its own request header:
//!
//! - [`Credentials::PrivateToken`]: personal, project or group access tokens
//!   (`PRIVATE-TOKEN` header)
//! - [`Credentials::OAuthToken`]: OAuth 2.0 bearer tokens
//!   (`Authorization: Bearer ...`)
//! - [`Credentials::JobToken`]: the `CI_JOB_TOKEN` of a running CI job
//!   (`JOB-TOKEN` header)
//!
//! # Example
//!
//! ```rust
//! use gitlab_api::{AccessToken, Credentials};
//!
//! let credentials = Credentials::PrivateToken(AccessToken::new("glpat-secret").unwrap());
//! let (name, value) = credentials.header();
//! assert_eq!(name, "PRIVATE-TOKEN");
//! assert_eq!(value, "glpat-secret");
//!
//! // Token values never show up in debug output
//! assert!(!format!("{credentials:?}").contains("glpat-secret"));
//! ```

mod credentials;

pub use credentials::{AccessToken, Credentials};
