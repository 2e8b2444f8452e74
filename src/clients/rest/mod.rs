//! REST API client for GitLab.
//!
//! [`RestClient`] sits on top of [`HttpClient`](crate::clients::HttpClient)
//! and issues requests relative to `{host}/api/v4`.
//!
//! # Path Normalization
//!
//! - Leading and trailing slashes are stripped: `/projects/1/` -> `projects/1`
//! - Percent-encoded segments are sent untouched: `projects/group%2Fproject`
//! - An empty path is rejected with [`RestError::InvalidPath`]
//!
//! # Retry Behavior
//!
//! Every request is attempted [`GitlabConfig::tries`](crate::GitlabConfig::tries)
//! times at most. The default is one attempt; only 429 and 5xx responses are
//! retried.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
