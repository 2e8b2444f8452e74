//! REST-specific error types for the GitLab API SDK.
//!
//! - [`RestError::InvalidPath`]: a REST API path failed validation
//! - [`RestError::Http`]: wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlab_api::clients::rest::RestError;
//!
//! match client.get("projects/42/pipelines", None).await {
//!     Ok(response) => println!("Pipelines: {}", response.body),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {path}"),
//!     Err(RestError::Http(e)) => println!("HTTP error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use gitlab_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "/".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, MaxHttpRetriesExceededError};

    #[test]
    fn test_invalid_path_error_includes_path_in_message() {
        let error = RestError::InvalidPath {
            path: "//".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: //");
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 404,
            message: "404 Not found".to_string(),
            error_reference: Some("abc-123".to_string()),
        });

        let rest_error: RestError = http_error.into();

        assert!(matches!(rest_error, RestError::Http(_)));
        assert!(rest_error.to_string().contains("Not found"));
    }

    #[test]
    fn test_http_error_wraps_max_retries_exceeded() {
        let rest_error = RestError::Http(HttpError::MaxRetries(MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: "Retry later".to_string(),
            error_reference: None,
        }));

        let message = rest_error.to_string();
        assert!(message.contains("Exceeded maximum retry count"));
        assert!(message.contains('3'));
    }
}
