//! Resource-specific error types for REST API operations.
//!
//! Every manager operation and custom action reports failures through
//! [`ResourceError`]. The variant tells *which* operation failed, so callers
//! can tell a rejected cancel from a rejected retry without inspecting
//! status codes:
//!
//! - **401** on any operation: [`ResourceError::Authentication`]
//! - **Other non-2xx**: the variant of the operation, e.g.
//!   [`ResourceError::Create`] or [`ResourceError::PipelineCancel`]. A
//!   status that still fails after the last retry is reported the same way.
//! - **Local validation**: [`ResourceError::MissingAttributes`], raised
//!   before any request is sent
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlab_api::rest::ResourceError;
//!
//! match pipeline.cancel(&client, None).await {
//!     Ok(()) => println!("cancel requested"),
//!     Err(ResourceError::PipelineCancel { source, .. }) if source.code == 403 => {
//!         println!("not allowed to cancel this pipeline");
//!     }
//!     Err(ResourceError::Authentication { .. }) => println!("token rejected"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{HttpError, HttpResponseError, RestError};
use crate::rest::ResourceOperation;
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use gitlab_api::rest::ResourceError;
///
/// let error = ResourceError::MissingAttributes {
///     resource: "ProjectPipeline",
///     operation: "create",
///     missing: vec!["ref"],
/// };
/// assert_eq!(error.to_string(), "Missing attributes for ProjectPipeline::create: ref");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The server rejected the credentials (HTTP 401).
    #[error("Authentication failed while running {resource}::{operation}: {source}")]
    Authentication {
        /// The resource type name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
        /// The rejected response.
        source: HttpResponseError,
    },

    /// Required attributes are absent from create/update data.
    ///
    /// Raised locally; no request was sent.
    #[error("Missing attributes for {resource}::{operation}: {}", missing.join(", "))]
    MissingAttributes {
        /// The resource type name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
        /// The required attribute names that were absent.
        missing: Vec<&'static str>,
    },

    /// Listing a collection failed.
    #[error("Failed to list {resource}: {source}")]
    List {
        /// The resource type name.
        resource: &'static str,
        /// The failed response.
        source: HttpResponseError,
    },

    /// Getting a single object failed.
    #[error("Failed to get {resource}: {source}")]
    Get {
        /// The resource type name.
        resource: &'static str,
        /// The failed response.
        source: HttpResponseError,
    },

    /// Creating an object failed.
    #[error("Failed to create {resource}: {source}")]
    Create {
        /// The resource type name.
        resource: &'static str,
        /// The failed response.
        source: HttpResponseError,
    },

    /// Updating an object failed.
    #[error("Failed to update {resource}: {source}")]
    Update {
        /// The resource type name.
        resource: &'static str,
        /// The failed response.
        source: HttpResponseError,
    },

    /// Deleting an object failed.
    #[error("Failed to delete {resource}: {source}")]
    Delete {
        /// The resource type name.
        resource: &'static str,
        /// The failed response.
        source: HttpResponseError,
    },

    /// Cancelling a pipeline failed.
    #[error("Failed to cancel pipeline: {source}")]
    PipelineCancel {
        /// The failed response.
        source: HttpResponseError,
    },

    /// Retrying a pipeline failed.
    #[error("Failed to retry pipeline: {source}")]
    PipelineRetry {
        /// The failed response.
        source: HttpResponseError,
    },

    /// Taking ownership of a pipeline schedule failed.
    #[error("Failed to take ownership of pipeline schedule: {source}")]
    Ownership {
        /// The failed response.
        source: HttpResponseError,
    },

    /// Playing a pipeline schedule failed.
    #[error("Failed to play pipeline schedule: {source}")]
    PipelinePlay {
        /// The failed response.
        source: HttpResponseError,
    },

    /// The object has no identifier, so no path can be built for it.
    #[error("Cannot resolve path for {resource}::{operation}: the object has no '{id_attr}'")]
    PathResolutionFailed {
        /// The resource type name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
        /// The identifier attribute that is missing.
        id_attr: &'static str,
    },

    /// Caller-supplied data could not be turned into a request.
    ///
    /// Raised locally; no request was sent.
    #[error("Invalid request data for {resource}: {message}")]
    InvalidRequest {
        /// The resource type name.
        resource: &'static str,
        /// What went wrong.
        message: String,
    },

    /// The server replied with a payload that does not fit the resource.
    #[error("Invalid response payload for {resource}: {message}")]
    InvalidResponse {
        /// The resource type name.
        resource: &'static str,
        /// What went wrong.
        message: String,
    },

    /// A transport error with no HTTP status, such as a network failure.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps a REST client error to the variant of the failed operation.
    ///
    /// Non-2xx responses become the operation's variant (401 always becomes
    /// [`ResourceError::Authentication`]), including the final response of an
    /// exhausted retry loop. Everything else is kept as [`ResourceError::Rest`].
    #[must_use]
    pub fn from_rest_error(
        operation: ResourceOperation,
        resource: &'static str,
        error: RestError,
    ) -> Self {
        let source = match error {
            RestError::Http(HttpError::Response(source)) => source,
            RestError::Http(HttpError::MaxRetries(e)) => HttpResponseError {
                code: e.code,
                message: e.message,
                error_reference: e.error_reference,
            },
            other => return Self::Rest(other),
        };

        if source.code == 401 {
            return Self::Authentication {
                resource,
                operation: operation.as_str(),
                source,
            };
        }

        match operation {
            ResourceOperation::List => Self::List { resource, source },
            ResourceOperation::Get => Self::Get { resource, source },
            ResourceOperation::Create => Self::Create { resource, source },
            ResourceOperation::Update => Self::Update { resource, source },
            ResourceOperation::Delete => Self::Delete { resource, source },
            ResourceOperation::Cancel => Self::PipelineCancel { source },
            ResourceOperation::Retry => Self::PipelineRetry { source },
            ResourceOperation::TakeOwnership => Self::Ownership { source },
            ResourceOperation::Play => Self::PipelinePlay { source },
        }
    }

    /// Returns the failed response, for errors raised by the server.
    #[must_use]
    pub const fn response_error(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Authentication { source, .. }
            | Self::List { source, .. }
            | Self::Get { source, .. }
            | Self::Create { source, .. }
            | Self::Update { source, .. }
            | Self::Delete { source, .. }
            | Self::PipelineCancel { source }
            | Self::PipelineRetry { source }
            | Self::Ownership { source }
            | Self::PipelinePlay { source } => Some(source),
            _ => None,
        }
    }

    /// Returns the HTTP status code, for errors raised by the server.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.response_error().map(|e| e.code)
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.response_error()
            .and_then(|source| source.error_reference.as_deref())
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MaxHttpRetriesExceededError;

    fn response_error(code: u16) -> RestError {
        RestError::Http(HttpError::Response(HttpResponseError {
            code,
            message: format!("{code} error"),
            error_reference: Some("req-1".to_string()),
        }))
    }

    #[test]
    fn test_unauthorized_maps_to_authentication_for_every_operation() {
        for operation in [
            ResourceOperation::List,
            ResourceOperation::Create,
            ResourceOperation::Cancel,
            ResourceOperation::Play,
        ] {
            let error = ResourceError::from_rest_error(operation, "ProjectPipeline", response_error(401));
            assert!(
                matches!(error, ResourceError::Authentication { operation: op, .. } if op == operation.as_str()),
                "expected Authentication for {operation:?}"
            );
        }
    }

    #[test]
    fn test_status_failures_map_to_operation_variant() {
        let error = ResourceError::from_rest_error(ResourceOperation::List, "PipelineJob", response_error(404));
        assert!(matches!(error, ResourceError::List { resource: "PipelineJob", .. }));

        let error = ResourceError::from_rest_error(ResourceOperation::Cancel, "ProjectPipeline", response_error(403));
        assert!(matches!(error, ResourceError::PipelineCancel { .. }));

        let error = ResourceError::from_rest_error(ResourceOperation::Retry, "ProjectPipeline", response_error(403));
        assert!(matches!(error, ResourceError::PipelineRetry { .. }));

        let error = ResourceError::from_rest_error(
            ResourceOperation::TakeOwnership,
            "ProjectPipelineSchedule",
            response_error(403),
        );
        assert!(matches!(error, ResourceError::Ownership { .. }));

        let error = ResourceError::from_rest_error(ResourceOperation::Play, "ProjectPipelineSchedule", response_error(500));
        assert!(matches!(error, ResourceError::PipelinePlay { .. }));
        assert_eq!(error.status_code(), Some(500));
        assert_eq!(error.request_id(), Some("req-1"));
    }

    #[test]
    fn test_exhausted_retries_map_to_operation_variant() {
        let exhausted = || {
            RestError::Http(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                code: 503,
                tries: 3,
                message: "unavailable".to_string(),
                error_reference: Some("req-9".to_string()),
            }))
        };

        let error = ResourceError::from_rest_error(ResourceOperation::Get, "ProjectPipeline", exhausted());
        assert!(matches!(
            error,
            ResourceError::Get { resource: "ProjectPipeline", ref source } if source.message == "unavailable"
        ));
        assert_eq!(error.status_code(), Some(503));
        assert_eq!(error.request_id(), Some("req-9"));

        let error = ResourceError::from_rest_error(ResourceOperation::Retry, "ProjectPipeline", exhausted());
        assert!(matches!(error, ResourceError::PipelineRetry { .. }));
    }

    #[test]
    fn test_transport_errors_stay_rest_errors() {
        let error = ResourceError::from_rest_error(
            ResourceOperation::Get,
            "ProjectPipeline",
            RestError::InvalidPath { path: "/".to_string() },
        );

        assert!(matches!(error, ResourceError::Rest(RestError::InvalidPath { .. })));
        assert!(error.status_code().is_none());
        assert!(error.request_id().is_none());
    }

    #[test]
    fn test_path_resolution_error_message() {
        let error = ResourceError::PathResolutionFailed {
            resource: "ProjectPipeline",
            operation: "jobs",
            id_attr: "id",
        };
        let message = error.to_string();
        assert!(message.contains("ProjectPipeline::jobs"));
        assert!(message.contains("'id'"));
    }
}
