//! Path building infrastructure for REST resources.
//!
//! Every manager is declared with a path template such as
//! `/projects/{project_id}/pipelines/{pipeline_id}/jobs`. The template is
//! resolved once, when the manager is constructed from explicit parent
//! identifiers, using [`build_path`].
//!
//! # Example
//!
//! ```rust
//! use gitlab_api::rest::{build_path, ResourceId};
//! use std::collections::HashMap;
//!
//! let mut ids = HashMap::new();
//! ids.insert("project_id", ResourceId::from("group/project"));
//! ids.insert("pipeline_id", ResourceId::from(42));
//!
//! let path = build_path("/projects/{project_id}/pipelines/{pipeline_id}/jobs", &ids);
//! assert_eq!(path, "/projects/group%2Fproject/pipelines/42/jobs");
//! ```

use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed through a manager or on an object.
///
/// The operation selects the error variant reported when the server
/// rejects the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List a collection (GET `{path}`).
    List,
    /// Get a single object (GET `{path}/{id}`).
    Get,
    /// Create an object (POST to the creation path).
    Create,
    /// Update an object (PUT `{path}/{id}`).
    Update,
    /// Delete an object (DELETE `{path}/{id}`).
    Delete,
    /// Cancel a pipeline (POST `{path}/{id}/cancel`).
    Cancel,
    /// Retry a pipeline (POST `{path}/{id}/retry`).
    Retry,
    /// Take ownership of a schedule (POST `{path}/{id}/take_ownership`).
    TakeOwnership,
    /// Run a schedule now (POST `{path}/{id}/play`).
    Play,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Cancel => "cancel",
            Self::Retry => "retry",
            Self::TakeOwnership => "take_ownership",
            Self::Play => "play",
        }
    }
}

/// Builds a path from a template by interpolating identifiers.
///
/// Replaces `{name}` placeholders with the `Display` output of the matching
/// value. Placeholders without a value are left untouched.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_template_interpolation_single_id() {
        let mut ids = HashMap::new();
        ids.insert("project_id", "123");

        let result = build_path("/projects/{project_id}/pipelines", &ids);
        assert_eq!(result, "/projects/123/pipelines");
    }

    #[test]
    fn test_path_template_interpolation_multiple_ids() {
        let mut ids = HashMap::new();
        ids.insert("project_id", 5_u64);
        ids.insert("pipeline_schedule_id", 17_u64);

        let result = build_path(
            "/projects/{project_id}/pipeline_schedules/{pipeline_schedule_id}/variables",
            &ids,
        );
        assert_eq!(result, "/projects/5/pipeline_schedules/17/variables");
    }

    #[test]
    fn test_missing_ids_leave_placeholder() {
        let ids: HashMap<&str, String> = HashMap::new();
        let result = build_path("/projects/{project_id}/pipelines", &ids);

        assert_eq!(result, "/projects/{project_id}/pipelines");
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(ResourceOperation::List.as_str(), "list");
        assert_eq!(ResourceOperation::TakeOwnership.as_str(), "take_ownership");
        assert_eq!(ResourceOperation::Play.as_str(), "play");
    }
}
