//! GitLab CI/CD resource bindings.
//!
//! Each collection has a manager bound to an explicit parent identifier,
//! and every record it returns is a [`RestObject`](crate::rest::RestObject)
//! that keeps a handle on that manager.
//!
//! | Manager | Path | Operations |
//! |---------|------|------------|
//! | [`ProjectPipelineManager`] | `/projects/{project_id}/pipelines` | list, get, create, delete |
//! | [`ProjectPipelineJobManager`] | `.../pipelines/{pipeline_id}/jobs` | list |
//! | [`ProjectPipelineBridgeManager`] | `.../pipelines/{pipeline_id}/bridges` | list |
//! | [`ProjectPipelineVariableManager`] | `.../pipelines/{pipeline_id}/variables` | list |
//! | [`ProjectPipelineScheduleManager`] | `/projects/{project_id}/pipeline_schedules` | list, get, create, update, delete |
//! | [`ProjectPipelineScheduleVariableManager`] | `.../pipeline_schedules/{id}/variables` | create, update, delete |
//!
//! # Pipelines
//!
//! ```rust,ignore
//! use gitlab_api::rest::resources::{PipelineListFilters, PipelineScope, ProjectPipelineManager};
//! use gitlab_api::rest::{CreateManager, ListManager};
//! use serde_json::json;
//!
//! let pipelines = ProjectPipelineManager::new("group/project");
//!
//! let filters = PipelineListFilters {
//!     scope: Some(PipelineScope::Running),
//!     ..Default::default()
//! };
//! let running = pipelines.list(&client, Some(&filters), None).await?;
//!
//! let pipeline = pipelines.create(&client, &json!({"ref": "main"}), None).await?;
//! for job in pipeline.jobs()?.list_all(&client, None, None).await? {
//!     println!("{:?}: {:?}", job.name, job.status);
//! }
//! ```
//!
//! # Pipeline Schedules
//!
//! ```rust,ignore
//! use gitlab_api::rest::resources::{PipelineScheduleData, ProjectPipelineScheduleManager};
//! use gitlab_api::rest::CreateManager;
//!
//! let schedules = ProjectPipelineScheduleManager::new(5);
//! let mut schedule = schedules
//!     .create(&client, &PipelineScheduleData::new("Nightly", "main", "0 2 * * *"), None)
//!     .await?;
//!
//! schedule.take_ownership(&client, None).await?;
//! schedule.play(&client, None).await?;
//! ```

mod pipeline_schedules;
mod pipelines;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use pipeline_schedules::{
    PipelineSchedule, PipelineScheduleData, PipelineScheduleListFilters, PipelineScheduleScope,
    PipelineScheduleVariable, ProjectPipelineSchedule, ProjectPipelineScheduleManager,
    ProjectPipelineScheduleVariable, ProjectPipelineScheduleVariableManager,
    ScheduleVariableData,
};
pub use pipelines::{
    BridgeListFilters, JobListFilters, Pipeline, PipelineBridge, PipelineCreateData, PipelineJob,
    PipelineListFilters, PipelineOrderBy, PipelineScope, PipelineVariable, ProjectPipeline,
    ProjectPipelineBridge, ProjectPipelineBridgeManager, ProjectPipelineJob,
    ProjectPipelineJobManager, ProjectPipelineManager, ProjectPipelineVariable,
    ProjectPipelineVariableManager, SortOrder,
};

/// The status of a pipeline or a job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    /// Created, not yet processed.
    Created,
    /// Waiting for a resource group to become available.
    WaitingForResource,
    /// A runner is preparing the environment.
    Preparing,
    /// Queued for a runner.
    Pending,
    /// Running.
    Running,
    /// Finished successfully.
    Success,
    /// Finished with a failure.
    Failed,
    /// Cancellation requested and in progress.
    Canceling,
    /// Canceled.
    Canceled,
    /// Skipped.
    Skipped,
    /// Waiting for a manual action.
    Manual,
    /// Delayed until a scheduled time.
    Scheduled,
    /// A status this version of the crate does not know about.
    #[serde(other)]
    Unknown,
}

/// The kind of a CI/CD variable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    /// Exposed as an environment variable.
    #[default]
    EnvVar,
    /// Written to a file whose path is exposed as the variable.
    File,
}

/// A filter value that is either a single item or a list.
///
/// A single item is sent as `key=value`; a list is sent as repeated
/// `key[]=value` parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// Several values.
    Many(Vec<T>),
}

/// The user embedded in pipelines, jobs and schedules.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserSummary {
    /// The user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The account state, e.g. "active".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// The avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// The profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

/// The short form of a pipeline, as embedded in jobs and schedules.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    /// The pipeline ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The project-scoped pipeline ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iid: Option<u64>,

    /// The project ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// The commit SHA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,

    /// The branch or tag.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,

    /// The pipeline status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PipelineStatus>,

    /// What triggered the pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// When the pipeline was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the pipeline was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// The pipeline page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

/// Presentation details of a status, as shown in the GitLab UI.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DetailedStatus {
    /// The icon name, e.g. "`status_success`".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// The short status text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// The status label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The status group, e.g. "success".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// The tooltip text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Whether a details page exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_details: Option<bool>,

    /// The path of the details page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_path: Option<String>,

    /// The illustration shown on empty states.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illustration: Option<Value>,

    /// The favicon path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    /// Attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
