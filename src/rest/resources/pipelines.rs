//! Pipeline resources.
//!
//! - [`ProjectPipelineManager`]: list, get, create and delete pipelines of a
//!   project. Records support [`ProjectPipeline::cancel`],
//!   [`ProjectPipeline::retry`] and expose nested managers for their jobs,
//!   bridges and variables.
//! - [`ProjectPipelineJobManager`], [`ProjectPipelineBridgeManager`],
//!   [`ProjectPipelineVariableManager`]: read-only listings scoped to one
//!   pipeline.
//!
//! New pipelines are posted to the singular `/projects/{project_id}/pipeline`
//! endpoint, while everything else uses `/projects/{project_id}/pipelines`.
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlab_api::rest::resources::{
//!     JobListFilters, OneOrMany, PipelineCreateData, PipelineStatus, ProjectPipelineManager,
//! };
//! use gitlab_api::rest::{CreateManager, ListManager};
//!
//! let manager = ProjectPipelineManager::new(5);
//! let pipeline = manager
//!     .create(&client, &PipelineCreateData::new("main"), None)
//!     .await?;
//!
//! let filters = JobListFilters {
//!     scope: Some(OneOrMany::One(PipelineStatus::Failed)),
//!     ..Default::default()
//! };
//! let failed = pipeline.jobs()?.list(&client, Some(&filters), None).await?;
//! if !failed.is_empty() {
//!     pipeline.retry(&client, None).await?;
//! }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::RestClient;
use crate::rest::{
    build_path, CreateManager, DeleteManager, GetManager, ListManager, RequestOptions,
    RequiredOptional, ResourceError, ResourceId, ResourceOperation, RestManager, RestObject,
    RestResource,
};

use super::{DetailedStatus, OneOrMany, PipelineStatus, PipelineSummary, UserSummary, VariableType};

// ============================================================================
// Records
// ============================================================================

/// A CI/CD pipeline.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Pipeline {
    /// The pipeline ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The project-scoped pipeline ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iid: Option<u64>,

    /// The project ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// The pipeline status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PipelineStatus>,

    /// What triggered the pipeline, e.g. "push" or "schedule".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// The branch or tag the pipeline runs for.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,

    /// The commit SHA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,

    /// The SHA of the previous commit on the ref.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_sha: Option<String>,

    /// Whether the ref is a tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<bool>,

    /// Configuration errors, if the pipeline could not be created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaml_errors: Option<String>,

    /// The user who triggered the pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,

    /// The pipeline page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,

    /// When the pipeline was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the pipeline was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the first job started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the pipeline finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,

    /// When the commit was authored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed_at: Option<DateTime<Utc>>,

    /// Run time in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Time spent queued, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued_duration: Option<f64>,

    /// The test coverage, e.g. "30.0".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,

    /// Presentation details of the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<DetailedStatus>,

    /// Attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RestResource for Pipeline {
    const NAME: &'static str = "ProjectPipeline";

    fn get_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

/// A job of a pipeline.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PipelineJob {
    /// The job ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The job name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The stage the job belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    /// The job status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PipelineStatus>,

    /// The branch or tag.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,

    /// Whether the ref is a tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<bool>,

    /// The test coverage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,

    /// Whether a failure of this job lets the pipeline pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_failure: Option<bool>,

    /// When the job was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the job started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the job finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,

    /// Run time in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Time spent queued, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued_duration: Option<f64>,

    /// The user who started the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,

    /// The commit the job runs for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<Value>,

    /// The pipeline the job belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<PipelineSummary>,

    /// The job page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,

    /// The artifacts produced by the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Value>,

    /// The runner that picked the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner: Option<Value>,

    /// Why the job failed, e.g. "`script_failure`".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    /// Attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RestResource for PipelineJob {
    const NAME: &'static str = "ProjectPipelineJob";

    fn get_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

/// A bridge (trigger) job of a pipeline.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PipelineBridge {
    /// The bridge job ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The job name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The stage the job belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    /// The job status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PipelineStatus>,

    /// The branch or tag.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,

    /// Whether the ref is a tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<bool>,

    /// The test coverage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,

    /// Whether a failure of this job lets the pipeline pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_failure: Option<bool>,

    /// When the job was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the job started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the job finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,

    /// Run time in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Time spent queued, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued_duration: Option<f64>,

    /// The user who started the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,

    /// The commit the job runs for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<Value>,

    /// The pipeline the job belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<PipelineSummary>,

    /// The job page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,

    /// Why the job failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    /// The pipeline this bridge triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downstream_pipeline: Option<PipelineSummary>,

    /// Attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RestResource for PipelineBridge {
    const NAME: &'static str = "ProjectPipelineBridge";

    fn get_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

/// A variable a pipeline was run with. Identified by its key.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PipelineVariable {
    /// The variable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The variable value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The variable kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<VariableType>,

    /// Attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PipelineVariable {
    /// Creates an environment variable.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

impl RestResource for PipelineVariable {
    const NAME: &'static str = "ProjectPipelineVariable";
    const ID_ATTR: &'static str = "key";

    fn get_id(&self) -> Option<String> {
        self.key.clone()
    }
}

// ============================================================================
// Request data and filters
// ============================================================================

/// Data for creating a pipeline.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PipelineCreateData {
    /// The branch or tag to run the pipeline for. Required.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,

    /// Variables available to the pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<PipelineVariable>>,
}

impl PipelineCreateData {
    /// Creates pipeline data for the given ref.
    #[must_use]
    pub fn new(ref_: impl Into<String>) -> Self {
        Self {
            ref_: Some(ref_.into()),
            variables: None,
        }
    }

    /// Adds a variable.
    #[must_use]
    pub fn variable(mut self, variable: PipelineVariable) -> Self {
        self.variables.get_or_insert_with(Vec::new).push(variable);
        self
    }
}

/// The `scope` filter of a pipeline listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PipelineScope {
    /// Running pipelines.
    Running,
    /// Pending pipelines.
    Pending,
    /// Finished pipelines.
    Finished,
    /// Pipelines of branches.
    Branches,
    /// Pipelines of tags.
    Tags,
}

/// The `order_by` filter of a pipeline listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PipelineOrderBy {
    /// Order by ID.
    Id,
    /// Order by status.
    Status,
    /// Order by ref.
    Ref,
    /// Order by last update.
    UpdatedAt,
    /// Order by the triggering user.
    UserId,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Filters for listing pipelines.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineListFilters {
    /// Restrict to a scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<PipelineScope>,

    /// Restrict to a status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PipelineStatus>,

    /// Restrict to a branch or tag.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,

    /// Restrict to a commit SHA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,

    /// Only pipelines with (or without) configuration errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaml_errors: Option<bool>,

    /// Restrict to pipelines with this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Restrict to pipelines triggered by this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Restrict to a trigger source, e.g. "schedule".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Only pipelines updated after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,

    /// Only pipelines updated before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_before: Option<DateTime<Utc>>,

    /// The ordering field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<PipelineOrderBy>,

    /// The sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

/// Filters for listing the jobs of a pipeline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobListFilters {
    /// Restrict to one or several statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<OneOrMany<PipelineStatus>>,

    /// Include retried jobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_retried: Option<bool>,
}

/// Filters for listing the bridges of a pipeline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BridgeListFilters {
    /// Restrict to one or several statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<OneOrMany<PipelineStatus>>,
}

// ============================================================================
// Managers
// ============================================================================

/// Manages the pipelines of a project.
#[derive(Debug, Clone)]
pub struct ProjectPipelineManager {
    project_id: ResourceId,
    path: String,
    create_path: String,
}

impl ProjectPipelineManager {
    const PATH: &'static str = "/projects/{project_id}/pipelines";
    const CREATE_PATH: &'static str = "/projects/{project_id}/pipeline";

    /// Creates a manager for the pipelines of a project.
    ///
    /// `project_id` is a numeric ID or a namespaced path such as
    /// `group/project`.
    #[must_use]
    pub fn new(project_id: impl Into<ResourceId>) -> Self {
        let project_id = project_id.into();
        let (path, create_path) = {
            let ids = HashMap::from([("project_id", &project_id)]);
            (
                build_path(Self::PATH, &ids),
                build_path(Self::CREATE_PATH, &ids),
            )
        };
        Self {
            project_id,
            path,
            create_path,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn project_id(&self) -> &ResourceId {
        &self.project_id
    }
}

impl RestManager for ProjectPipelineManager {
    type Object = Pipeline;

    fn path(&self) -> &str {
        &self.path
    }
}

impl ListManager for ProjectPipelineManager {
    type Filters = PipelineListFilters;
}

impl GetManager for ProjectPipelineManager {}

impl CreateManager for ProjectPipelineManager {
    const CREATE_ATTRS: RequiredOptional = RequiredOptional::new(&["ref"], &["variables"]);

    fn create_path(&self) -> &str {
        &self.create_path
    }
}

impl DeleteManager for ProjectPipelineManager {}

/// Generates a read-only manager scoped to one pipeline.
macro_rules! pipeline_child_manager {
    ($(#[$meta:meta])* $manager:ident, $object:ty, $filters:ty, $template:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $manager {
            project_id: ResourceId,
            pipeline_id: ResourceId,
            path: String,
        }

        impl $manager {
            /// Creates a manager scoped to a pipeline of a project.
            #[must_use]
            pub fn new(
                project_id: impl Into<ResourceId>,
                pipeline_id: impl Into<ResourceId>,
            ) -> Self {
                let project_id = project_id.into();
                let pipeline_id = pipeline_id.into();
                let path = build_path(
                    $template,
                    &HashMap::from([("project_id", &project_id), ("pipeline_id", &pipeline_id)]),
                );
                Self {
                    project_id,
                    pipeline_id,
                    path,
                }
            }

            /// Returns the project identifier.
            #[must_use]
            pub const fn project_id(&self) -> &ResourceId {
                &self.project_id
            }

            /// Returns the pipeline identifier.
            #[must_use]
            pub const fn pipeline_id(&self) -> &ResourceId {
                &self.pipeline_id
            }
        }

        impl RestManager for $manager {
            type Object = $object;

            fn path(&self) -> &str {
                &self.path
            }
        }

        impl ListManager for $manager {
            type Filters = $filters;
        }
    };
}

pipeline_child_manager!(
    /// Lists the jobs of a pipeline.
    ProjectPipelineJobManager,
    PipelineJob,
    JobListFilters,
    "/projects/{project_id}/pipelines/{pipeline_id}/jobs"
);

pipeline_child_manager!(
    /// Lists the bridge jobs of a pipeline.
    ProjectPipelineBridgeManager,
    PipelineBridge,
    BridgeListFilters,
    "/projects/{project_id}/pipelines/{pipeline_id}/bridges"
);

pipeline_child_manager!(
    /// Lists the variables of a pipeline.
    ProjectPipelineVariableManager,
    PipelineVariable,
    (),
    "/projects/{project_id}/pipelines/{pipeline_id}/variables"
);

/// A pipeline bound to its manager.
pub type ProjectPipeline = RestObject<ProjectPipelineManager>;

/// A pipeline job bound to its manager.
pub type ProjectPipelineJob = RestObject<ProjectPipelineJobManager>;

/// A bridge job bound to its manager.
pub type ProjectPipelineBridge = RestObject<ProjectPipelineBridgeManager>;

/// A pipeline variable bound to its manager.
pub type ProjectPipelineVariable = RestObject<ProjectPipelineVariableManager>;

// ============================================================================
// Actions and nested managers
// ============================================================================

impl RestObject<ProjectPipelineManager> {
    /// Cancels the pipeline.
    ///
    /// Local attributes are left untouched; call `refresh` to see the new
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PipelineCancel`] on a non-2xx response.
    pub async fn cancel(
        &self,
        client: &RestClient,
        options: Option<&RequestOptions>,
    ) -> Result<(), ResourceError> {
        self.post_action(client, ResourceOperation::Cancel, options)
            .await?;
        Ok(())
    }

    /// Retries the failed jobs of the pipeline.
    ///
    /// Local attributes are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PipelineRetry`] on a non-2xx response.
    pub async fn retry(
        &self,
        client: &RestClient,
        options: Option<&RequestOptions>,
    ) -> Result<(), ResourceError> {
        self.post_action(client, ResourceOperation::Retry, options)
            .await?;
        Ok(())
    }

    /// Returns the manager of this pipeline's jobs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] when the pipeline has
    /// no ID.
    pub fn jobs(&self) -> Result<ProjectPipelineJobManager, ResourceError> {
        let pipeline_id = self.require_id("jobs")?;
        Ok(ProjectPipelineJobManager::new(
            self.manager().project_id(),
            pipeline_id,
        ))
    }

    /// Returns the manager of this pipeline's bridge jobs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] when the pipeline has
    /// no ID.
    pub fn bridges(&self) -> Result<ProjectPipelineBridgeManager, ResourceError> {
        let pipeline_id = self.require_id("bridges")?;
        Ok(ProjectPipelineBridgeManager::new(
            self.manager().project_id(),
            pipeline_id,
        ))
    }

    /// Returns the manager of this pipeline's variables.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] when the pipeline has
    /// no ID.
    pub fn variables(&self) -> Result<ProjectPipelineVariableManager, ResourceError> {
        let pipeline_id = self.require_id("variables")?;
        Ok(ProjectPipelineVariableManager::new(
            self.manager().project_id(),
            pipeline_id,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::to_attributes;
    use serde_json::json;

    #[test]
    fn test_manager_paths() {
        let manager = ProjectPipelineManager::new(5);
        assert_eq!(manager.path(), "/projects/5/pipelines");
        assert_eq!(manager.create_path(), "/projects/5/pipeline");
        assert_eq!(
            manager.create_path(),
            &manager.path()[..manager.path().len() - 1]
        );
    }

    #[test]
    fn test_namespaced_project_is_encoded() {
        let manager = ProjectPipelineManager::new("group/project");
        assert_eq!(manager.path(), "/projects/group%2Fproject/pipelines");
        assert_eq!(manager.project_id().as_raw(), "group/project");
    }

    #[test]
    fn test_child_manager_paths() {
        assert_eq!(
            ProjectPipelineJobManager::new(5, 12).path(),
            "/projects/5/pipelines/12/jobs"
        );
        assert_eq!(
            ProjectPipelineBridgeManager::new(5, 12).path(),
            "/projects/5/pipelines/12/bridges"
        );
        assert_eq!(
            ProjectPipelineVariableManager::new(5, 12).path(),
            "/projects/5/pipelines/12/variables"
        );
    }

    #[test]
    fn test_nested_managers_from_pipeline() {
        let pipeline: ProjectPipeline = RestObject::new(
            Pipeline {
                id: Some(46),
                ..Default::default()
            },
            ProjectPipelineManager::new("group/project"),
        );

        let jobs = pipeline.jobs().unwrap();
        assert_eq!(jobs.path(), "/projects/group%2Fproject/pipelines/46/jobs");
        assert_eq!(jobs.pipeline_id().as_raw(), "46");
    }

    #[test]
    fn test_nested_manager_requires_pipeline_id() {
        let pipeline: ProjectPipeline =
            RestObject::new(Pipeline::default(), ProjectPipelineManager::new(5));

        let result = pipeline.variables();
        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed {
                resource: "ProjectPipeline",
                operation: "variables",
                id_attr: "id",
            })
        ));
    }

    #[test]
    fn test_pipeline_deserialization() {
        let pipeline: Pipeline = serde_json::from_value(json!({
            "id": 46,
            "iid": 11,
            "project_id": 1,
            "status": "success",
            "source": "push",
            "ref": "main",
            "sha": "a91957a858320c0e17f3a0eca7cfacbff50ea29a",
            "tag": false,
            "created_at": "2016-08-11T11:28:34.085Z",
            "duration": 34,
            "coverage": "30.0",
            "user": {"id": 1, "username": "root", "name": "Administrator"},
            "detailed_status": {"icon": "status_success", "group": "success"},
            "archived": false
        }))
        .unwrap();

        assert_eq!(pipeline.id, Some(46));
        assert_eq!(pipeline.status, Some(PipelineStatus::Success));
        assert_eq!(pipeline.ref_.as_deref(), Some("main"));
        assert_eq!(pipeline.duration, Some(34.0));
        assert_eq!(pipeline.user.unwrap().username.as_deref(), Some("root"));
        assert_eq!(pipeline.extra["archived"], false);
    }

    #[test]
    fn test_pipeline_variable_uses_key_as_id() {
        let variable = PipelineVariable::new("RUN_NIGHTLY_BUILD", "true");
        assert_eq!(variable.get_id(), Some("RUN_NIGHTLY_BUILD".to_string()));
        assert_eq!(PipelineVariable::ID_ATTR, "key");
    }

    #[test]
    fn test_create_data_serialization() {
        let data = PipelineCreateData::new("main")
            .variable(PipelineVariable::new("DEPLOY", "staging"));

        let attrs = to_attributes(&data, Pipeline::NAME).unwrap();
        assert_eq!(
            serde_json::Value::Object(attrs),
            json!({
                "ref": "main",
                "variables": [{"key": "DEPLOY", "value": "staging"}]
            })
        );
    }

    #[test]
    fn test_create_attrs_require_ref() {
        let attrs = to_attributes(&PipelineCreateData::default(), Pipeline::NAME).unwrap();
        let missing = ProjectPipelineManager::CREATE_ATTRS.missing(&attrs, None);
        assert_eq!(missing, vec!["ref"]);
    }
}
