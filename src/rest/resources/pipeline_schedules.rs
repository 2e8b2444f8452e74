//! Pipeline schedule resources.
//!
//! [`ProjectPipelineScheduleManager`] supports the full set of CRUD
//! operations. Schedule records add two actions:
//!
//! - [`ProjectPipelineSchedule::take_ownership`] makes the calling user the
//!   owner of the schedule
//! - [`ProjectPipelineSchedule::play`] runs the schedule immediately without
//!   affecting its next scheduled run
//!
//! Both merge the server's reply into the local record.
//!
//! Variables of a schedule are managed through
//! [`ProjectPipelineScheduleVariableManager`], obtained from
//! [`ProjectPipelineSchedule::variables`]. They are addressed by key.
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlab_api::rest::resources::{ProjectPipelineScheduleManager, ScheduleVariableData};
//! use gitlab_api::rest::{CreateManager, GetManager};
//!
//! let schedules = ProjectPipelineScheduleManager::new(5);
//! let mut schedule = schedules.get(&client, 13, None).await?;
//!
//! schedule.cron = Some("0 4 * * *".to_string());
//! schedule.save(&client, None).await?;
//!
//! let mut variable = schedule
//!     .variables()?
//!     .create(&client, &ScheduleVariableData::new("TARGET", "staging"), None)
//!     .await?;
//! variable.value = Some("production".to_string());
//! variable.save(&client, None).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::RestClient;
use crate::rest::{
    build_path, CreateManager, DeleteManager, GetManager, ListManager, RequestOptions,
    RequiredOptional, ResourceError, ResourceId, ResourceOperation, RestManager, RestObject,
    RestResource, UpdateManager,
};

use super::{PipelineSummary, UserSummary, VariableType};

/// A pipeline schedule.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PipelineSchedule {
    /// The schedule ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The schedule description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The branch or tag the scheduled pipelines run for.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,

    /// The cron expression, e.g. "0 1 * * *".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,

    /// The time zone of the cron expression, e.g. "UTC".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_timezone: Option<String>,

    /// When the schedule runs next.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_run_at: Option<DateTime<Utc>>,

    /// Whether the schedule is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// When the schedule was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the schedule was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// The schedule owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserSummary>,

    /// The last pipeline the schedule started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_pipeline: Option<PipelineSummary>,

    /// The schedule variables, included when fetching a single schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<PipelineScheduleVariable>>,

    /// Attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RestResource for PipelineSchedule {
    const NAME: &'static str = "ProjectPipelineSchedule";

    fn get_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

/// A variable of a pipeline schedule. Identified by its key.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PipelineScheduleVariable {
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

impl RestResource for PipelineScheduleVariable {
    const NAME: &'static str = "ProjectPipelineScheduleVariable";
    const ID_ATTR: &'static str = "key";

    fn get_id(&self) -> Option<String> {
        self.key.clone()
    }
}

/// Data for creating or updating a pipeline schedule.
///
/// Creating requires `description`, `ref` and `cron`. Every field is
/// optional on update; unset fields are left out of the request.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PipelineScheduleData {
    /// The schedule description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The branch or tag.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,

    /// The cron expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,

    /// The cron time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_timezone: Option<String>,

    /// Whether the schedule is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl PipelineScheduleData {
    /// Creates data with the attributes required on create.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        ref_: impl Into<String>,
        cron: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            ref_: Some(ref_.into()),
            cron: Some(cron.into()),
            ..Default::default()
        }
    }

    /// Sets the cron time zone.
    #[must_use]
    pub fn cron_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.cron_timezone = Some(timezone.into());
        self
    }

    /// Sets whether the schedule is active.
    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}

/// Data for creating or updating a schedule variable.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ScheduleVariableData {
    /// The variable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The variable value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The variable kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<VariableType>,
}

impl ScheduleVariableData {
    /// Creates an environment variable.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            variable_type: None,
        }
    }

    /// Sets the variable kind.
    #[must_use]
    pub const fn variable_type(mut self, variable_type: VariableType) -> Self {
        self.variable_type = Some(variable_type);
        self
    }
}

/// The `scope` filter of a schedule listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PipelineScheduleScope {
    /// Active schedules.
    Active,
    /// Inactive schedules.
    Inactive,
}

/// Filters for listing pipeline schedules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineScheduleListFilters {
    /// Restrict to active or inactive schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<PipelineScheduleScope>,
}

/// Manages the pipeline schedules of a project.
#[derive(Debug, Clone)]
pub struct ProjectPipelineScheduleManager {
    project_id: ResourceId,
    path: String,
}

impl ProjectPipelineScheduleManager {
    const PATH: &'static str = "/projects/{project_id}/pipeline_schedules";

    /// Creates a manager for the pipeline schedules of a project.
    #[must_use]
    pub fn new(project_id: impl Into<ResourceId>) -> Self {
        let project_id = project_id.into();
        let path = build_path(Self::PATH, &HashMap::from([("project_id", &project_id)]));
        Self { project_id, path }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn project_id(&self) -> &ResourceId {
        &self.project_id
    }
}

impl RestManager for ProjectPipelineScheduleManager {
    type Object = PipelineSchedule;

    fn path(&self) -> &str {
        &self.path
    }
}

impl ListManager for ProjectPipelineScheduleManager {
    type Filters = PipelineScheduleListFilters;
}

impl GetManager for ProjectPipelineScheduleManager {}

impl CreateManager for ProjectPipelineScheduleManager {
    const CREATE_ATTRS: RequiredOptional = RequiredOptional::new(
        &["description", "ref", "cron"],
        &["cron_timezone", "active"],
    );
}

impl UpdateManager for ProjectPipelineScheduleManager {
    const UPDATE_ATTRS: RequiredOptional = RequiredOptional::new(
        &[],
        &["description", "ref", "cron", "cron_timezone", "active"],
    );
}

impl DeleteManager for ProjectPipelineScheduleManager {}

/// Manages the variables of a pipeline schedule.
#[derive(Debug, Clone)]
pub struct ProjectPipelineScheduleVariableManager {
    project_id: ResourceId,
    pipeline_schedule_id: ResourceId,
    path: String,
}

impl ProjectPipelineScheduleVariableManager {
    const PATH: &'static str =
        "/projects/{project_id}/pipeline_schedules/{pipeline_schedule_id}/variables";

    /// Creates a manager scoped to a schedule of a project.
    #[must_use]
    pub fn new(
        project_id: impl Into<ResourceId>,
        pipeline_schedule_id: impl Into<ResourceId>,
    ) -> Self {
        let project_id = project_id.into();
        let pipeline_schedule_id = pipeline_schedule_id.into();
        let path = build_path(
            Self::PATH,
            &HashMap::from([
                ("project_id", &project_id),
                ("pipeline_schedule_id", &pipeline_schedule_id),
            ]),
        );
        Self {
            project_id,
            pipeline_schedule_id,
            path,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn project_id(&self) -> &ResourceId {
        &self.project_id
    }

    /// Returns the schedule identifier.
    #[must_use]
    pub const fn pipeline_schedule_id(&self) -> &ResourceId {
        &self.pipeline_schedule_id
    }
}

impl RestManager for ProjectPipelineScheduleVariableManager {
    type Object = PipelineScheduleVariable;

    fn path(&self) -> &str {
        &self.path
    }
}

impl CreateManager for ProjectPipelineScheduleVariableManager {
    const CREATE_ATTRS: RequiredOptional =
        RequiredOptional::new(&["key", "value"], &["variable_type"]);
}

impl UpdateManager for ProjectPipelineScheduleVariableManager {
    const UPDATE_ATTRS: RequiredOptional =
        RequiredOptional::new(&["key", "value"], &["variable_type"]);
}

impl DeleteManager for ProjectPipelineScheduleVariableManager {}

/// A pipeline schedule bound to its manager.
pub type ProjectPipelineSchedule = RestObject<ProjectPipelineScheduleManager>;

/// A schedule variable bound to its manager.
pub type ProjectPipelineScheduleVariable = RestObject<ProjectPipelineScheduleVariableManager>;

impl RestObject<ProjectPipelineScheduleManager> {
    /// Makes the calling user the owner of the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Ownership`] on a non-2xx response.
    pub async fn take_ownership(
        &mut self,
        client: &RestClient,
        options: Option<&RequestOptions>,
    ) -> Result<(), ResourceError> {
        let reply = self
            .post_action(client, ResourceOperation::TakeOwnership, options)
            .await?;
        self.update_attrs(&reply)
    }

    /// Runs the schedule now and returns the server's reply.
    ///
    /// The next scheduled run is not affected.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PipelinePlay`] on a non-2xx response.
    pub async fn play(
        &mut self,
        client: &RestClient,
        options: Option<&RequestOptions>,
    ) -> Result<Value, ResourceError> {
        let reply = self
            .post_action(client, ResourceOperation::Play, options)
            .await?;
        self.update_attrs(&reply)?;
        Ok(reply)
    }

    /// Returns the manager of this schedule's variables.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] when the schedule has
    /// no ID.
    pub fn variables(&self) -> Result<ProjectPipelineScheduleVariableManager, ResourceError> {
        let schedule_id = self.require_id("variables")?;
        Ok(ProjectPipelineScheduleVariableManager::new(
            self.manager().project_id(),
            schedule_id,
        ))
    }
}
