//! # GitLab API Rust SDK
//!
//! A Rust SDK for the GitLab CI/CD REST API, providing type-safe
//! configuration, token handling, an async HTTP client and bindings for
//! pipelines and pipeline schedules.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`GitlabConfig`] and [`GitlabConfigBuilder`]
//! - Validated newtypes for tokens and instance URLs
//! - Private, OAuth and CI job token authentication via [`Credentials`]
//! - An async REST client with opt-in retries and GitLab pagination headers
//! - Managers for pipelines, pipeline jobs, bridges and variables
//! - Managers for pipeline schedules and their variables, including the
//!   `take_ownership` and `play` actions
//!
//! ## Quick Start
//!
//! ```rust
//! use gitlab_api::{AccessToken, Credentials, GitlabConfig, HostUrl, RestClient};
//!
//! let config = GitlabConfig::builder()
//!     .host(HostUrl::new("https://gitlab.example.com").unwrap())
//!     .credentials(Credentials::PrivateToken(AccessToken::new("glpat-token").unwrap()))
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config);
//! ```
//!
//! ## Working with Pipelines
//!
//! ```rust,ignore
//! use gitlab_api::rest::resources::{PipelineCreateData, ProjectPipelineManager};
//! use gitlab_api::rest::{CreateManager, GetManager, ListManager, RequestOptions};
//!
//! let pipelines = ProjectPipelineManager::new("group/project");
//!
//! // Trigger a pipeline
//! let pipeline = pipelines
//!     .create(&client, &PipelineCreateData::new("main"), None)
//!     .await?;
//!
//! // Inspect its jobs
//! for job in pipeline.jobs()?.list_all(&client, None, None).await? {
//!     println!("{:?} {:?}", job.name, job.status);
//! }
//!
//! // Act on behalf of another user (administrators only)
//! let options = RequestOptions::new().sudo("deploy-bot");
//! pipeline.cancel(&client, Some(&options)).await?;
//! ```
//!
//! ## Working with Pipeline Schedules
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
//! schedule.active = Some(false);
//! schedule.save(&client, None).await?;
//! ```
//!
//! ## Error Handling
//!
//! Configuration errors are reported as [`ConfigError`], transport errors as
//! [`HttpError`], and resource operations return
//! [`ResourceError`](rest::ResourceError), whose variant names the operation
//! that failed.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction and required
//!   attributes are checked before any request is sent
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AccessToken, Credentials};
pub use config::{ApiVersion, GitlabConfig, GitlabConfigBuilder, HostUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, PaginationInfo,
    QueryParams, RateLimit, RestClient, RestError,
};

// Re-export resource types
pub use rest::resources::{
    ProjectPipeline, ProjectPipelineManager, ProjectPipelineSchedule,
    ProjectPipelineScheduleManager,
};
pub use rest::{RequestOptions, ResourceError};
