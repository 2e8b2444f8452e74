//! REST resource infrastructure for the GitLab API.
//!
//! This module provides the building blocks that resource bindings are made
//! of:
//!
//! - **Manager traits** ([`RestManager`], [`ListManager`], [`GetManager`],
//!   [`CreateManager`], [`UpdateManager`], [`DeleteManager`]): CRUD
//!   operations on one collection path, as default methods
//! - **[`RestObject<M>`]**: A record bound to its manager, with dirty
//!   tracking, `save`, `refresh` and `delete`
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper carrying pagination
//!   and rate-limit metadata
//! - **[`RequiredOptional`]**: Attribute declarations checked before create
//!   and update requests
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! Concrete bindings (pipelines, pipeline schedules) live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlab_api::rest::resources::ProjectPipelineManager;
//! use gitlab_api::rest::{GetManager, ListManager, RequestOptions};
//!
//! let pipelines = ProjectPipelineManager::new(5);
//!
//! // One page, with GitLab's offset pagination headers
//! let page = pipelines
//!     .list(&client, None, Some(&RequestOptions::new().per_page(50)))
//!     .await?;
//! for pipeline in page.iter() {
//!     println!("{:?} {:?}", pipeline.id, pipeline.status);
//! }
//!
//! // A single record, then an action on it
//! let pipeline = pipelines.get(&client, 1234, None).await?;
//! pipeline.retry(&client, None).await?;
//! ```

mod attrs;
mod errors;
mod ids;
mod manager;
mod object;
mod options;
mod path;
mod response;

pub mod resources;

pub use attrs::{to_attributes, RequiredOptional};
pub use errors::ResourceError;
pub use ids::ResourceId;
pub use manager::{
    CreateManager, DeleteManager, GetManager, ListManager, RestManager, RestResource,
    UpdateManager,
};
pub use object::RestObject;
pub use options::RequestOptions;
pub use path::{build_path, ResourceOperation};
pub use response::ResourceResponse;

pub(crate) use options::options_query;
