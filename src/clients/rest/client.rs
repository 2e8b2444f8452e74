//! REST client implementation for the GitLab v4 API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with path normalization and the retry budget taken from configuration.

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse, QueryParams};
use crate::config::{ApiVersion, GitlabConfig};

/// REST API client for GitLab.
///
/// Provides `get`, `post`, `put` and `delete` relative to
/// `{host}/api/v4`. Resource managers take a `&RestClient` on every
/// operation, so a single client can be shared by any number of managers and
/// tasks.
///
/// `RestClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use gitlab_api::{GitlabConfig, HostUrl, RestClient};
///
/// let config = GitlabConfig::builder()
///     .host(HostUrl::new("https://gitlab.example.com")?)
///     .build()?;
/// let client = RestClient::new(&config);
///
/// let response = client.get("projects/42/pipelines", None).await?;
/// let body = serde_json::json!({"ref": "main"});
/// let response = client.post("projects/42/pipeline", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    tries: u32,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    #[must_use]
    pub fn new(config: &GitlabConfig) -> Self {
        let api_version = config.api_version();
        let http_client = HttpClient::new(api_version.base_path(), config);

        tracing::debug!(
            host = %config.host(),
            api_version = %api_version,
            "Created GitLab REST client"
        );

        Self {
            http_client,
            api_version,
            tries: config.tries(),
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path).tries(self.tries);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Strips leading and trailing slashes; an empty result is rejected.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let normalized = path.trim().trim_matches('/');

    if normalized.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(normalized.to_string())
}
