//! HTTP client for GitLab API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to a GitLab instance with opt-in retry handling.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::GitlabConfig;

/// Fixed retry wait time in seconds when no `Retry-After` is given.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the GitLab API.
///
/// The client handles:
/// - Base URI construction from the configured host
/// - Default headers including User-Agent and the credential header
/// - Retry logic for 429 and 5xx responses when `tries > 1`
/// - GitLab header parsing
///
/// `HttpClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use gitlab_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new("/api/v4", &config);
/// let request = HttpRequest::builder(HttpMethod::Get, "projects/42/pipelines")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://gitlab.example.com`).
    base_uri: String,
    /// Base path (e.g., `/api/v4`).
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured GitLab instance.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, which only
    /// happens when TLS initialization fails.
    #[must_use]
    pub fn new(base_path: impl Into<String>, config: &GitlabConfig) -> Self {
        let base_uri = config.host().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}gitlab-api-rust v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(credentials) = config.credentials() {
            let (name, value) = credentials.header();
            default_headers.insert(name.to_string(), value);
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path: base_path.into(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the GitLab API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - Retries are exhausted (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "Sending GitLab API request"
            );

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();
            let body = Self::parse_body(code, &body_text);

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let message = response.error_message();
            let error_reference = response.request_id().map(String::from);

            let should_retry = code == 429 || code >= 500;
            if !should_retry || tries >= request.tries {
                if should_retry && request.tries > 1 {
                    return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                        code,
                        tries: request.tries,
                        message,
                        error_reference,
                    }));
                }
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message,
                    error_reference,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                status = code,
                attempt = tries,
                max_tries = request.tries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying GitLab API request to {}",
                request.path
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses the body as JSON; non-JSON 5xx bodies are kept verbatim.
    fn parse_body(code: u16, body_text: &str) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(body_text).unwrap_or_else(|_| {
            if code >= 400 {
                serde_json::json!({ "raw_body": body_text })
            } else {
                serde_json::json!({})
            }
        })
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// 429 honours `Retry-After`; everything else waits [`RETRY_WAIT_TIME`].
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        if status == 429 {
            // Negative, NaN and out-of-range values fall back to the default wait.
            if let Some(delay) = response
                .retry_request_after
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            {
                return delay;
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AccessToken, Credentials};
    use crate::config::HostUrl;

    fn config_with(credentials: Option<Credentials>, prefix: Option<&str>) -> GitlabConfig {
        let mut builder =
            GitlabConfig::builder().host(HostUrl::new("https://gitlab.example.com").unwrap());
        if let Some(credentials) = credentials {
            builder = builder.credentials(credentials);
        }
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_client_construction_from_config() {
        let client = HttpClient::new("/api/v4", &config_with(None, None));

        assert_eq!(client.base_uri(), "https://gitlab.example.com");
        assert_eq!(client.base_path(), "/api/v4");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new("/api/v4", &config_with(None, None));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert_eq!(user_agent, &format!("gitlab-api-rust v{SDK_VERSION}"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new("/api/v4", &config_with(None, Some("Deployer/1.0")));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Deployer/1.0 | "));
        assert!(user_agent.contains("gitlab-api-rust"));
    }

    #[test]
    fn test_private_token_header_injection() {
        let credentials = Credentials::PrivateToken(AccessToken::new("glpat-abc").unwrap());
        let client = HttpClient::new("/api/v4", &config_with(Some(credentials), None));

        assert_eq!(
            client.default_headers().get("PRIVATE-TOKEN"),
            Some(&"glpat-abc".to_string())
        );
    }

    #[test]
    fn test_no_credential_header_when_anonymous() {
        let client = HttpClient::new("/api/v4", &config_with(None, None));
        let headers = client.default_headers();

        assert!(headers.get("PRIVATE-TOKEN").is_none());
        assert!(headers.get("Authorization").is_none());
        assert!(headers.get("JOB-TOKEN").is_none());
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new("/api/v4", &config_with(None, None));

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_parse_body_keeps_raw_error_text() {
        assert_eq!(
            HttpClient::parse_body(502, "Bad Gateway"),
            serde_json::json!({"raw_body": "Bad Gateway"})
        );
        assert_eq!(HttpClient::parse_body(204, ""), serde_json::json!({}));
        assert_eq!(
            HttpClient::parse_body(200, r#"[{"id":1}]"#),
            serde_json::json!([{"id": 1}])
        );
    }

    fn rate_limited(retry_after: &str) -> HttpResponse {
        let headers = HashMap::from([("retry-after".to_string(), vec![retry_after.to_string()])]);
        HttpResponse::new(429, headers, serde_json::json!({}))
    }

    #[test]
    fn test_retry_delay_honours_retry_after_on_429() {
        assert_eq!(
            HttpClient::calculate_retry_delay(&rate_limited("2.5"), 429),
            Duration::from_millis(2500)
        );
        assert_eq!(
            HttpClient::calculate_retry_delay(&rate_limited("0"), 429),
            Duration::ZERO
        );
        assert_eq!(
            HttpClient::calculate_retry_delay(&rate_limited("2.5"), 503),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_retry_delay_falls_back_for_unusable_retry_after() {
        for value in ["1e30", "-3", "NaN", "inf", "soon"] {
            assert_eq!(
                HttpClient::calculate_retry_delay(&rate_limited(value), 429),
                Duration::from_secs(RETRY_WAIT_TIME),
                "retry-after: {value}"
            );
        }
    }
}
