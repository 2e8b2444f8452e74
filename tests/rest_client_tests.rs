//! Integration tests for the REST API client functionality.
//!
//! These tests verify request headers, path handling, pagination headers
//! and the retry behavior of the REST client against a mock server.

use std::time::Duration;

use gitlab_api::clients::{HttpError, HttpResponseError, RestClient, RestError};
use gitlab_api::{AccessToken, ApiVersion, Credentials, GitlabConfig, HostUrl};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, credentials: Credentials, tries: u32) -> GitlabConfig {
    GitlabConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .credentials(credentials)
        .user_agent_prefix("ci-dashboard/2.1")
        .timeout(Duration::from_secs(5))
        .tries(tries)
        .build()
        .unwrap()
}

fn private_token() -> Credentials {
    Credentials::PrivateToken(AccessToken::new("glpat-test").unwrap())
}

// ============================================================================
// RestClient Construction Tests
// ============================================================================

#[tokio::test]
async fn test_rest_client_uses_v4() {
    let server = MockServer::start().await;
    let client = RestClient::new(&config_for(&server, private_token(), 1));

    assert_eq!(client.api_version(), ApiVersion::V4);
    assert_eq!(client.http_client().base_path(), "/api/v4");
    assert_eq!(client.http_client().base_uri(), server.uri());
}

#[test]
fn test_rest_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_get_sends_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/5/pipelines"))
        .and(header("PRIVATE-TOKEN", "glpat-test"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, private_token(), 1));
    let response = client.get("projects/5/pipelines", None).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!([]));

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0]
        .headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(user_agent.starts_with("ci-dashboard/2.1 | gitlab-api-rust v"));
}

#[tokio::test]
async fn test_job_token_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/5/pipelines/46"))
        .and(header("JOB-TOKEN", "ci-job-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 46})))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::JobToken(AccessToken::new("ci-job-token").unwrap());
    let client = RestClient::new(&config_for(&server, credentials, 1));

    client.get("/projects/5/pipelines/46/", None).await.unwrap();
}

#[tokio::test]
async fn test_oauth_bearer_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/5/pipeline_schedules"))
        .and(header("Authorization", "Bearer oauth-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::OAuthToken(AccessToken::new("oauth-token").unwrap());
    let client = RestClient::new(&config_for(&server, credentials, 1));

    client.get("projects/5/pipeline_schedules", None).await.unwrap();
}

#[tokio::test]
async fn test_repeated_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/5/pipelines/46/jobs"))
        .and(query_param("scope[]", "failed"))
        .and(query_param("scope[]", "success"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, private_token(), 1));
    let query = vec![
        ("scope[]".to_string(), "failed".to_string()),
        ("scope[]".to_string(), "success".to_string()),
    ];

    client
        .get("projects/5/pipelines/46/jobs", Some(query))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_empty_path_is_rejected() {
    let server = MockServer::start().await;
    let client = RestClient::new(&config_for(&server, private_token(), 1));

    let result = client.get(" / ", None).await;

    assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_with_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v4/projects/5/pipelines/46"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, private_token(), 1));
    let response = client.delete("projects/5/pipelines/46", None).await.unwrap();

    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_pagination_and_rate_limit_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/5/pipelines"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .insert_header("x-page", "2")
                .insert_header("x-per-page", "20")
                .insert_header("x-prev-page", "1")
                .insert_header("x-next-page", "3")
                .insert_header("x-total", "57")
                .insert_header("x-total-pages", "3")
                .insert_header("ratelimit-limit", "2000")
                .insert_header("ratelimit-remaining", "1999")
                .insert_header("x-request-id", "01HX"),
        )
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, private_token(), 1));
    let response = client.get("projects/5/pipelines", None).await.unwrap();

    assert_eq!(response.pagination.page, Some(2));
    assert_eq!(response.pagination.per_page, Some(20));
    assert_eq!(response.pagination.prev_page, Some(1));
    assert_eq!(response.pagination.next_page, Some(3));
    assert_eq!(response.pagination.total, Some(57));
    assert_eq!(response.pagination.total_pages, Some(3));

    let rate_limit = response.rate_limit.unwrap();
    assert_eq!(rate_limit.limit, 2000);
    assert_eq!(rate_limit.remaining, 1999);
    assert_eq!(response.request_id(), Some("01HX"));
}

// ============================================================================
// Error and Retry Tests
// ============================================================================

#[tokio::test]
async fn test_non_2xx_is_response_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"message": "403 Forbidden"}))
                .insert_header("x-request-id", "req-1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, private_token(), 3));
    let result = client.get("projects/5/pipelines", None).await;

    match result {
        Err(RestError::Http(HttpError::Response(HttpResponseError {
            code,
            message,
            error_reference,
        }))) => {
            assert_eq!(code, 403);
            assert_eq!(message, "403 Forbidden");
            assert_eq!(error_reference.as_deref(), Some("req-1"));
        }
        other => panic!("Expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_single_try_does_not_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, private_token(), 1));
    let result = client.get("projects/5/pipelines", None).await;

    assert!(matches!(
        result,
        Err(RestError::Http(HttpError::Response(HttpResponseError { code: 503, .. })))
    ));
}

#[tokio::test]
async fn test_rate_limited_request_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/5/pipelines"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"message": "Too Many Requests"}))
                .insert_header("retry-after", "0"),
        )
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/5/pipelines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, private_token(), 2));
    let response = client.get("projects/5/pipelines", None).await.unwrap();

    assert_eq!(response.body, json!([{"id": 1}]));
}

#[tokio::test]
async fn test_retries_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"message": "Too Many Requests"}))
                .insert_header("retry-after", "0"),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, private_token(), 3));
    let result = client
        .post("projects/5/pipeline", json!({"ref": "main"}), None)
        .await;

    match result {
        Err(RestError::Http(HttpError::MaxRetries(error))) => {
            assert_eq!(error.code, 429);
            assert_eq!(error.tries, 3);
        }
        other => panic!("Expected MaxRetries, got {other:?}"),
    }
}
