//! HTTP client types for GitLab API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client for API communication
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response, with [`PaginationInfo`] and [`RateLimit`]
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: content types for request bodies
//! - [`rest::RestClient`]: higher-level REST API client
//!
//! # Retry Behavior
//!
//! - **429 (Too Many Requests)**: retries after `Retry-After` seconds, or 1 second
//! - **5xx (Server Error)**: retries after a fixed 1-second delay
//! - **Other errors (4xx)**: returned immediately
//!
//! The default `tries` is 1, meaning no automatic retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder, QueryParams};
pub use http_response::{HttpResponse, PaginationInfo, RateLimit};

pub use rest::{RestClient, RestError};
