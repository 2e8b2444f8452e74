//! HTTP response types for the GitLab API SDK.
//!
//! This module provides the [`HttpResponse`] type along with the structured
//! views GitLab exposes through response headers: offset pagination
//! ([`PaginationInfo`]) and rate limiting ([`RateLimit`]).

use std::collections::HashMap;

/// Rate limit information parsed from the `RateLimit-*` headers.
///
/// GitLab.com and instances with rate limiting enabled report the request
/// budget of the current window on every response.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use gitlab_api::clients::RateLimit;
///
/// let mut headers = HashMap::new();
/// headers.insert("ratelimit-limit".to_string(), vec!["600".to_string()]);
/// headers.insert("ratelimit-remaining".to_string(), vec!["598".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 600);
/// assert_eq!(limit.remaining, 598);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the current window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
}

impl RateLimit {
    /// Builds rate limit information from lower-cased response headers.
    ///
    /// Returns `None` unless both headers are present and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let limit = header_value(headers, "ratelimit-limit")?.parse().ok()?;
        let remaining = header_value(headers, "ratelimit-remaining")?.parse().ok()?;
        Some(Self { limit, remaining })
    }
}

/// Offset pagination information parsed from the `X-*` pagination headers.
///
/// GitLab omits `x-total` and `x-total-pages` for very large collections, and
/// sends an empty `x-next-page` on the last page; both end up as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The current page (`x-page`).
    pub page: Option<u32>,
    /// Items per page (`x-per-page`).
    pub per_page: Option<u32>,
    /// The next page, if any (`x-next-page`).
    pub next_page: Option<u32>,
    /// The previous page, if any (`x-prev-page`).
    pub prev_page: Option<u32>,
    /// Total number of items (`x-total`).
    pub total: Option<u64>,
    /// Total number of pages (`x-total-pages`).
    pub total_pages: Option<u32>,
}

impl PaginationInfo {
    /// Parses pagination info from lower-cased response headers.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Self {
        Self {
            page: parse_header(headers, "x-page"),
            per_page: parse_header(headers, "x-per-page"),
            next_page: parse_header(headers, "x-next-page"),
            prev_page: parse_header(headers, "x-prev-page"),
            total: parse_header(headers, "x-total"),
            total_pages: parse_header(headers, "x-total-pages"),
        }
    }

    /// Returns `true` if another page follows this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }
}

fn header_value<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_header<T: std::str::FromStr>(
    headers: &HashMap<String, Vec<String>>,
    name: &str,
) -> Option<T> {
    header_value(headers, name).and_then(|value| value.parse().ok())
}

/// An HTTP response from the GitLab API.
///
/// Contains the status code, headers, body, and the parsed GitLab header
/// values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Offset pagination headers.
    pub pagination: PaginationInfo,
    /// Rate limit information (from `RateLimit-*` headers).
    pub rate_limit: Option<RateLimit>,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let pagination = PaginationInfo::from_headers(&headers);
        let rate_limit = RateLimit::from_headers(&headers);
        let retry_request_after = parse_header::<f64>(&headers, "retry-after");

        Self {
            code,
            headers,
            body,
            pagination,
            rate_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// GitLab calls this the correlation id; include it in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        header_value(&self.headers, "x-request-id")
    }

    /// Extracts the human readable error from a GitLab error body.
    ///
    /// GitLab answers failures with `{"message": ...}` (a string, a list, or
    /// a map of field errors) or with OAuth-style `{"error": ...}` bodies.
    #[must_use]
    pub fn error_message(&self) -> String {
        let value = self
            .body
            .get("message")
            .or_else(|| self.body.get("error_description"))
            .or_else(|| self.body.get("error"))
            .or_else(|| self.body.get("raw_body"));

        match value {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None if self.body.as_object().is_some_and(serde_json::Map::is_empty) => {
                format!("HTTP {}", self.code)
            }
            None => self.body.to_string(),
        }
    }
}
