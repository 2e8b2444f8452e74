//! Response wrapper for REST resource operations.
//!
//! [`ResourceResponse<T>`] combines resource data with the pagination, rate
//! limit and request id metadata of the response it came from. It implements
//! `Deref<Target = T>`, so a listed page can be used like the `Vec` it holds:
//!
//! ```rust,ignore
//! let page = manager.list(&client, None, None).await?;
//!
//! for pipeline in page.iter() {
//!     println!("{:?} {:?}", pipeline.id, pipeline.status);
//! }
//! println!("{} of {:?}", page.len(), page.total());
//!
//! if let Some(next) = page.next_page() {
//!     let options = RequestOptions::new().page(next);
//!     let page = manager.list(&client, None, Some(&options)).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use crate::clients::{HttpResponse, PaginationInfo, RateLimit};

/// A response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use gitlab_api::clients::{PaginationInfo, RateLimit};
/// use gitlab_api::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(
///     vec!["a", "b", "c"],
///     PaginationInfo { page: Some(1), next_page: Some(2), ..Default::default() },
///     Some(RateLimit { limit: 600, remaining: 599 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response[0], "a");
/// assert_eq!(response.next_page(), Some(2));
/// assert!(!response.has_prev_page());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: PaginationInfo,
    rate_limit: Option<RateLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: PaginationInfo,
        rate_limit: Option<RateLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Wraps `data` with the metadata of `response`.
    #[must_use]
    pub fn from_parts(data: T, response: &HttpResponse) -> Self {
        Self {
            data,
            pagination: response.pagination.clone(),
            rate_limit: response.rate_limit,
            request_id: response.request_id().map(ToString::to_string),
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.next_page.is_some()
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.pagination.prev_page.is_some()
    }

    /// Returns the number of the next page, if any.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        self.pagination.next_page
    }

    /// Returns the number of the previous page, if any.
    #[must_use]
    pub const fn prev_page(&self) -> Option<u32> {
        self.pagination.prev_page
    }

    /// Returns the total number of items, when the server reported it.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.pagination.total
    }

    /// Returns the total number of pages, when the server reported it.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.pagination.total_pages
    }

    /// Returns the pagination info.
    #[must_use]
    pub const fn pagination(&self) -> &PaginationInfo {
        &self.pagination
    }

    /// Returns the rate limit information, if available.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
