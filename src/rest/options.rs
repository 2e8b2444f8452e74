//! Per-call request options.
//!
//! [`RequestOptions`] carries the extra parameters every manager operation
//! and custom action accepts: `sudo`, pagination controls and arbitrary
//! key/value pairs. They are sent as query parameters.
//!
//! # Example
//!
//! ```rust
//! use gitlab_api::rest::RequestOptions;
//!
//! let options = RequestOptions::new()
//!     .sudo("release-bot")
//!     .per_page(100)
//!     .param("statistics", "true");
//!
//! let query = options.to_query();
//! assert!(query.contains(&("sudo".to_string(), "release-bot".to_string())));
//! assert!(query.contains(&("per_page".to_string(), "100".to_string())));
//! ```

use crate::clients::QueryParams;

/// Extra parameters forwarded with a single call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    sudo: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
    params: Vec<(String, String)>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Performs the call as another user (administrators only).
    #[must_use]
    pub fn sudo(mut self, user: impl Into<String>) -> Self {
        self.sudo = Some(user.into());
        self
    }

    /// Requests a specific page of a collection.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of items per page.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Adds an arbitrary query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Returns the page requested, if any.
    #[must_use]
    pub const fn requested_page(&self) -> Option<u32> {
        self.page
    }

    /// Returns the options as query parameters.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        self.apply(&mut query);
        query
    }

    /// Appends the options to `query`.
    ///
    /// `sudo`, `page` and `per_page` replace any value already present.
    pub fn apply(&self, query: &mut QueryParams) {
        let mut set = |key: &str, value: String| {
            query.retain(|(existing, _)| existing != key);
            query.push((key.to_string(), value));
        };

        if let Some(sudo) = &self.sudo {
            set("sudo", sudo.clone());
        }
        if let Some(page) = self.page {
            set("page", page.to_string());
        }
        if let Some(per_page) = self.per_page {
            set("per_page", per_page.to_string());
        }

        query.extend(self.params.iter().cloned());
    }
}

/// Builds the query for a call from optional options.
pub(crate) fn options_query(options: Option<&RequestOptions>) -> QueryParams {
    options.map(RequestOptions::to_query).unwrap_or_default()
}
