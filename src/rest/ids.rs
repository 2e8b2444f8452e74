//! Identifiers placed in request paths.

use std::fmt;

/// An identifier ready to be placed in a request path.
///
/// Numeric ids are used as-is. String ids, such as a namespaced project
/// path (`group/project`) or a variable key, are percent-encoded so that a
/// `/` never splits the path segment.
///
/// # Example
///
/// ```rust
/// use gitlab_api::rest::ResourceId;
///
/// assert_eq!(ResourceId::from(42).to_string(), "42");
/// assert_eq!(ResourceId::from("group/sub/project").to_string(), "group%2Fsub%2Fproject");
/// assert_eq!(ResourceId::from("group/project").as_raw(), "group/project");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId {
    raw: String,
    encoded: String,
}

impl ResourceId {
    /// Creates an identifier from its raw (unencoded) value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let encoded = urlencoding::encode(&raw).into_owned();
        Self { raw, encoded }
    }

    /// Returns the raw value.
    #[must_use]
    pub fn as_raw(&self) -> &str {
        &self.raw
    }

    /// Returns the percent-encoded path segment.
    #[must_use]
    pub fn as_path_segment(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ResourceId {
                fn from(id: $ty) -> Self {
                    Self::new(id.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(u32, u64, i32, i64);

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&String> for ResourceId {
    fn from(id: &String) -> Self {
        Self::new(id.as_str())
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(id: &ResourceId) -> Self {
        id.clone()
    }
}
