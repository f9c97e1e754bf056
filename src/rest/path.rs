//! URI building for REST resources.
//!
//! Every resource URI is rooted at [`API_PREFIX`]. A resource may be scoped
//! under a parent (e.g., credentials of one webshop), addressed by id, and
//! narrowed with query filters:
//!
//! ```text
//! /api/rest/v1/{parentPath}/{parentId}/{resourcePath}/{id}?{query}
//! ```
//!
//! # Example
//!
//! ```rust
//! use ccvshop_api::rest::{build_uri, filters_to_query, ParentReference, QueryFilters};
//!
//! assert_eq!(build_uri("webshops", None, Some(42)), "/api/rest/v1/webshops/42");
//!
//! let parent = ParentReference::new("webshops", 42);
//! assert_eq!(
//!     build_uri("credentials", Some(&parent), None),
//!     "/api/rest/v1/webshops/42/credentials"
//! );
//!
//! let mut filters = QueryFilters::new();
//! filters.insert("name".to_string(), "my shop".to_string());
//! assert_eq!(filters_to_query(&filters), "name=my%20shop");
//! ```

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use urlencoding::encode;

use crate::rest::resource::Resource;

/// Root of every resource URI.
pub const API_PREFIX: &str = "/api/rest/v1/";

/// Query filters for collection and single-resource reads.
///
/// An ordered map, so the query string (and therefore the signed URI) is
/// deterministic for a given set of filters.
pub type QueryFilters = BTreeMap<String, String>;

/// Scopes a resource under a parent resource instance.
///
/// # Example
///
/// ```rust
/// use ccvshop_api::rest::ParentReference;
/// use ccvshop_api::rest::resources::Webshop;
///
/// let parent = ParentReference::for_resource::<Webshop>(42);
/// assert_eq!(parent.path(), "webshops");
/// assert_eq!(parent.id(), 42);
/// assert_eq!(parent.to_string(), "webshops/42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParentReference {
    path: String,
    id: u64,
}

impl ParentReference {
    /// Creates a parent reference from a collection path and an id.
    #[must_use]
    pub fn new(path: impl Into<String>, id: u64) -> Self {
        Self {
            path: path.into(),
            id,
        }
    }

    /// Creates a parent reference to an instance of `R`.
    #[must_use]
    pub fn for_resource<R: Resource>(id: u64) -> Self {
        Self::new(R::PATH, id)
    }

    /// Returns the parent's collection path (e.g., `webshops`).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the parent's id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for ParentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.path, self.id)
    }
}

/// Builds a resource URI without query string.
#[must_use]
pub fn build_uri(resource_path: &str, parent: Option<&ParentReference>, id: Option<u64>) -> String {
    let mut uri = String::from(API_PREFIX);
    if let Some(parent) = parent {
        let _ = write!(uri, "{parent}/");
    }
    uri.push_str(resource_path);
    if let Some(id) = id {
        let _ = write!(uri, "/{id}");
    }
    uri
}

/// Encodes filters as an RFC 3986 query string (no leading `?`).
///
/// Keys and values are percent-encoded; spaces become `%20`.
#[must_use]
pub fn filters_to_query(filters: &QueryFilters) -> String {
    filters
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends `?query` to a URI when there are filters.
#[must_use]
pub fn with_query(uri: String, filters: &QueryFilters) -> String {
    if filters.is_empty() {
        uri
    } else {
        format!("{uri}?{}", filters_to_query(filters))
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ParentReference>();
};
