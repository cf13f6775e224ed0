//! The paginated response envelope.
//!
//! Every collection endpoint answers with:
//!
//! ```json
//! {
//!   "data": [ ... ],
//!   "meta": { "pagination": { "page": 1, "pageSize": 10, "pageCount": 1, "total": 1 } }
//! }
//! ```
//!
//! `data` keeps the backend's order. An empty `data` is a successful answer
//! meaning "nothing matched", not an error.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Pagination metadata from `meta.pagination`.
///
/// Page-based requests fill `page`, `page_size` and `page_count`; limit-based
/// requests fill `start` and `limit`. `total` is present in both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number.
    #[serde(default)]
    pub page: Option<u32>,
    /// Entries per page.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Number of pages.
    #[serde(default)]
    pub page_count: Option<u32>,
    /// Total number of matching entries.
    #[serde(default)]
    pub total: Option<u64>,
    /// Offset of the first entry (limit-based pagination).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    /// Limit applied (limit-based pagination).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// The `meta` object of a response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Pagination metadata, when the backend returned it.
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
}

/// A decoded `{data, meta}` envelope.
///
/// Derefs to `[T]`, so slice methods work directly on the response.
///
/// # Example
///
/// ```rust
/// use storefront_content::ContentResponse;
///
/// let envelope: ContentResponse<serde_json::Value> = serde_json::from_str(
///     r#"{"data":[{"slug":"home"}],"meta":{"pagination":{"page":1,"pageSize":10,"pageCount":1,"total":1}}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(envelope.len(), 1);
/// assert!(!envelope.has_next_page());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentResponse<T> {
    /// Entries in backend order.
    pub data: Vec<T>,
    /// Response metadata.
    #[serde(default)]
    pub meta: ResponseMeta,
}

impl<T> ContentResponse<T> {
    /// Creates an envelope from parts.
    #[must_use]
    pub const fn new(data: Vec<T>, meta: ResponseMeta) -> Self {
        Self { data, meta }
    }

    /// Returns the first entry, the usual way to read a single-entity lookup.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Consumes the envelope and returns its first entry.
    #[must_use]
    pub fn into_first(self) -> Option<T> {
        self.data.into_iter().next()
    }

    /// Consumes the envelope and returns all entries.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    /// Returns the pagination metadata, if present.
    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationMeta> {
        self.meta.pagination.as_ref()
    }

    /// Returns `true` if the backend reports a page after this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination()
            .and_then(|p| Some(p.page? < p.page_count?))
            .unwrap_or(false)
    }
}

impl<T> Deref for ContentResponse<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
