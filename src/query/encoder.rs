//! Query string encoder for the content API's bracket convention.
//!
//! The backend parses nested parameters from bracketed keys:
//!
//! ```text
//! filters[store][slug][$eq]=acme
//! filters[id][$in][]=3&filters[id][$in][]=5
//! populate[]=SEO.socialImage
//! pagination[limit]=5&pagination[page]=1&pagination[pageSize]=10
//! sort=createdAt%3Adesc
//! ```
//!
//! Keys are emitted verbatim. Values are percent-encoded, leaving only the
//! unreserved characters (`A-Z a-z 0-9 - _ . ~`) as-is. A mismatch here does
//! not fail on the server; it silently returns unfiltered or empty results.
//!
//! Parameter order is deterministic: filters in insertion order, then
//! populate paths, then pagination (`limit`, `page`, `pageSize`), then sort.

use crate::query::filter::{FilterNode, FilterValue, Filters};
use crate::query::request::{FetchRequest, Pagination, Populate};

/// A decoded `(key, value)` query parameter.
pub type QueryPair = (String, String);

/// Encodes a request into its final query string, without the leading `?`.
///
/// # Example
///
/// ```rust
/// use storefront_content::query::{encode_query, FetchRequest, Filters};
///
/// let request = FetchRequest::builder("stores")
///     .filters(Filters::new().field("slug", "acme"))
///     .populate("Logo,Cover")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     encode_query(&request),
///     "filters[slug][$eq]=acme&populate[]=Logo&populate[]=Cover"
/// );
/// ```
#[must_use]
pub fn encode_query(request: &FetchRequest) -> String {
    query_pairs(request)
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Returns every parameter of a request, in wire order, before percent-encoding.
#[must_use]
pub fn query_pairs(request: &FetchRequest) -> Vec<QueryPair> {
    let mut pairs = Vec::new();
    if let Some(filters) = &request.filters {
        pairs.extend(encode_filters(filters));
    }
    if let Some(populate) = &request.populate {
        pairs.extend(encode_populate(populate));
    }
    if let Some(pagination) = &request.pagination {
        pairs.extend(encode_pagination(pagination));
    }
    if let Some(sort) = request.sort.as_deref().map(str::trim) {
        if !sort.is_empty() {
            pairs.push(("sort".to_string(), sort.to_string()));
        }
    }
    pairs
}

/// Flattens a filter tree into one parameter per leaf value.
///
/// A bare value leaf is written as an explicit `$eq` condition. List values
/// produce one `[]`-suffixed entry per element.
#[must_use]
pub fn encode_filters(filters: &Filters) -> Vec<QueryPair> {
    let mut pairs = Vec::new();
    walk_filters(filters, "filters", &mut pairs);
    pairs
}

fn walk_filters(filters: &Filters, prefix: &str, pairs: &mut Vec<QueryPair>) {
    for (name, node) in filters.iter() {
        let key = format!("{prefix}[{name}]");
        match node {
            FilterNode::Nested(nested) => walk_filters(nested, &key, pairs),
            FilterNode::Value(value) => push_value(format!("{key}[$eq]"), value, pairs),
            FilterNode::Condition(condition) => push_value(
                format!("{key}[{}]", condition.operator.as_str()),
                &condition.value,
                pairs,
            ),
        }
    }
}

fn push_value(key: String, value: &FilterValue, pairs: &mut Vec<QueryPair>) {
    match value {
        FilterValue::List(values) => {
            let element_key = format!("{key}[]");
            for element in values {
                push_value(element_key.clone(), element, pairs);
            }
        }
        scalar => {
            if let Some(text) = scalar.to_query_value() {
                pairs.push((key, text));
            }
        }
    }
}

/// Emits one `populate[]` parameter per population path.
#[must_use]
pub fn encode_populate(populate: &Populate) -> Vec<QueryPair> {
    populate
        .paths()
        .into_iter()
        .map(|path| ("populate[]".to_string(), path))
        .collect()
}

/// Emits `pagination[limit]`, `pagination[page]` and `pagination[pageSize]`
/// for the fields that are set.
#[must_use]
pub fn encode_pagination(pagination: &Pagination) -> Vec<QueryPair> {
    [
        ("pagination[limit]", pagination.limit),
        ("pagination[page]", pagination.page),
        ("pagination[pageSize]", pagination.page_size),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|n| (key.to_string(), n.to_string())))
    .collect()
}
