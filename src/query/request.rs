//! Fetch request types.
//!
//! A [`FetchRequest`] is the transient description of one call against the
//! content API: which resource collection, which filters, which relations to
//! populate, how to paginate, and how to sort. It is built per call, encoded,
//! and discarded.

use serde::Serialize;

use crate::query::errors::InvalidFetchRequestError;
use crate::query::filter::{Condition, FilterNode, Filters};

/// Relation paths to expand inline in the response.
///
/// Either form normalises to the same list of trimmed paths: a joined string
/// is split on commas first.
///
/// # Example
///
/// ```rust
/// use storefront_content::query::Populate;
///
/// let joined = Populate::from("SEO.socialImage, tracks");
/// let listed = Populate::from(vec!["SEO.socialImage", "tracks"]);
/// assert_eq!(joined.paths(), listed.paths());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Populate {
    /// A comma-joined list of paths.
    Joined(String),
    /// An explicit list of paths.
    Paths(Vec<String>),
}

impl Populate {
    /// Returns the population paths, trimmed, with empty entries dropped.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Self::Joined(joined) => joined.split(',').collect(),
            Self::Paths(paths) => paths.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<&str> for Populate {
    fn from(joined: &str) -> Self {
        Self::Joined(joined.to_string())
    }
}

impl From<String> for Populate {
    fn from(joined: String) -> Self {
        Self::Joined(joined)
    }
}

impl From<Vec<String>> for Populate {
    fn from(paths: Vec<String>) -> Self {
        Self::Paths(paths)
    }
}

impl From<Vec<&str>> for Populate {
    fn from(paths: Vec<&str>) -> Self {
        Self::Paths(paths.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Populate {
    fn from(paths: &[&str]) -> Self {
        Self::Paths(paths.iter().map(|path| (*path).to_string()).collect())
    }
}

/// Pagination parameters. Each field is independently optional and only
/// fields that are set are sent.
///
/// # Example
///
/// ```rust
/// use storefront_content::query::Pagination;
///
/// let pagination = Pagination::new().page(2).page_size(25);
/// assert_eq!(pagination.limit, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of entries per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Maximum number of entries to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Pagination {
    /// Creates pagination with no fields set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: None,
            page_size: None,
            limit: None,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the limit.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.page.is_none() && self.page_size.is_none() && self.limit.is_none()
    }
}

/// A request against one content resource collection.
///
/// Serializes to the `{contentType, filters, populate, paginate, sort}` shape
/// used in logs and tests.
///
/// # Example
///
/// ```rust
/// use storefront_content::query::{FetchRequest, FilterNode, Filters, Pagination};
///
/// let request = FetchRequest::builder("pages")
///     .filters(Filters::new().field("slug", FilterNode::eq("home")))
///     .pagination(Pagination::new().page(1).page_size(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.resource_type, "pages");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FetchRequest {
    /// The resource collection, e.g. `pages`.
    #[serde(rename = "contentType")]
    pub resource_type: String,
    /// Filter tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
    /// Relations to populate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub populate: Option<Populate>,
    /// Pagination parameters.
    #[serde(rename = "paginate", skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Sort expression, e.g. `createdAt:desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl FetchRequest {
    /// Creates a new builder for the given resource type.
    #[must_use]
    pub fn builder(resource_type: impl Into<String>) -> FetchRequestBuilder {
        FetchRequestBuilder::new(resource_type)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFetchRequestError`] if:
    /// - `resource_type` is empty or whitespace
    /// - a filter field name is empty
    /// - a filter field name starts with `$`
    /// - a filter field name contains one of `[ ] & = # ? % +`
    /// - a float filter value is NaN or infinite
    pub fn verify(&self) -> Result<(), InvalidFetchRequestError> {
        if self.resource_type.trim().is_empty() {
            return Err(InvalidFetchRequestError::EmptyResourceType);
        }
        if let Some(filters) = &self.filters {
            verify_field_names(filters, &mut String::new())?;
        }
        Ok(())
    }
}

/// Characters that would split a key into extra parameters or break its
/// bracket path, since keys are written unescaped.
const KEY_DELIMITERS: &[char] = &['[', ']', '&', '=', '#', '?', '%', '+'];

fn verify_field_names(
    filters: &Filters,
    path: &mut String,
) -> Result<(), InvalidFetchRequestError> {
    for (name, node) in filters.iter() {
        if name.is_empty() {
            return Err(InvalidFetchRequestError::EmptyFieldName { path: path.clone() });
        }
        if name.starts_with('$') {
            return Err(InvalidFetchRequestError::ReservedFieldName {
                path: path.clone(),
                name: name.to_string(),
            });
        }
        if let Some(character) = name.chars().find(|c| KEY_DELIMITERS.contains(c)) {
            return Err(InvalidFetchRequestError::UnsafeFieldName {
                path: path.clone(),
                name: name.to_string(),
                character,
            });
        }

        let len = path.len();
        path.push('[');
        path.push_str(name);
        path.push(']');
        match node {
            FilterNode::Nested(nested) => verify_field_names(nested, path)?,
            FilterNode::Value(value) | FilterNode::Condition(Condition { value, .. }) => {
                if !value.is_finite() {
                    return Err(InvalidFetchRequestError::NonFiniteValue { path: path.clone() });
                }
            }
        }
        path.truncate(len);
    }
    Ok(())
}

/// Builder for [`FetchRequest`].
#[derive(Debug)]
pub struct FetchRequestBuilder {
    resource_type: String,
    filters: Option<Filters>,
    populate: Option<Populate>,
    pagination: Option<Pagination>,
    sort: Option<String>,
}

impl FetchRequestBuilder {
    fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            filters: None,
            populate: None,
            pagination: None,
            sort: None,
        }
    }

    /// Sets the filter tree.
    #[must_use]
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Sets the relations to populate.
    #[must_use]
    pub fn populate(mut self, populate: impl Into<Populate>) -> Self {
        self.populate = Some(populate.into());
        self
    }

    /// Sets the pagination parameters.
    #[must_use]
    pub const fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Sets the sort expression. A blank expression clears it.
    #[must_use]
    pub fn sort(self, sort: impl Into<String>) -> Self {
        self.sort_opt(Some(sort))
    }

    /// Sets the sort expression if one is given and not blank.
    #[must_use]
    pub fn sort_opt(mut self, sort: Option<impl Into<String>>) -> Self {
        self.sort = sort
            .map(|sort| sort.into().trim().to_string())
            .filter(|sort| !sort.is_empty());
        self
    }

    /// Builds the [`FetchRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFetchRequestError`] if the request fails validation.
    pub fn build(self) -> Result<FetchRequest, InvalidFetchRequestError> {
        let request = FetchRequest {
            resource_type: self.resource_type,
            filters: self.filters,
            populate: self.populate,
            pagination: self.pagination,
            sort: self.sort,
        };
        request.verify()?;
        Ok(request)
    }
}
