//! Filter expression model.
//!
//! A filter is an ordered map from field name to [`FilterNode`]. A node is a
//! bare value (shorthand for equality), an explicit operator [`Condition`], or
//! a nested [`Filters`] map that filters on a related resource's fields.
//!
//! # Example
//!
//! ```rust
//! use storefront_content::query::{FilterNode, Filters};
//!
//! // store.slug == "acme" && slug == "home"
//! let filters = Filters::new()
//!     .path("store.slug", FilterNode::eq("acme"))
//!     .field("slug", FilterNode::eq("home"));
//!
//! assert_eq!(
//!     serde_json::to_value(&filters).unwrap(),
//!     serde_json::json!({
//!         "store": { "slug": { "$eq": "acme" } },
//!         "slug": { "$eq": "home" }
//!     })
//! );
//! ```

use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Comparison operators understood by the content API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// `$eq`
    Equals,
    /// `$contains`
    Contains,
    /// `$in`
    In,
    /// `$gt`
    GreaterThan,
    /// `$lt`
    LessThan,
    /// `$gte`
    GreaterThanOrEqual,
    /// `$lte`
    LessThanOrEqual,
    /// `$ne`
    NotEqual,
}

impl FilterOperator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Equals,
        Self::Contains,
        Self::In,
        Self::GreaterThan,
        Self::LessThan,
        Self::GreaterThanOrEqual,
        Self::LessThanOrEqual,
        Self::NotEqual,
    ];

    /// Returns the wire key for this operator (e.g. `$eq`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "$eq",
            Self::Contains => "$contains",
            Self::In => "$in",
            Self::GreaterThan => "$gt",
            Self::LessThan => "$lt",
            Self::GreaterThanOrEqual => "$gte",
            Self::LessThanOrEqual => "$lte",
            Self::NotEqual => "$ne",
        }
    }

    /// Looks up an operator by its wire key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == key)
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value on the right-hand side of a condition.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    /// A string value.
    Text(String),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A list of values, used with operators such as `$in`.
    List(Vec<FilterValue>),
}

impl FilterValue {
    /// Returns the scalar as it appears in a query string, before
    /// percent-encoding. Lists have no scalar form and return `None`.
    #[must_use]
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Int(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            Self::Bool(value) => Some(value.to_string()),
            Self::List(_) => None,
        }
    }

    /// Returns `false` if the value, or any list element, is a NaN or
    /// infinite float.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Float(value) => value.is_finite(),
            Self::List(values) => values.iter().all(Self::is_finite),
            Self::Text(_) | Self::Int(_) | Self::Bool(_) => true,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

/// An operator paired with exactly one value.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    /// The comparison operator.
    pub operator: FilterOperator,
    /// The value to compare against.
    pub value: FilterValue,
}

impl Condition {
    /// Creates a new condition.
    #[must_use]
    pub fn new(operator: FilterOperator, value: impl Into<FilterValue>) -> Self {
        Self {
            operator,
            value: value.into(),
        }
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.operator.as_str(), &self.value)?;
        map.end()
    }
}

/// A node in a filter tree.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterNode {
    /// A bare value, equivalent to an `$eq` condition.
    Value(FilterValue),
    /// An explicit operator condition.
    Condition(Condition),
    /// Conditions on the fields of a related resource.
    Nested(Filters),
}

impl FilterNode {
    /// Creates an explicit condition node.
    #[must_use]
    pub fn condition(operator: FilterOperator, value: impl Into<FilterValue>) -> Self {
        Self::Condition(Condition::new(operator, value))
    }

    /// `$eq`
    #[must_use]
    pub fn eq(value: impl Into<FilterValue>) -> Self {
        Self::condition(FilterOperator::Equals, value)
    }

    /// `$contains`
    #[must_use]
    pub fn contains(value: impl Into<FilterValue>) -> Self {
        Self::condition(FilterOperator::Contains, value)
    }

    /// `$in`
    #[must_use]
    pub fn in_set<T: Into<FilterValue>>(values: Vec<T>) -> Self {
        Self::condition(FilterOperator::In, values)
    }

    /// `$gt`
    #[must_use]
    pub fn gt(value: impl Into<FilterValue>) -> Self {
        Self::condition(FilterOperator::GreaterThan, value)
    }

    /// `$lt`
    #[must_use]
    pub fn lt(value: impl Into<FilterValue>) -> Self {
        Self::condition(FilterOperator::LessThan, value)
    }

    /// `$gte`
    #[must_use]
    pub fn gte(value: impl Into<FilterValue>) -> Self {
        Self::condition(FilterOperator::GreaterThanOrEqual, value)
    }

    /// `$lte`
    #[must_use]
    pub fn lte(value: impl Into<FilterValue>) -> Self {
        Self::condition(FilterOperator::LessThanOrEqual, value)
    }

    /// `$ne`
    #[must_use]
    pub fn ne(value: impl Into<FilterValue>) -> Self {
        Self::condition(FilterOperator::NotEqual, value)
    }

    /// Returns the condition this node stands for, expanding the bare value
    /// shorthand into `$eq`. Nested nodes return `None`.
    #[must_use]
    pub fn as_condition(&self) -> Option<Condition> {
        match self {
            Self::Value(value) => Some(Condition::new(FilterOperator::Equals, value.clone())),
            Self::Condition(condition) => Some(condition.clone()),
            Self::Nested(_) => None,
        }
    }
}

macro_rules! value_node_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FilterNode {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

value_node_from!(FilterValue, &str, String, &String, i64, i32, u32, f64, bool);

impl From<Condition> for FilterNode {
    fn from(condition: Condition) -> Self {
        Self::Condition(condition)
    }
}

impl From<Filters> for FilterNode {
    fn from(filters: Filters) -> Self {
        Self::Nested(filters)
    }
}

impl Serialize for FilterNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Condition(condition) => condition.serialize(serializer),
            Self::Nested(filters) => filters.serialize(serializer),
        }
    }
}

/// An ordered mapping from field name to [`FilterNode`].
///
/// Insertion order is preserved and drives the order of the encoded query
/// parameters. Setting a field that already exists replaces it in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    entries: Vec<(String, FilterNode)>,
}

impl Filters {
    /// Creates an empty filter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node for a single field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, node: impl Into<FilterNode>) -> Self {
        self.insert(name.into(), node.into());
        self
    }

    /// Sets the node at a dot-separated relation path, creating or merging
    /// into nested maps along the way.
    ///
    /// ```rust
    /// use storefront_content::query::{FilterNode, Filters};
    ///
    /// let filters = Filters::new()
    ///     .path("store.slug", FilterNode::eq("acme"))
    ///     .path("store.active", FilterNode::eq(true));
    ///
    /// assert_eq!(filters.len(), 1);
    /// ```
    #[must_use]
    pub fn path(mut self, path: &str, node: impl Into<FilterNode>) -> Self {
        let segments: Vec<&str> = path.split('.').collect();
        self.insert_path(&segments, node.into());
        self
    }

    /// Returns the node for a field, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FilterNode> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    /// Iterates over `(field, node)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Returns the number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: String, node: FilterNode) {
        if let Some(slot) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = node;
        } else {
            self.entries.push((name, node));
        }
    }

    fn insert_path(&mut self, segments: &[&str], node: FilterNode) {
        match segments {
            [] => {}
            [last] => self.insert((*last).to_string(), node),
            [head, rest @ ..] => {
                let existing = self.entries.iter_mut().find(|(key, _)| key == head);
                if let Some((_, FilterNode::Nested(nested))) = existing {
                    nested.insert_path(rest, node);
                } else {
                    let mut nested = Self::new();
                    nested.insert_path(rest, node);
                    self.insert((*head).to_string(), FilterNode::Nested(nested));
                }
            }
        }
    }
}

impl Serialize for Filters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}
