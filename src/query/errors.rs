//! Validation errors for fetch requests.

use thiserror::Error;

/// Error returned when a [`FetchRequest`](super::FetchRequest) fails
/// validation before it is encoded.
///
/// # Example
///
/// ```rust
/// use storefront_content::query::{FetchRequest, InvalidFetchRequestError};
///
/// let result = FetchRequest::builder("").build();
/// assert_eq!(result.unwrap_err(), InvalidFetchRequestError::EmptyResourceType);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidFetchRequestError {
    /// The resource type is empty.
    #[error("Resource type cannot be empty.")]
    EmptyResourceType,

    /// A filter field name is empty.
    #[error("Empty filter field name under 'filters{path}'.")]
    EmptyFieldName {
        /// Bracket path of the map containing the empty name.
        path: String,
    },

    /// A filter field name would be read as an operator key.
    #[error("Filter field '{name}' under 'filters{path}' starts with '$' and would collide with an operator.")]
    ReservedFieldName {
        /// Bracket path of the map containing the field.
        path: String,
        /// The offending field name.
        name: String,
    },

    /// A filter field name contains a character that is structural in the
    /// query string.
    #[error("Filter field '{name}' under 'filters{path}' contains '{character}', which is not allowed in a filter key.")]
    UnsafeFieldName {
        /// Bracket path of the map containing the field.
        path: String,
        /// The offending field name.
        name: String,
        /// The first disallowed character found.
        character: char,
    },

    /// A float filter value is NaN or infinite.
    #[error("Filter value under 'filters{path}' is not a finite number.")]
    NonFiniteValue {
        /// Bracket path of the field holding the value.
        path: String,
    },
}
