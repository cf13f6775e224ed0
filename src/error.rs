//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! malformed base URL or a blank store slug is rejected when the client is
//! built, never at request time.
//!
//! # Example
//!
//! ```rust
//! use storefront_content::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the content client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not an absolute `http` or `https` URL.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The URL that was provided.
        url: String,
    },

    /// Store slug cannot be empty.
    #[error("Store slug cannot be empty. Please provide the slug of the default store.")]
    EmptyStoreSlug,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
