//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the content API
//! - [`HttpError`]: unified error type for a single fetch
//!
//! Every variant that belongs to a fetch names the resource type it was
//! fetching, so a caller can report which part of a page failed to load.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_content::clients::HttpError;
//!
//! match http.get::<Page>(&request).await {
//!     Ok(envelope) => println!("{} pages", envelope.len()),
//!     Err(HttpError::Response(e)) => println!("{} returned {}", e.resource_type, e.code),
//!     Err(HttpError::Decode { resource_type, .. }) => println!("bad {resource_type} body"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the content API answers with a non-2xx status.
///
/// # Example
///
/// ```rust
/// use storefront_content::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     resource_type: "pages".to_string(),
///     code: 404,
///     message: Some("Not Found".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "Failed to fetch pages (HTTP 404)");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to fetch {resource_type} (HTTP {code})")]
pub struct HttpResponseError {
    /// The resource type that was requested.
    pub resource_type: String,
    /// The HTTP status code of the response.
    pub code: u16,
    /// The backend's `error.message`, when the body carried one.
    pub message: Option<String>,
}

/// Unified error type for content API requests.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error while fetching.
    #[error("Failed to fetch {resource_type}: {source}")]
    Network {
        /// The resource type that was requested.
        resource_type: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body is not a valid envelope.
    #[error("Failed to decode {resource_type} response: {source}")]
    Decode {
        /// The resource type that was requested.
        resource_type: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl HttpError {
    /// Returns the resource type the failed request was for, if any.
    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        match self {
            Self::Response(e) => Some(&e.resource_type),
            Self::Network { resource_type, .. } | Self::Decode { resource_type, .. } => {
                Some(resource_type)
            }
            Self::Client(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_names_resource_type() {
        let error = HttpResponseError {
            resource_type: "albums".to_string(),
            code: 500,
            message: None,
        };
        assert!(error.to_string().contains("albums"));
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn test_decode_error_names_resource_type() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = HttpError::Decode {
            resource_type: "stores".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Failed to decode stores response"));
        assert_eq!(error.resource_type(), Some("stores"));
    }

    #[test]
    fn test_response_error_converts_into_http_error() {
        let error: HttpError = HttpResponseError {
            resource_type: "events".to_string(),
            code: 403,
            message: Some("Forbidden".to_string()),
        }
        .into();
        assert!(matches!(error, HttpError::Response(ref e) if e.code == 403));
        assert_eq!(error.resource_type(), Some("events"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &HttpResponseError {
            resource_type: "pages".to_string(),
            code: 400,
            message: None,
        };
        let _ = error;
    }
}
