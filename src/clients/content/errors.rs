//! Error type for resource methods.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_content::ContentError;
//!
//! match client.get_page("home", None).await {
//!     Ok(envelope) => match envelope.first() {
//!         Some(page) => render(page),
//!         None => render_not_found(),
//!     },
//!     Err(e) if e.is_request_failure() => render_loading_failed(),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use crate::query::InvalidFetchRequestError;
use thiserror::Error;

/// Error type for [`ContentClient`](super::ContentClient) operations.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The client could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request failed validation before it was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidFetchRequestError),

    /// The request was sent and failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ContentError {
    /// Returns `true` for failures of a sent request: network errors, non-2xx
    /// statuses and undecodable bodies alike.
    #[must_use]
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Self::Http(
                HttpError::Network { .. } | HttpError::Response(_) | HttpError::Decode { .. }
            )
        )
    }
}
