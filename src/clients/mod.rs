//! Client types for the content API.
//!
//! # Overview
//!
//! - [`HttpClient`]: the transport, one GET per request, envelope decoding
//! - [`ContentResponse`]: the decoded `{data, meta}` envelope
//! - [`HttpError`], [`HttpResponseError`]: transport and status errors
//! - [`content::ContentClient`]: one typed method per content resource
//! - [`content::ContentError`]: the error type of resource methods
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_content::{ContentClient, ContentConfig};
//!
//! let client = ContentClient::new(&ContentConfig::from_env()?)?;
//!
//! // Issue both calls concurrently; the client is stateless.
//! let (store, page) = tokio::join!(client.get_store(None), client.get_page("home", None));
//! ```

pub mod content;
mod errors;
mod http_client;
mod response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use response::{ContentResponse, PaginationMeta, ResponseMeta};

pub use content::{ContentClient, ContentError};
