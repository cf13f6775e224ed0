//! Query building for the content API.
//!
//! This module turns a domain-level request ("this store's home page, with its
//! albums populated") into the exact query string the backend expects.
//!
//! - [`Filters`], [`FilterNode`], [`Condition`], [`FilterOperator`],
//!   [`FilterValue`]: the filter expression model
//! - [`FetchRequest`], [`Populate`], [`Pagination`]: one request
//! - [`encode_query`] and friends: the bracket-convention encoder
//!
//! # Example
//!
//! ```rust
//! use storefront_content::query::{encode_query, FetchRequest, FilterNode, Filters, Pagination};
//!
//! let request = FetchRequest::builder("pages")
//!     .filters(
//!         Filters::new()
//!             .path("store.slug", FilterNode::eq("acme"))
//!             .field("slug", FilterNode::eq("home")),
//!     )
//!     .populate("SEO.socialImage,store")
//!     .pagination(Pagination::new().page(1).page_size(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     encode_query(&request),
//!     "filters[store][slug][$eq]=acme&filters[slug][$eq]=home\
//!      &populate[]=SEO.socialImage&populate[]=store\
//!      &pagination[page]=1&pagination[pageSize]=10"
//! );
//! ```

mod encoder;
mod errors;
mod filter;
mod request;

pub use encoder::{
    encode_filters, encode_pagination, encode_populate, encode_query, query_pairs, QueryPair,
};
pub use errors::InvalidFetchRequestError;
pub use filter::{Condition, FilterNode, FilterOperator, FilterValue, Filters};
pub use request::{FetchRequest, FetchRequestBuilder, Pagination, Populate};
