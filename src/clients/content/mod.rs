//! Typed content resource client.
//!
//! [`ContentClient`] maps each storefront resource (store, page, product,
//! event, article, album) to a fully populated [`FetchRequest`](crate::query::FetchRequest)
//! and decodes the response envelope.

mod client;
mod errors;

pub use client::{
    ContentClient, NEWEST_FIRST, PAGE_LIST_POPULATE, SINGLE_PAGE, STORE_LIST_POPULATE,
};
pub use errors::ContentError;
