//! # Storefront Content Client
//!
//! A typed client for a headless CMS content API serving storefront content:
//! store profiles, pages, albums and tracks, products, events and articles.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ContentConfig`] and [`ContentConfigBuilder`]
//! - Validated newtypes for the API base URL and store slug
//! - A filter tree and request model in [`query`], encoded to the backend's
//!   bracket-style query convention (`filters[store][slug][$eq]=acme`)
//! - An async HTTP transport decoding the `{data, meta}` response envelope
//! - One typed method per resource on [`ContentClient`], scoped to a default
//!   store that each call may override
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_content::{BaseUrl, ContentConfig, StoreSlug};
//!
//! let config = ContentConfig::builder()
//!     .base_url(BaseUrl::new("https://api.markket.place").unwrap())
//!     .default_store(StoreSlug::new("acme").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.default_store().as_ref(), "acme");
//! ```
//!
//! ## Fetching Content
//!
//! ```rust,ignore
//! use storefront_content::{ContentClient, ContentConfig, Pagination};
//!
//! // STRAPI_URL and STORE_SLUG, with defaults when unset
//! let client = ContentClient::new(&ContentConfig::from_env()?)?;
//!
//! let home = client.get_page("home", None).await?;
//! if let Some(page) = home.first() {
//!     for album in &page.albums {
//!         println!("{:?}: {} tracks", album.title, album.tracks.len());
//!     }
//! }
//!
//! // Another store, second page of its products
//! let products = client
//!     .get_products(Pagination::new().page(2).page_size(12), None, Some("northwind"))
//!     .await?;
//! println!("has more: {}", products.has_next_page());
//! ```
//!
//! ## Custom Queries
//!
//! Anything the resource methods do not cover can be sent through
//! [`ContentClient::fetch`]:
//!
//! ```rust
//! use storefront_content::query::{encode_query, FetchRequest, FilterNode, Filters};
//!
//! let request = FetchRequest::builder("tracks")
//!     .filters(
//!         Filters::new()
//!             .path("album.slug", FilterNode::eq("live"))
//!             .field("Title", FilterNode::contains("intro")),
//!     )
//!     .populate("media")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     encode_query(&request),
//!     "filters[album][slug][$eq]=live&filters[Title][$contains]=intro&populate[]=media"
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: newtypes and request builders validate on construction
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, ContentConfig, ContentConfigBuilder, StoreSlug};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ContentClient, ContentError, ContentResponse, HttpClient, HttpError, HttpResponseError,
    PaginationMeta, ResponseMeta,
};

// Re-export request types
pub use query::{FetchRequest, FilterNode, FilterOperator, Filters, Pagination, Populate};

// Re-export content models
pub use resources::{
    Album, Article, ContentResource, Event, Link, Media, Page, Price, Product, Seo, Store, Tag,
    Track,
};
