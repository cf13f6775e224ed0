//! Resource client for the content API.
//!
//! This module provides [`ContentClient`], which exposes one typed method per
//! content resource. Each method builds a [`FetchRequest`] with the resource's
//! filters, populate paths and sort, sends it through the shared
//! [`HttpClient`], and returns the decoded envelope unchanged.

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::clients::content::ContentError;
use crate::clients::{ContentResponse, HttpClient};
use crate::config::{ContentConfig, StoreSlug};
use crate::query::{FetchRequest, FilterNode, Filters, Pagination};
use crate::resources::{Album, Article, ContentResource, Event, Page, Product, Store};

/// Sort expression for newest entries first.
pub const NEWEST_FIRST: &str = "createdAt:desc";

/// Page and size used for single-page lookups.
pub const SINGLE_PAGE: Pagination = Pagination::new().page(1).page_size(10);

/// Populate paths for the public store directory.
pub const STORE_LIST_POPULATE: &[&str] = &["Logo", "SEO", "SEO.socialImage", "Favicon", "URLS"];

/// Populate paths for a store's page list.
pub const PAGE_LIST_POPULATE: &[&str] = &["SEO.socialImage"];

/// Typed client for the storefront's content API.
///
/// Every method that takes a `store` argument scopes its query to that store;
/// `None` (or a blank slug) falls back to the configured default store.
///
/// # Thread Safety
///
/// `ContentClient` is `Send + Sync` and stateless beyond its configuration,
/// so calls may be issued concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_content::{BaseUrl, ContentClient, ContentConfig, StoreSlug};
///
/// let config = ContentConfig::builder()
///     .base_url(BaseUrl::new("https://api.markket.place")?)
///     .default_store(StoreSlug::new("acme")?)
///     .build()?;
/// let client = ContentClient::new(&config)?;
///
/// let envelope = client.get_page("home", None).await?;
/// match envelope.first() {
///     Some(page) => println!("{:?}", page.title),
///     None => println!("no such page"),
/// }
/// ```
#[derive(Debug)]
pub struct ContentClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Store used when a call does not name one.
    default_store: StoreSlug,
}

// Verify ContentClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContentClient>();
};

impl ContentClient {
    /// Creates a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &ContentConfig) -> Result<Self, ContentError> {
        tracing::debug!(
            "Content client using {} with default store {}",
            config.base_url(),
            config.default_store()
        );

        Ok(Self {
            http_client: HttpClient::new(config)?,
            default_store: config.default_store().clone(),
        })
    }

    /// Creates a new client configured from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Config`] if the environment holds an invalid
    /// base URL, or [`ContentError::Http`] if the HTTP client cannot be created.
    pub fn from_env() -> Result<Self, ContentError> {
        Self::new(&ContentConfig::from_env()?)
    }

    /// Returns the configured default store.
    #[must_use]
    pub const fn default_store(&self) -> &StoreSlug {
        &self.default_store
    }

    /// Resolves the store a call is scoped to.
    ///
    /// An explicit, non-blank slug wins over the default store.
    #[must_use]
    pub fn store_scope<'a>(&'a self, store: Option<&'a str>) -> &'a str {
        let default = self.default_store.as_ref();
        match store.map(str::trim).filter(|slug| !slug.is_empty()) {
            Some(slug) if slug == default => {
                tracing::debug!("Redundant store override to the default {}", default);
                slug
            }
            Some(slug) => {
                tracing::debug!("Overriding default store {} with {}", default, slug);
                slug
            }
            None => default,
        }
    }

    /// Returns the URL a request would be sent to.
    #[must_use]
    pub fn build_url(&self, request: &FetchRequest) -> Url {
        self.http_client.build_url(request)
    }

    /// Sends any request and decodes the envelope as `T`.
    ///
    /// All resource methods go through here.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails
    /// validation, or [`ContentError::Http`] if it fails in transit.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: &FetchRequest,
    ) -> Result<ContentResponse<T>, ContentError> {
        request.verify()?;
        Ok(self.http_client.get(request).await?)
    }

    async fn fetch_resource<R: ContentResource>(
        &self,
        request: Result<FetchRequest, ContentError>,
    ) -> Result<ContentResponse<R>, ContentError> {
        self.fetch(&request?).await
    }

    // ------------------------------------------------------------------------
    // Request builders
    // ------------------------------------------------------------------------

    /// Request for a single store by slug, or the default store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn store_request(&self, slug: Option<&str>) -> Result<FetchRequest, ContentError> {
        let slug = self.store_scope(slug);
        Ok(FetchRequest::builder(Store::RESOURCE_TYPE)
            .filters(Filters::new().field("slug", slug))
            .populate(Store::POPULATE)
            .build()?)
    }

    /// Request for the public directory of active stores.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn stores_request(
        &self,
        pagination: Pagination,
        sort: Option<&str>,
    ) -> Result<FetchRequest, ContentError> {
        Ok(FetchRequest::builder(Store::RESOURCE_TYPE)
            .populate(STORE_LIST_POPULATE)
            .filters(Filters::new().field("active", FilterNode::eq(true)))
            .pagination(pagination)
            .sort_opt(sort)
            .build()?)
    }

    /// Request for one page of a store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn page_request(
        &self,
        slug: &str,
        store: Option<&str>,
    ) -> Result<FetchRequest, ContentError> {
        let store = self.store_scope(store);
        Ok(FetchRequest::builder(Page::RESOURCE_TYPE)
            .filters(
                Filters::new()
                    .path("store.slug", FilterNode::eq(store))
                    .field("slug", FilterNode::eq(slug)),
            )
            .pagination(SINGLE_PAGE)
            .populate(Page::POPULATE.join(","))
            .build()?)
    }

    /// Request for the active pages of a store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn pages_request(&self, store: Option<&str>) -> Result<FetchRequest, ContentError> {
        let store = self.store_scope(store);
        Ok(FetchRequest::builder(Page::RESOURCE_TYPE)
            .filters(
                Filters::new()
                    .field("Active", FilterNode::eq(true))
                    .path("store.slug", FilterNode::eq(store)),
            )
            .populate(PAGE_LIST_POPULATE)
            .build()?)
    }

    /// Request for one product of a store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn product_request(
        &self,
        slug: &str,
        store: Option<&str>,
    ) -> Result<FetchRequest, ContentError> {
        let store = self.store_scope(store);
        Ok(FetchRequest::builder(Product::RESOURCE_TYPE)
            .filters(
                Filters::new()
                    .path("stores.slug", FilterNode::eq(store))
                    .field("slug", FilterNode::eq(slug)),
            )
            .populate(Product::POPULATE)
            .build()?)
    }

    /// Request for a page of a store's products.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn products_request(
        &self,
        pagination: Pagination,
        sort: Option<&str>,
        store: Option<&str>,
    ) -> Result<FetchRequest, ContentError> {
        let store = self.store_scope(store);
        Ok(FetchRequest::builder(Product::RESOURCE_TYPE)
            .filters(Filters::new().path("stores.slug", FilterNode::eq(store)))
            .sort_opt(sort)
            .pagination(pagination)
            .populate(Product::POPULATE)
            .build()?)
    }

    /// Request for one event of a store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn event_request(
        &self,
        slug: &str,
        store: Option<&str>,
    ) -> Result<FetchRequest, ContentError> {
        let store = self.store_scope(store);
        Ok(FetchRequest::builder(Event::RESOURCE_TYPE)
            .filters(
                Filters::new()
                    .path("stores.slug", FilterNode::eq(store))
                    .field("slug", FilterNode::eq(slug)),
            )
            .populate(Event::POPULATE)
            .build()?)
    }

    /// Request for all events of a store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn events_request(&self, store: Option<&str>) -> Result<FetchRequest, ContentError> {
        let store = self.store_scope(store);
        Ok(FetchRequest::builder(Event::RESOURCE_TYPE)
            .filters(Filters::new().path("stores.slug", FilterNode::eq(store)))
            .populate(Event::POPULATE)
            .build()?)
    }

    /// Request for one article of a store, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn post_request(
        &self,
        slug: &str,
        store: Option<&str>,
    ) -> Result<FetchRequest, ContentError> {
        let store = self.store_scope(store);
        Ok(FetchRequest::builder(Article::RESOURCE_TYPE)
            .filters(
                Filters::new()
                    .field("slug", FilterNode::eq(slug))
                    .path("store.slug", FilterNode::eq(store)),
            )
            .populate(Article::POPULATE)
            .sort(NEWEST_FIRST)
            .build()?)
    }

    /// Request for a page of a store's articles.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn posts_request(
        &self,
        pagination: Pagination,
        sort: Option<&str>,
        store: Option<&str>,
    ) -> Result<FetchRequest, ContentError> {
        let store = self.store_scope(store);
        Ok(FetchRequest::builder(Article::RESOURCE_TYPE)
            .sort_opt(sort)
            .filters(Filters::new().path("store.slug", FilterNode::eq(store)))
            .pagination(pagination)
            .populate(Article::POPULATE)
            .build()?)
    }

    /// Request for one album of a store, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidRequest`] if the request fails validation.
    pub fn album_request(
        &self,
        slug: &str,
        store: Option<&str>,
    ) -> Result<FetchRequest, ContentError> {
        let store = self.store_scope(store);
        Ok(FetchRequest::builder(Album::RESOURCE_TYPE)
            .filters(
                Filters::new()
                    .field("slug", FilterNode::eq(slug))
                    .path("store.slug", FilterNode::eq(store)),
            )
            .populate(Album::POPULATE)
            .sort(NEWEST_FIRST)
            .build()?)
    }

    // ------------------------------------------------------------------------
    // Resource methods
    // ------------------------------------------------------------------------

    /// Fetches a store by slug, or the default store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_store(&self, slug: Option<&str>) -> Result<ContentResponse<Store>, ContentError> {
        self.fetch_resource(self.store_request(slug)).await
    }

    /// Fetches the directory of active stores.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_stores(
        &self,
        pagination: Pagination,
        sort: Option<&str>,
    ) -> Result<ContentResponse<Store>, ContentError> {
        self.fetch_resource(self.stores_request(pagination, sort))
            .await
    }

    /// Fetches a page of a store, with its albums and their tracks.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_page(
        &self,
        slug: &str,
        store: Option<&str>,
    ) -> Result<ContentResponse<Page>, ContentError> {
        self.fetch_resource(self.page_request(slug, store)).await
    }

    /// Fetches the active pages of a store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_pages(&self, store: Option<&str>) -> Result<ContentResponse<Page>, ContentError> {
        self.fetch_resource(self.pages_request(store)).await
    }

    /// Fetches a product of a store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_product(
        &self,
        slug: &str,
        store: Option<&str>,
    ) -> Result<ContentResponse<Product>, ContentError> {
        self.fetch_resource(self.product_request(slug, store)).await
    }

    /// Fetches a page of a store's products.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_products(
        &self,
        pagination: Pagination,
        sort: Option<&str>,
        store: Option<&str>,
    ) -> Result<ContentResponse<Product>, ContentError> {
        self.fetch_resource(self.products_request(pagination, sort, store))
            .await
    }

    /// Fetches an event of a store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_event(
        &self,
        slug: &str,
        store: Option<&str>,
    ) -> Result<ContentResponse<Event>, ContentError> {
        self.fetch_resource(self.event_request(slug, store)).await
    }

    /// Fetches all events of a store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_events(
        &self,
        store: Option<&str>,
    ) -> Result<ContentResponse<Event>, ContentError> {
        self.fetch_resource(self.events_request(store)).await
    }

    /// Fetches an article of a store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_post(
        &self,
        slug: &str,
        store: Option<&str>,
    ) -> Result<ContentResponse<Article>, ContentError> {
        self.fetch_resource(self.post_request(slug, store)).await
    }

    /// Fetches a page of a store's articles.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_posts(
        &self,
        pagination: Pagination,
        sort: Option<&str>,
        store: Option<&str>,
    ) -> Result<ContentResponse<Article>, ContentError> {
        self.fetch_resource(self.posts_request(pagination, sort, store))
            .await
    }

    /// Fetches an album of a store, with its tracks.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the request is invalid or fails.
    pub async fn get_album(
        &self,
        slug: &str,
        store: Option<&str>,
    ) -> Result<ContentResponse<Album>, ContentError> {
        self.fetch_resource(self.album_request(slug, store)).await
    }
}
