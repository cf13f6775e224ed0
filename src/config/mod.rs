//! Configuration types for the content client.
//!
//! The store context (base URL and default store slug) is read once when the
//! client is constructed and never changes for the client's lifetime.
//!
//! # Overview
//!
//! - [`ContentConfig`]: the immutable store context
//! - [`ContentConfigBuilder`]: a builder for [`ContentConfig`]
//! - [`BaseUrl`]: a validated absolute API base URL
//! - [`StoreSlug`]: a validated default store slug
//!
//! # Example
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

mod newtypes;

pub use newtypes::{BaseUrl, StoreSlug};

use crate::error::ConfigError;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "STRAPI_URL";

/// Environment variable holding the default store slug.
pub const STORE_SLUG_ENV: &str = "STORE_SLUG";

/// Base URL used when [`BASE_URL_ENV`] is unset.
pub const DEFAULT_BASE_URL: &str = "https://api.markket.place";

/// Store slug used when [`STORE_SLUG_ENV`] is unset.
pub const DEFAULT_STORE_SLUG: &str = "markket";

/// Configuration for the content client.
///
/// # Thread Safety
///
/// `ContentConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ContentConfig {
    base_url: BaseUrl,
    default_store: StoreSlug,
    user_agent_prefix: Option<String>,
}

impl ContentConfig {
    /// Creates a new builder for constructing a `ContentConfig`.
    #[must_use]
    pub fn builder() -> ContentConfigBuilder {
        ContentConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads [`BASE_URL_ENV`] and [`STORE_SLUG_ENV`], falling back to
    /// [`DEFAULT_BASE_URL`] and [`DEFAULT_STORE_SLUG`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either value fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either value fails validation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_content::ContentConfig;
    ///
    /// let config = ContentConfig::from_lookup(|key| match key {
    ///     "STORE_SLUG" => Some("acme".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.base_url().as_ref(), "https://api.markket.place/");
    /// assert_eq!(config.default_store().as_ref(), "acme");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, fallback: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self::builder()
            .base_url(BaseUrl::new(read(BASE_URL_ENV, DEFAULT_BASE_URL))?)
            .default_store(StoreSlug::new(read(STORE_SLUG_ENV, DEFAULT_STORE_SLUG))?)
            .build()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the store used when a call does not name one.
    #[must_use]
    pub const fn default_store(&self) -> &StoreSlug {
        &self.default_store
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ContentConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContentConfig>();
};

/// Builder for constructing [`ContentConfig`] instances.
///
/// `base_url` and `default_store` are required.
#[derive(Debug, Default)]
pub struct ContentConfigBuilder {
    base_url: Option<BaseUrl>,
    default_store: Option<StoreSlug>,
    user_agent_prefix: Option<String>,
}

impl ContentConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the default store slug (required).
    #[must_use]
    pub fn default_store(mut self, slug: StoreSlug) -> Self {
        self.default_store = Some(slug);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ContentConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `default_store` are not set.
    pub fn build(self) -> Result<ContentConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let default_store = self
            .default_store
            .ok_or(ConfigError::MissingRequiredField {
                field: "default_store",
            })?;

        Ok(ContentConfig {
            base_url,
            default_store,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = ContentConfigBuilder::new()
            .default_store(StoreSlug::new("acme").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_requires_default_store() {
        let result = ContentConfigBuilder::new()
            .base_url(BaseUrl::new("https://cms.example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "default_store"
            })
        ));
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = ContentConfig::builder()
            .base_url(BaseUrl::new("https://cms.example.com").unwrap())
            .default_store(StoreSlug::new("acme").unwrap())
            .user_agent_prefix("Storefront/2.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://cms.example.com/");
        assert_eq!(config.default_store().as_ref(), "acme");
        assert_eq!(config.user_agent_prefix(), Some("Storefront/2.0"));
    }

    #[test]
    fn test_from_lookup_uses_defaults_when_unset() {
        let config = ContentConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.markket.place/");
        assert_eq!(config.default_store().as_ref(), DEFAULT_STORE_SLUG);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_from_lookup_prefers_provided_values() {
        let config = ContentConfig::from_lookup(|key| match key {
            BASE_URL_ENV => Some("http://localhost:1337".to_string()),
            STORE_SLUG_ENV => Some("acme".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:1337/");
        assert_eq!(config.default_store().as_ref(), "acme");
    }

    #[test]
    fn test_from_lookup_treats_blank_as_unset() {
        let config = ContentConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.default_store().as_ref(), DEFAULT_STORE_SLUG);
    }

    #[test]
    fn test_from_lookup_rejects_malformed_url() {
        let result = ContentConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "not-a-url".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }
}
