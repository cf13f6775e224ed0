//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so the client never
//! holds a base URL it cannot join paths onto, or an empty default store.

use std::fmt;

use reqwest::Url;

use crate::error::ConfigError;

/// A validated base URL for the content API.
///
/// The URL must be absolute and use the `http` or `https` scheme. Its path is
/// normalised to end with `/`, so that joining `api/{resource}` appends to it
/// instead of replacing the last segment.
///
/// # Example
///
/// ```rust
/// use storefront_content::BaseUrl;
///
/// let url = BaseUrl::new("https://cms.example.com/v1").unwrap();
/// assert_eq!(url.as_ref(), "https://cms.example.com/v1/");
///
/// assert!(BaseUrl::new("/relative/only").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed as
    /// an absolute `http`/`https` URL.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim();
        let invalid = || ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
        };

        let mut parsed = Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }
        parsed.set_query(None);
        parsed.set_fragment(None);

        Ok(Self(parsed))
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// A validated store slug.
///
/// The slug identifies the storefront that scopes nearly every query. It is
/// trimmed and must not be empty.
///
/// # Example
///
/// ```rust
/// use storefront_content::StoreSlug;
///
/// let slug = StoreSlug::new("  acme ").unwrap();
/// assert_eq!(slug.as_ref(), "acme");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreSlug(String);

impl StoreSlug {
    /// Creates a new validated store slug.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreSlug`] if the slug is empty after trimming.
    pub fn new(slug: impl Into<String>) -> Result<Self, ConfigError> {
        let slug = slug.into();
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(ConfigError::EmptyStoreSlug);
        }
        Ok(Self(slug.to_string()))
    }
}

impl AsRef<str> for StoreSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
