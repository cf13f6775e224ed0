//! Product resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, Media, Price, Seo};
use super::store::Store;
use super::ContentResource;

/// A product sold by one or more stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Numeric id.
    pub id: Option<u64>,
    /// Stable document id.
    pub document_id: Option<String>,
    /// Display name.
    #[serde(rename = "Name")]
    pub name: Option<String>,
    /// URL slug, unique within its store.
    pub slug: Option<String>,
    /// Plain text description.
    #[serde(rename = "Description")]
    pub description: Option<String>,
    /// Primary image.
    #[serde(rename = "Thumbnail")]
    pub thumbnail: Option<Media>,
    /// Gallery images.
    #[serde(rename = "Slides", default, deserialize_with = "null_as_empty")]
    pub slides: Vec<Media>,
    /// Price options.
    #[serde(rename = "PRICES", default, deserialize_with = "null_as_empty")]
    pub prices: Vec<Price>,
    /// Search and social metadata.
    #[serde(rename = "SEO")]
    pub seo: Option<Seo>,
    /// Products are many-to-many with stores, hence `stores.slug` filters.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stores: Vec<Store>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Publication time, absent for drafts.
    pub published_at: Option<DateTime<Utc>>,
}

impl ContentResource for Product {
    const RESOURCE_TYPE: &'static str = "products";
    const POPULATE: &'static [&'static str] =
        &["SEO.socialImage", "Thumbnail", "Slides", "PRICES", "stores"];
}
