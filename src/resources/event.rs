//! Event resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, Media, Seo, Tag};
use super::store::Store;
use super::ContentResource;

/// A dated event hosted by one or more stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
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
    /// Start time.
    pub start_date: Option<DateTime<Utc>>,
    /// End time.
    pub end_date: Option<DateTime<Utc>>,
    /// Tags.
    #[serde(rename = "Tag", default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
    /// Primary image.
    #[serde(rename = "Thumbnail")]
    pub thumbnail: Option<Media>,
    /// Gallery images.
    #[serde(rename = "Slides", default, deserialize_with = "null_as_empty")]
    pub slides: Vec<Media>,
    /// Search and social metadata.
    #[serde(rename = "SEO")]
    pub seo: Option<Seo>,
    /// Stores listing this entry.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stores: Vec<Store>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentResource for Event {
    const RESOURCE_TYPE: &'static str = "events";
    const POPULATE: &'static [&'static str] = &[
        "SEO",
        "SEO.socialImage",
        "Tag",
        "Thumbnail",
        "Slides",
        "stores",
    ];
}
