//! Article (blog post) resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, Media, Seo, Tag};
use super::store::Store;
use super::ContentResource;

/// A blog post published by a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Numeric id.
    pub id: Option<u64>,
    /// Stable document id.
    pub document_id: Option<String>,
    /// Display title.
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// URL slug, unique within its store.
    pub slug: Option<String>,
    /// Rich text blocks.
    #[serde(rename = "Content")]
    pub content: Option<serde_json::Value>,
    /// Tags.
    #[serde(rename = "Tags", default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
    /// Cover image.
    pub cover: Option<Media>,
    /// Search and social metadata.
    #[serde(rename = "SEO")]
    pub seo: Option<Seo>,
    /// Owning store; needs `store` populated.
    pub store: Option<Box<Store>>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Publication time, absent for drafts.
    pub published_at: Option<DateTime<Utc>>,
}

impl ContentResource for Article {
    const RESOURCE_TYPE: &'static str = "articles";
    const POPULATE: &'static [&'static str] = &["SEO.socialImage", "Tags", "cover", "store"];
}
