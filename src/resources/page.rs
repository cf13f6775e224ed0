//! Page resource.
//!
//! Pages are per-store static content ("home", "about"). A page may embed
//! albums, which the storefront renders as a grid below the page body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::album::Album;
use super::common::{null_as_empty, Seo};
use super::store::Store;
use super::ContentResource;

/// A static page belonging to a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Numeric id.
    pub id: Option<u64>,
    /// Stable document id.
    pub document_id: Option<String>,
    /// Display title.
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// URL slug, unique within its store.
    pub slug: Option<String>,
    /// Whether the page is listed in navigation.
    #[serde(rename = "Active")]
    pub active: Option<bool>,
    /// Rich text blocks.
    #[serde(rename = "Content")]
    pub content: Option<serde_json::Value>,
    /// Search and social metadata.
    #[serde(rename = "SEO")]
    pub seo: Option<Seo>,
    /// Owning store; needs `store` populated.
    pub store: Option<Box<Store>>,
    /// Albums embedded in the page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub albums: Vec<Album>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Publication time, absent for drafts.
    pub published_at: Option<DateTime<Utc>>,
}

impl ContentResource for Page {
    const RESOURCE_TYPE: &'static str = "pages";
    const POPULATE: &'static [&'static str] = &[
        "SEO.socialImage",
        "store",
        "albums",
        "albums.cover",
        "albums.SEO",
        "albums.tracks",
    ];
}
