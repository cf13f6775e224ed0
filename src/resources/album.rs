//! Album and track resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, Link, Media, Seo};
use super::store::Store;
use super::ContentResource;

/// A collection of tracks published by a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Numeric id.
    pub id: Option<u64>,
    /// Stable document id.
    pub document_id: Option<String>,
    /// Display title.
    pub title: Option<String>,
    /// URL slug, unique within its store.
    pub slug: Option<String>,
    /// Plain text description.
    pub description: Option<String>,
    /// Rich text blocks.
    pub content: Option<serde_json::Value>,
    /// Cover image.
    pub cover: Option<Media>,
    /// Search and social metadata.
    #[serde(rename = "SEO")]
    pub seo: Option<Seo>,
    /// Tracks in album order; needs `tracks` populated.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tracks: Vec<Track>,
    /// Owning store; needs `store` populated.
    pub store: Option<Box<Store>>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Publication time, absent for drafts.
    pub published_at: Option<DateTime<Utc>>,
}

impl ContentResource for Album {
    const RESOURCE_TYPE: &'static str = "albums";
    const POPULATE: &'static [&'static str] = &[
        "SEO.socialImage",
        "tracks",
        "tracks.SEO",
        "tracks.SEO.socialImage",
        "tracks.media",
        "tracks.urls",
        "cover",
    ];
}

/// A single entry of an album.
///
/// Tracks are only ever fetched through their album, so they have no
/// collection of their own here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Numeric id.
    pub id: Option<u64>,
    /// Stable document id.
    pub document_id: Option<String>,
    /// Display title.
    pub title: Option<String>,
    /// URL slug, unique within its store.
    pub slug: Option<String>,
    /// Plain text description.
    pub description: Option<String>,
    /// Rich text blocks.
    pub content: Option<serde_json::Value>,
    /// Audio or video files.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub media: Vec<Media>,
    /// Outbound links, e.g. streaming services.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub urls: Vec<Link>,
    /// Search and social metadata.
    #[serde(rename = "SEO")]
    pub seo: Option<Seo>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_album_with_populated_tracks() {
        let album: Album = serde_json::from_value(json!({
            "id": 3,
            "documentId": "alb-1",
            "title": "Live at the Hall",
            "slug": "live-at-the-hall",
            "cover": { "url": "/uploads/cover.jpg" },
            "SEO": { "metaDescription": "Recorded live." },
            "tracks": [
                {
                    "title": "Opening",
                    "slug": "opening",
                    "media": [{ "url": "/uploads/opening.mp3", "mime": "audio/mpeg" }],
                    "urls": null,
                    "SEO": { "socialImage": { "url": "/uploads/opening.png" } }
                },
                { "title": "Encore", "slug": "encore" }
            ]
        }))
        .unwrap();

        assert_eq!(album.tracks.len(), 2);
        assert_eq!(album.tracks[0].media[0].mime.as_deref(), Some("audio/mpeg"));
        assert!(album.tracks[0].urls.is_empty());
        assert!(album.tracks[1].seo.is_none());
        assert_eq!(
            album.seo.unwrap().meta_description.as_deref(),
            Some("Recorded live.")
        );
    }

    #[test]
    fn test_album_without_tracks_populated() {
        let album: Album = serde_json::from_value(json!({ "slug": "demo" })).unwrap();
        assert!(album.tracks.is_empty());
        assert!(album.cover.is_none());
    }
}
