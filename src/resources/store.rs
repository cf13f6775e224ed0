//! Store resource.
//!
//! A store is the tenant every other resource is scoped to. Its slug is the
//! value matched by the `store.slug` / `stores.slug` filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, Link, Media, Seo};
use super::ContentResource;

/// A storefront profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Numeric id.
    pub id: Option<u64>,
    /// Stable document id.
    pub document_id: Option<String>,
    /// Display name.
    pub title: Option<String>,
    /// URL slug, unique per store.
    pub slug: Option<String>,
    /// Markdown description.
    #[serde(rename = "Description")]
    pub description: Option<String>,
    /// Whether the store is listed publicly.
    pub active: Option<bool>,
    /// Square logo image.
    #[serde(rename = "Logo")]
    pub logo: Option<Media>,
    /// Banner image for the store profile.
    #[serde(rename = "Cover")]
    pub cover: Option<Media>,
    /// Browser tab icon.
    #[serde(rename = "Favicon")]
    pub favicon: Option<Media>,
    /// Search and social metadata.
    #[serde(rename = "SEO")]
    pub seo: Option<Seo>,
    /// Outbound links shown on the store profile.
    #[serde(rename = "URLS", default, deserialize_with = "null_as_empty")]
    pub urls: Vec<Link>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Publication time, absent for drafts.
    pub published_at: Option<DateTime<Utc>>,
}

impl ContentResource for Store {
    const RESOURCE_TYPE: &'static str = "stores";
    const POPULATE: &'static [&'static str] =
        &["Logo", "SEO.socialImage", "Favicon", "URLS", "Cover"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_deserialization() {
        let store: Store = serde_json::from_value(json!({
            "id": 1,
            "documentId": "k2j3h4",
            "title": "Acme Records",
            "slug": "acme",
            "Description": "Independent label.",
            "active": true,
            "Logo": { "url": "/uploads/logo.png" },
            "SEO": { "metaTitle": "Acme", "socialImage": null },
            "URLS": [{ "id": 7, "Label": "Bandcamp", "URL": "https://acme.bandcamp.com" }],
            "createdAt": "2024-11-02T10:15:00.000Z"
        }))
        .unwrap();

        assert_eq!(store.slug.as_deref(), Some("acme"));
        assert_eq!(store.description.as_deref(), Some("Independent label."));
        assert_eq!(store.logo.unwrap().url.as_deref(), Some("/uploads/logo.png"));
        assert!(store.seo.unwrap().social_image.is_none());
        assert_eq!(store.urls.len(), 1);
        assert_eq!(store.urls[0].label.as_deref(), Some("Bandcamp"));
        assert!(store.created_at.is_some());
        assert!(store.cover.is_none());
    }

    #[test]
    fn test_store_minimal_payload() {
        let store: Store = serde_json::from_value(json!({ "slug": "acme" })).unwrap();
        assert!(store.urls.is_empty());
        assert!(store.title.is_none());
    }
}
