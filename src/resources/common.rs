//! Shared component types embedded in several content models.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes a relation list that the backend may send as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An uploaded media file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Numeric id.
    pub id: Option<u64>,
    /// Stable document id.
    pub document_id: Option<String>,
    /// Original file name.
    pub name: Option<String>,
    /// Alt text.
    pub alternative_text: Option<String>,
    /// Caption.
    pub caption: Option<String>,
    /// Pixel width, for images.
    pub width: Option<u32>,
    /// Pixel height, for images.
    pub height: Option<u32>,
    /// MIME type.
    pub mime: Option<String>,
    /// Public URL of the file.
    pub url: Option<String>,
    /// Resized variants keyed by format name.
    pub formats: Option<serde_json::Value>,
}

/// SEO metadata component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    /// Component id.
    pub id: Option<u64>,
    /// Document title for search results.
    pub meta_title: Option<String>,
    /// Summary for search results.
    pub meta_description: Option<String>,
    /// Canonical URL.
    pub meta_url: Option<String>,
    /// Comma-separated keywords.
    pub meta_keywords: Option<String>,
    /// Author name.
    pub meta_author: Option<String>,
    /// Image used for social sharing cards; needs `SEO.socialImage` populated.
    pub social_image: Option<Media>,
}

/// A labelled outbound link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Component id.
    pub id: Option<u64>,
    /// Link text.
    #[serde(rename = "Label")]
    pub label: Option<String>,
    /// Target URL.
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

/// A tag attached to events and articles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Component id.
    pub id: Option<u64>,
    /// Tag text.
    #[serde(rename = "Label")]
    pub label: Option<String>,
    /// Display color name.
    #[serde(rename = "Color")]
    pub color: Option<String>,
}

/// A product price option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Component id.
    pub id: Option<u64>,
    /// Option label, e.g. a size.
    #[serde(rename = "Name")]
    pub name: Option<String>,
    /// Option description.
    #[serde(rename = "Description")]
    pub description: Option<String>,
    /// Amount in the currency's major unit.
    #[serde(rename = "Price")]
    pub amount: Option<f64>,
    /// Lowercase ISO currency code.
    #[serde(rename = "Currency")]
    pub currency: Option<String>,
    /// Identifier of the matching price at the payment provider.
    #[serde(rename = "STRIPE_ID")]
    pub stripe_id: Option<String>,
}
