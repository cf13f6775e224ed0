//! Typed content models.
//!
//! Each top-level model implements [`ContentResource`], which names the
//! collection it lives in and the relations populated by default when it is
//! fetched. Every field is optional or defaulted: what comes back depends on
//! what was populated, and unpopulated relations are simply absent.
//!
//! | Model | Collection | Default populate |
//! |---|---|---|
//! | [`Store`] | `stores` | Logo, SEO.socialImage, Favicon, URLS, Cover |
//! | [`Page`] | `pages` | SEO.socialImage, store, albums, albums.cover, albums.SEO, albums.tracks |
//! | [`Product`] | `products` | SEO.socialImage, Thumbnail, Slides, PRICES, stores |
//! | [`Event`] | `events` | SEO, SEO.socialImage, Tag, Thumbnail, Slides, stores |
//! | [`Article`] | `articles` | SEO.socialImage, Tags, cover, store |
//! | [`Album`] | `albums` | SEO.socialImage, tracks, tracks.SEO, tracks.SEO.socialImage, tracks.media, tracks.urls, cover |

mod album;
mod article;
mod common;
mod event;
mod page;
mod product;
mod store;

use serde::de::DeserializeOwned;

pub use album::{Album, Track};
pub use article::Article;
pub use common::{Link, Media, Price, Seo, Tag};
pub use event::Event;
pub use page::Page;
pub use product::Product;
pub use store::Store;

/// A content type served from its own collection endpoint.
pub trait ContentResource: DeserializeOwned {
    /// The collection name, used as `api/{RESOURCE_TYPE}`.
    const RESOURCE_TYPE: &'static str;

    /// Relations populated when a single entry is fetched.
    const POPULATE: &'static [&'static str];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_types() {
        assert_eq!(Store::RESOURCE_TYPE, "stores");
        assert_eq!(Page::RESOURCE_TYPE, "pages");
        assert_eq!(Product::RESOURCE_TYPE, "products");
        assert_eq!(Event::RESOURCE_TYPE, "events");
        assert_eq!(Article::RESOURCE_TYPE, "articles");
        assert_eq!(Album::RESOURCE_TYPE, "albums");
    }

    #[test]
    fn test_default_populate_paths() {
        assert_eq!(
            Page::POPULATE.join(","),
            "SEO.socialImage,store,albums,albums.cover,albums.SEO,albums.tracks"
        );
        assert_eq!(
            Album::POPULATE.join(","),
            "SEO.socialImage,tracks,tracks.SEO,tracks.SEO.socialImage,tracks.media,tracks.urls,cover"
        );
        assert_eq!(Store::POPULATE.join(","), "Logo,SEO.socialImage,Favicon,URLS,Cover");
    }
}
