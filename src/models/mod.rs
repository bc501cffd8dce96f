//! Data models for the remote catalog collections.
//!
//! Field names follow the remote JSON exactly; every field except the identifier is optional
//! because older records routinely omit them.

mod gallery;
mod post;
mod promotion;

pub use gallery::*;
pub use post::*;
pub use promotion::*;

use serde::de::DeserializeOwned;

/// The three kinds of record the catalog stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Post,
    GalleryItem,
    Promotion,
}

impl EntityKind {
    /// Collection path relative to the API origin.
    pub fn collection_path(&self) -> &'static str {
        match self {
            EntityKind::Post => "/api/blogs",
            EntityKind::GalleryItem => "/api/gallery",
            EntityKind::Promotion => "/api/specialsPromotions",
        }
    }

    /// Singular noun used in user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Post => "blog",
            EntityKind::GalleryItem => "gallery image",
            EntityKind::Promotion => "promotion",
        }
    }

    /// Capitalized singular noun, for notices.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Post => "Blog",
            EntityKind::GalleryItem => "Gallery image",
            EntityKind::Promotion => "Promotion",
        }
    }

    /// Plural noun used in user-facing messages.
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Post => "blogs",
            EntityKind::GalleryItem => "gallery",
            EntityKind::Promotion => "promotions",
        }
    }
}

/// A record owned by a remote collection.
pub trait Entity: DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Server-assigned identifier.
    fn id(&self) -> &str;
}
