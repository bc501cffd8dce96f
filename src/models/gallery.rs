//! Gallery image model.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// Categories offered by the gallery upload form.
pub const GALLERY_CATEGORIES: &[&str] = &[
    "Face",
    "Breast",
    "Body",
    "Medspa",
    "Hair",
    "Cosmetic Gynecology",
];

/// A persisted gallery image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// URL of the stored image
    #[serde(default)]
    pub image: Option<String>,
    /// Normalized category key, e.g. `cosmeticgynecology`
    #[serde(default)]
    pub category: Option<String>,
}

impl Entity for GalleryItem {
    const KIND: EntityKind = EntityKind::GalleryItem;

    fn id(&self) -> &str {
        &self.id
    }
}
