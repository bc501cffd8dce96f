//! Draft store for gallery images.

use super::{attach_staged, missing_image, Draft, Payload};
use crate::attachment::AttachmentSlot;
use crate::errors::AppError;
use crate::models::GalleryItem;

/// Multipart field carrying gallery and promotion images.
pub const IMAGE_FIELD: &str = "image";

/// Working copy of a gallery image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryDraft {
    category: String,
    attachment: AttachmentSlot,
    editing_id: Option<String>,
}

impl GalleryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Category key as stored remotely: lowercase with all whitespace removed.
pub fn category_key(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Draft for GalleryDraft {
    type Entity = GalleryItem;

    fn load_from_entity(&mut self, item: &GalleryItem) {
        *self = Self {
            category: item.category.clone().unwrap_or_default(),
            attachment: AttachmentSlot::persisted(item.image.as_deref()),
            editing_id: Some(item.id.clone()),
        };
    }

    fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.category.trim().is_empty() {
            errors.push("Category is required".to_string());
        }
        errors.extend(missing_image(self, "Image is required"));
        errors
    }

    fn serialize(&self) -> Result<Payload, AppError> {
        let mut payload = Payload::new();
        payload.push_text("category", category_key(&self.category));
        attach_staged(&mut payload, &self.attachment, IMAGE_FIELD);
        Ok(payload)
    }

    fn attachment(&self) -> &AttachmentSlot {
        &self.attachment
    }

    fn attachment_mut(&mut self) -> &mut AttachmentSlot {
        &mut self.attachment
    }
}
