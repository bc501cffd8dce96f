//! Draft store for monthly promotions.

use super::{attach_staged, missing_image, Draft, Payload, IMAGE_FIELD};
use crate::attachment::AttachmentSlot;
use crate::errors::AppError;
use crate::models::Promotion;

/// Working copy of a promotion flyer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionDraft {
    month: String,
    attachment: AttachmentSlot,
    editing_id: Option<String>,
}

impl PromotionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_month(&mut self, month: impl Into<String>) {
        self.month = month.into();
    }

    pub fn month(&self) -> &str {
        &self.month
    }
}

impl Draft for PromotionDraft {
    type Entity = Promotion;

    fn load_from_entity(&mut self, promotion: &Promotion) {
        *self = Self {
            month: promotion.month.clone().unwrap_or_default(),
            attachment: AttachmentSlot::persisted(promotion.image.as_deref()),
            editing_id: Some(promotion.id.clone()),
        };
    }

    fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.month.trim().is_empty() {
            errors.push("Month is required".to_string());
        }
        errors.extend(missing_image(self, "Image is required"));
        errors
    }

    fn serialize(&self) -> Result<Payload, AppError> {
        let mut payload = Payload::new();
        payload.push_text("month", self.month.trim());
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
