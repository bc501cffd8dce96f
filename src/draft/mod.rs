//! Draft stores: the locally owned working copy of one entity.
//!
//! Every edit to a draft goes through the methods here, which keep the sub-structure
//! invariants (non-empty repeatable lists, duplicate-free tags, a single attachment slot).

mod gallery;
mod list;
mod payload;
mod post;
mod promotion;
mod tags;

pub use gallery::*;
pub use list::*;
pub use payload::*;
pub use post::*;
pub use promotion::*;
pub use tags::*;

use crate::attachment::{AttachmentSlot, StagedFile};
use crate::errors::AppError;
use crate::models::Entity;

/// Behaviour shared by every kind of draft.
pub trait Draft: Default + Send {
    /// The persisted record this draft edits.
    type Entity: Entity;

    /// Replace every field with a copy of `entity` and remember its id.
    fn load_from_entity(&mut self, entity: &Self::Entity);

    /// Id of the entity under edit; `None` for a new entity.
    fn editing_id(&self) -> Option<&str>;

    /// All validation failures, in the order they should be reported.
    fn validation_errors(&self) -> Vec<String>;

    /// Flatten into a submission payload.
    fn serialize(&self) -> Result<Payload, AppError>;

    fn attachment(&self) -> &AttachmentSlot;

    fn attachment_mut(&mut self) -> &mut AttachmentSlot;

    /// First validation failure, if any.
    fn validate(&self) -> Result<(), AppError> {
        match self.validation_errors().into_iter().next() {
            Some(message) => Err(AppError::Validation(message)),
            None => Ok(()),
        }
    }

    /// Back to the blank state, dropping `editing_id`.
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Stage a new image for upload. See [`AttachmentSlot::stage`].
    fn stage_attachment(
        &mut self,
        file: StagedFile,
    ) -> impl std::future::Future<Output = Result<(), AppError>> + Send {
        self.attachment_mut().stage(file)
    }

    /// Drop the staged image.
    fn clear_attachment(&mut self) {
        self.attachment_mut().clear();
    }
}

/// Validation message shared by drafts whose image is mandatory on create.
fn missing_image(draft: &impl Draft, message: &str) -> Option<String> {
    let has_new_image = draft.attachment().staged().is_some();
    (!draft.is_editing() && !has_new_image).then(|| message.to_string())
}

/// Copy a staged image, if any, into the payload under `field`.
fn attach_staged(payload: &mut Payload, slot: &AttachmentSlot, field: &'static str) {
    if let Some(file) = slot.staged() {
        payload.set_file(field, file.clone());
    }
}
