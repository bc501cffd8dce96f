//! Editor: one draft bound to one collection.
//!
//! This is the surface a UI drives. It owns the draft, submits it through the synchronizer, and
//! keeps the error and notice slots the UI displays. The draft is reset after every successful
//! submit, and after a successful delete of the entity it was editing.

use crate::attachment::StagedFile;
use crate::draft::Draft;
use crate::errors::AppError;
use crate::models::Entity;
use crate::sync::Synchronizer;

/// Draft plus collection for one entity kind.
pub struct Editor<D: Draft> {
    draft: D,
    collection: Synchronizer<D::Entity>,
    error: Option<String>,
    notice: Option<String>,
}

impl<D: Draft> Editor<D> {
    pub fn new(collection: Synchronizer<D::Entity>) -> Self {
        Self {
            draft: D::default(),
            collection,
            error: None,
            notice: None,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Field edits go straight to the draft.
    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn collection(&self) -> &Synchronizer<D::Entity> {
        &self.collection
    }

    /// Message to show in the form's error slot.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Success message from the last submit.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Initial load of the collection.
    pub async fn open(&mut self) -> Result<(), AppError> {
        self.collection.refresh().await.inspect_err(|e| self.record(e))
    }

    /// Start editing an existing entity.
    pub fn edit(&mut self, entity: &D::Entity) {
        self.draft.load_from_entity(entity);
        self.error = None;
        self.notice = None;
    }

    /// Throw the draft away and start a blank one.
    pub fn clear(&mut self) {
        self.draft.reset();
        self.error = None;
    }

    /// Stage an image on the draft, recording size rejections in the error slot.
    ///
    /// A successful stage clears any earlier error.
    pub async fn stage_attachment(&mut self, file: StagedFile) -> Result<(), AppError> {
        let result = self.draft.stage_attachment(file).await;
        match &result {
            Ok(()) => self.error = None,
            Err(e) => self.record(e),
        }
        result
    }

    /// Validate, then create or update depending on whether an entity is being edited.
    ///
    /// Validation failures never reach the network. On success the collection has been
    /// refetched and the draft is blank again; on failure the draft is left as it was.
    pub async fn submit(&mut self) -> Result<(), AppError> {
        self.draft.validate().inspect_err(|e| self.record(e))?;
        let payload = self.draft.serialize().inspect_err(|e| self.record(e))?;

        let editing_id = self.draft.editing_id().map(str::to_string);
        let result = match &editing_id {
            Some(id) => self.collection.update(id, &payload).await,
            None => self.collection.create(&payload).await,
        };
        result.inspect_err(|e| self.record(e))?;

        let action = if editing_id.is_some() { "updated" } else { "created" };
        self.notice = Some(format!(
            "{} {} successfully!",
            <D::Entity as Entity>::KIND.label(),
            action
        ));
        self.error = None;
        self.draft.reset();
        Ok(())
    }

    /// Delete an entity; if it is the one being edited, the draft goes back to blank.
    pub async fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.collection
            .delete(id)
            .await
            .inspect_err(|e| self.record(e))?;

        if self.draft.editing_id() == Some(id) {
            self.draft.reset();
        }
        Ok(())
    }

    /// Put an error in the slot. A rejected concurrent submit is a silent no-op.
    fn record(&mut self, err: &AppError) {
        if *err != AppError::AlreadyInFlight {
            self.error = Some(err.message());
        }
    }
}
