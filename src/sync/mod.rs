//! Collection synchronizer.
//!
//! Owns the authoritative local copy of one remote collection. The list is only ever replaced
//! wholesale by `refresh`; mutations never patch it, they trigger a refetch once the server has
//! confirmed them.

mod guard;

pub use guard::*;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::ApiClient;
use crate::draft::Payload;
use crate::errors::AppError;
use crate::models::{Entity, Post};

/// Load state of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Never fetched
    Idle,
    /// A fetch is outstanding
    Loading,
    /// The last fetch succeeded
    Populated,
    /// The last fetch failed; any earlier items are still shown
    LoadError(String),
}

/// Which mutation is being performed, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MutationKind {
    Create,
    Update,
    Delete,
}

struct CollectionState<E> {
    items: Vec<E>,
    status: LoadStatus,
    /// Ticket handed to the most recently started refresh
    issued: u64,
    /// Ticket of the refresh whose result is currently shown
    applied: u64,
}

impl<E> CollectionState<E> {
    fn revert_loading(&mut self, ticket: u64, previous: LoadStatus) {
        if self.issued == ticket && self.status == LoadStatus::Loading {
            self.status = previous;
        }
    }
}

/// Puts the status back if a refresh is dropped before its result is applied.
struct LoadingReset<E: Entity> {
    state: Arc<RwLock<CollectionState<E>>>,
    ticket: u64,
    previous: Option<LoadStatus>,
}

impl<E: Entity> LoadingReset<E> {
    fn disarm(mut self) {
        self.previous = None;
    }
}

impl<E: Entity> Drop for LoadingReset<E> {
    fn drop(&mut self) {
        let Some(previous) = self.previous.take() else {
            return;
        };
        let ticket = self.ticket;
        tracing::debug!(ticket, "{} refresh dropped before completion", E::KIND.noun());

        if let Ok(mut state) = self.state.try_write() {
            state.revert_loading(ticket, previous);
            return;
        }
        // Lock is busy; finish the revert on the runtime if there is one.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let state = Arc::clone(&self.state);
            handle.spawn(async move {
                state.write().await.revert_loading(ticket, previous);
            });
        }
    }
}

/// Local mirror of one remote collection. Clones share state.
pub struct Synchronizer<E: Entity> {
    client: ApiClient,
    guard: MutationGuard,
    state: Arc<RwLock<CollectionState<E>>>,
}

impl<E: Entity> Clone for Synchronizer<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            guard: self.guard.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<E: Entity> Synchronizer<E> {
    /// `guard` should be the one shared by every synchronizer of the process.
    pub fn new(client: ApiClient, guard: MutationGuard) -> Self {
        Self {
            client,
            guard,
            state: Arc::new(RwLock::new(CollectionState {
                items: Vec::new(),
                status: LoadStatus::Idle,
                issued: 0,
                applied: 0,
            })),
        }
    }

    /// Refetch the whole collection.
    ///
    /// On failure the previous items stay in place and the status records the error. Results of
    /// a refresh overtaken by a later one are discarded.
    pub async fn refresh(&self) -> Result<(), AppError> {
        let reset = {
            let mut state = self.state.write().await;
            state.issued += 1;
            let previous = std::mem::replace(&mut state.status, LoadStatus::Loading);
            LoadingReset {
                state: Arc::clone(&self.state),
                ticket: state.issued,
                previous: Some(previous),
            }
        };
        let ticket = reset.ticket;

        let result = self.client.list::<E>().await;

        let mut state = self.state.write().await;
        reset.disarm();
        if ticket < state.applied {
            tracing::debug!(ticket, "Discarding stale {} refresh", E::KIND.noun());
            return result.map(|_| ());
        }
        state.applied = ticket;

        match result {
            Ok(items) => {
                tracing::info!("Loaded {} {}", items.len(), E::KIND.plural());
                state.items = items;
                state.status = LoadStatus::Populated;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", E::KIND.plural(), e);
                state.status = LoadStatus::LoadError(e.message());
                Err(e)
            }
        }
    }

    /// Create a new entity, then refetch.
    pub async fn create(&self, payload: &Payload) -> Result<(), AppError> {
        self.mutate(MutationKind::Create, None, payload).await
    }

    /// Replace entity `id`, then refetch.
    pub async fn update(&self, id: &str, payload: &Payload) -> Result<(), AppError> {
        self.mutate(MutationKind::Update, Some(id), payload).await
    }

    /// Delete entity `id`, then refetch.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.mutate(MutationKind::Delete, Some(id), &Payload::new())
            .await
    }

    async fn mutate(
        &self,
        kind: MutationKind,
        id: Option<&str>,
        payload: &Payload,
    ) -> Result<(), AppError> {
        let permit = self.guard.try_acquire().inspect_err(|_| {
            tracing::warn!(?kind, "Rejected {} mutation: another is in flight", E::KIND.noun());
        })?;

        let result = match (kind, id) {
            (MutationKind::Create, _) => self.client.create::<E>(payload).await,
            (MutationKind::Update, Some(id)) => self.client.update::<E>(id, payload).await,
            (MutationKind::Delete, Some(id)) => self.client.delete::<E>(id).await,
            (_, None) => Err(AppError::Internal(format!("{:?} requires an id", kind))),
        };
        permit.release();
        result?;

        tracing::info!(?kind, id = id.unwrap_or_default(), "{} mutation confirmed", E::KIND.noun());

        // The mutation stands even if the follow-up fetch fails; the failure is in `status`.
        if let Err(e) = self.refresh().await {
            tracing::warn!("Refresh after {:?} failed: {}", kind, e);
        }
        Ok(())
    }

    /// Snapshot of the current items.
    pub async fn items(&self) -> Vec<E> {
        self.state.read().await.items.clone()
    }

    pub async fn status(&self) -> LoadStatus {
        self.state.read().await.status.clone()
    }

    /// Message of the last failed refresh, if the last refresh failed.
    pub async fn load_error(&self) -> Option<String> {
        match &self.state.read().await.status {
            LoadStatus::LoadError(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Find a loaded entity by id.
    pub async fn find(&self, id: &str) -> Option<E> {
        self.state
            .read()
            .await
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    pub fn guard(&self) -> &MutationGuard {
        &self.guard
    }
}

impl Synchronizer<Post> {
    /// Fetch one post by slug for the detail view. Does not touch the collection.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Post, AppError> {
        self.client.post_by_slug(slug).await
    }
}
