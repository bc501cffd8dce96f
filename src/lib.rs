//! Catalog Admin Engine
//!
//! Draft-backed CRUD synchronization for a blog, gallery and promotions catalog served by a
//! remote REST API. Rendering, routing and login live elsewhere; this crate holds the drafts,
//! their invariants, the wire payloads and the reconciliation with the remote collections.

pub mod api;
pub mod attachment;
pub mod auth;
pub mod config;
pub mod draft;
pub mod editor;
pub mod errors;
pub mod models;
pub mod slug;
pub mod sync;

pub use api::ApiClient;
pub use attachment::{AttachmentSlot, StagedFile, MAX_ATTACHMENT_BYTES};
pub use auth::{MemorySession, SessionStore};
pub use config::Config;
pub use draft::{Draft, GalleryDraft, Payload, PostDraft, PromotionDraft, RepeatableList};
pub use editor::Editor;
pub use errors::AppError;
pub use models::{Entity, EntityKind, GalleryItem, Post, Promotion};
pub use slug::derive_slug;
pub use sync::{LoadStatus, MutationGuard, MutationPermit, Synchronizer};
