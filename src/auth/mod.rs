//! Session credential capability.
//!
//! The token itself is owned by whatever login flow runs outside this crate. The engine only
//! reads it to build bearer headers and clears it when the remote rejects it.

use std::sync::{Arc, RwLock};

/// Access to the process-wide session credential.
pub trait SessionStore: Send + Sync {
    /// Current bearer token, if the user is signed in.
    fn token(&self) -> Option<String>;

    /// Forget the token, e.g. after the server answered 401.
    fn clear(&self);
}

/// In-memory session, shared by clones.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    token: Arc<RwLock<Option<String>>>,
}

impl MemorySession {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token)),
        }
    }

    /// Replace the stored token.
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

/// Format an `Authorization` header value for a token.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token.trim())
}
