//! Single-slot limiter for create/update/delete.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::AppError;

/// Process-wide flag allowing one outstanding mutation. Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct MutationGuard {
    busy: Arc<AtomicBool>,
}

impl MutationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot, or fail with `AlreadyInFlight` if a mutation is outstanding.
    pub fn try_acquire(&self) -> Result<MutationPermit, AppError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::AlreadyInFlight)?;

        Ok(MutationPermit {
            busy: Arc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Proof of holding the slot. Releases it when released or dropped.
#[must_use = "dropping the permit frees the mutation slot immediately"]
#[derive(Debug)]
pub struct MutationPermit {
    busy: Arc<AtomicBool>,
}

impl MutationPermit {
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for MutationPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
