//! Mount-scoped liveness flag for async work started by a view.
//!
//! A list view spawns its fetch on mount and ends its [`ViewLifetime`] in
//! `on_cleanup`. The fetch task checks [`ViewLifetime::is_active`] before
//! writing into view state, so a response landing after unmount is dropped.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag; clones observe the same lifetime.
#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl ViewLifetime {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owning view as unmounted. Idempotent.
    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while the view is still mounted.
    ///
    /// Returns `true` when `apply` ran.
    pub fn deliver(&self, apply: impl FnOnce()) -> bool {
        if !self.is_active() {
            return false;
        }
        apply();
        true
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}
