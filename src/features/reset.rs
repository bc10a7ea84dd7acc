//! Shared "reset all ratings" capability
//!
//! The application root creates one [`ResetHandle`] and hands clones to
//! every trigger (header toolbar, keyboard shortcut) and to the rating list.
//! While the list is mounted it holds a [`ResetRegistration`]; triggers only
//! succeed while a registration is alive, so firing the handle after the
//! list went away does nothing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Default)]
pub struct ResetHandle {
    registrations: Arc<AtomicUsize>,
}

impl ResetHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reset target; it stays registered until the guard drops
    pub fn register(&self) -> ResetRegistration {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Reset target registered");
        ResetRegistration {
            registrations: self.registrations.clone(),
        }
    }

    pub fn is_registered(&self) -> bool {
        self.registrations.load(Ordering::SeqCst) > 0
    }

    /// Fire the capability from outside the list.
    ///
    /// Returns `true` when a target is registered and the reset flow should
    /// start; `false` (and nothing happens) otherwise.
    pub fn trigger(&self) -> bool {
        let registered = self.is_registered();
        if !registered {
            tracing::debug!("Reset triggered with no registered target, ignoring");
        }
        registered
    }
}

/// Keeps a reset target registered while alive
#[derive(Debug)]
pub struct ResetRegistration {
    registrations: Arc<AtomicUsize>,
}

impl Drop for ResetRegistration {
    fn drop(&mut self) {
        self.registrations.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!("Reset target deregistered");
    }
}
