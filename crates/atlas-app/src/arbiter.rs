//! Selection ownership arbitration
//!
//! At most one panel drives the shared selection at a time. The
//! arbiter hands out that ownership: claiming it displaces whoever
//! held it, and an in-flight fetch that has lost the claim must drop
//! its result instead of applying it.

use std::sync::Mutex;

use tracing::debug;
use uuid::Uuid;

/// Identity of one panel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(Uuid);

impl PanelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PanelId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Tracks which panel currently owns the selection.
///
/// Injected into every panel rather than living in a global, so tests
/// and multi-surface setups each get their own arbitration domain.
#[derive(Debug, Default)]
pub struct SelectionArbiter {
    holder: Mutex<Option<PanelId>>,
}

impl SelectionArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership for `id`, displacing any previous holder.
    pub fn claim(&self, id: PanelId) {
        let mut holder = self.lock();
        if let Some(previous) = holder.filter(|&p| p != id) {
            debug!(%previous, new = %id, "selection ownership displaced");
        }
        *holder = Some(id);
    }

    pub fn is_holder(&self, id: PanelId) -> bool {
        *self.lock() == Some(id)
    }

    /// Give up ownership. A no-op when `id` is not the holder, so a
    /// closing panel never clobbers a claim it already lost.
    pub fn release(&self, id: PanelId) {
        let mut holder = self.lock();
        if *holder == Some(id) {
            *holder = None;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<PanelId>> {
        // The guarded value is a plain copy type; a poisoned lock
        // cannot leave it torn.
        self.holder.lock().unwrap_or_else(|p| p.into_inner())
    }
}
