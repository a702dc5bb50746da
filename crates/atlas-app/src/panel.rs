//! Per-surface selection state machine
//!
//! A panel owns the lifecycle of one detail surface: resolve the raw
//! name, claim the arbiter, persist the selection, fetch the detail,
//! and apply the result only if the panel still owns the selection and
//! no newer selection superseded the fetch. Stale results are dropped
//! silently; retry is re-selection.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use atlas_client::CountryApi;
use atlas_data::resolve;
use atlas_model::CountryDetail;

use crate::arbiter::{PanelId, SelectionArbiter};
use crate::slot::SelectionSlot;

/// What kind of surface the panel drives. The admin surface treats an
/// unknown code as the start of a create flow rather than a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Viewer,
    Admin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Idle,
    Loading { code: String },
    Ready { code: String, detail: CountryDetail },
    Errored { code: String, error: String },
    /// Admin only: the code resolved but nothing is stored under it.
    Missing { code: String },
}

/// Handle for one in-flight fetch. Carries the generation the panel
/// was at when the selection was made; a later selection invalidates
/// every earlier ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub code: String,
    pub generation: u64,
}

pub struct SelectionPanel {
    id: PanelId,
    kind: PanelKind,
    api: Arc<dyn CountryApi>,
    arbiter: Arc<SelectionArbiter>,
    slot: SelectionSlot,
    state: Mutex<PanelState>,
    generation: AtomicU64,
}

impl SelectionPanel {
    pub fn new(
        kind: PanelKind,
        api: Arc<dyn CountryApi>,
        arbiter: Arc<SelectionArbiter>,
        slot: SelectionSlot,
    ) -> Self {
        Self {
            id: PanelId::new(),
            kind,
            api,
            arbiter,
            slot,
            state: Mutex::new(PanelState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn state(&self) -> PanelState {
        self.lock_state().clone()
    }

    /// Begin selecting `raw_name`.
    ///
    /// Re-selecting the code the panel is already `Ready` on, or
    /// already `Loading`, is a no-op; re-selecting after `Errored` or
    /// `Missing` fetches again (that is the retry path). Otherwise the
    /// panel bumps its generation (invalidating any in-flight fetch),
    /// claims the arbiter, persists the code, enters `Loading`, and
    /// hands back the ticket to drive [`run_fetch`](Self::run_fetch)
    /// with.
    pub fn select(&self, raw_name: &str) -> Option<FetchTicket> {
        let resolution = resolve(raw_name);
        let code = resolution.code().to_string();
        if resolution.is_synthetic() {
            debug!(raw = raw_name, code, "name resolved to synthetic code");
        }

        {
            let state = self.lock_state();
            match &*state {
                PanelState::Ready { code: current, .. }
                | PanelState::Loading { code: current }
                    if *current == code =>
                {
                    return None;
                }
                _ => {}
            }
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.arbiter.claim(self.id);

        // Slot persistence is best-effort; a failed write must not
        // block the selection itself.
        if let Err(e) = self.slot.store(&code) {
            warn!(error = %e, code, "failed to persist selection");
        }

        *self.lock_state() = PanelState::Loading { code: code.clone() };
        Some(FetchTicket { code, generation })
    }

    /// Fetch the detail for a ticket and apply it if still current.
    ///
    /// Currency is checked before the fetch, after it, and again
    /// before the state update: the panel must still hold the arbiter
    /// and the ticket generation must still be the latest. A failed
    /// check drops the result without touching state.
    pub async fn run_fetch(&self, ticket: FetchTicket) {
        if !self.is_current(&ticket) {
            return;
        }

        let result = self.api.get_country_with_events(&ticket.code).await;

        if !self.is_current(&ticket) {
            debug!(code = ticket.code, "discarding stale fetch result");
            return;
        }

        let next = match result {
            Ok(detail) => PanelState::Ready {
                code: ticket.code.clone(),
                detail,
            },
            Err(e) if e.is_not_found() && self.kind == PanelKind::Admin => PanelState::Missing {
                code: ticket.code.clone(),
            },
            Err(e) => PanelState::Errored {
                code: ticket.code.clone(),
                error: e.to_string(),
            },
        };

        if !self.is_current(&ticket) {
            return;
        }
        *self.lock_state() = next;
    }

    /// Tear the panel down: give up the arbiter if held, clear the
    /// persisted selection, return to `Idle`.
    pub fn close(&self) {
        self.arbiter.release(self.id);
        if let Err(e) = self.slot.clear() {
            warn!(error = %e, "failed to clear selection slot");
        }
        *self.lock_state() = PanelState::Idle;
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.arbiter.is_holder(self.id)
            && self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, PanelState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }
}
