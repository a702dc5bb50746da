//! Application layer for the Political Atlas
//!
//! Coordinates the interactive surfaces on top of the client boundary:
//! which panel owns the shared selection ([`SelectionArbiter`]), how
//! selections travel between surfaces ([`SelectionBus`]), the
//! per-surface fetch state machine ([`SelectionPanel`]), the persisted
//! last selection ([`SelectionSlot`]), and the admin edit-and-publish
//! flow ([`AdminEditSession`]).

pub mod arbiter;
pub mod bus;
pub mod error;
pub mod panel;
pub mod session;
pub mod slot;

pub use arbiter::{PanelId, SelectionArbiter};
pub use bus::{SelectionBus, SelectionEvent};
pub use error::{Error, Result};
pub use panel::{FetchTicket, PanelKind, PanelState, SelectionPanel};
pub use session::{
    AdminEditSession, ChartKind, ChartWarning, FieldError, NEW_COUNTRY_ID, PublishOutcome,
};
pub use slot::SelectionSlot;
