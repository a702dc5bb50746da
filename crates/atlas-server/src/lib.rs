//! REST surface for the Political Atlas record store
//!
//! A deliberately thin layer: handlers translate HTTP to store calls
//! and back. All state lives in [`state::AppState`]; the only
//! filesystem access is the restricted authored-module writer from
//! `atlas_data::files`.

pub mod error;
pub mod routes;
pub mod state;

pub use error::{Error, Result};
pub use state::AppState;
