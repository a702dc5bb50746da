//! Durable selection slot
//!
//! The last selected code survives restarts via a single plain-text
//! file. Writes go through the same temp-then-rename path the authored
//! modules use, so concurrent writers settle on last-write-wins with
//! no torn content.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use atlas_data::files;
use atlas_model::validate_country_code;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SelectionSlot {
    path: PathBuf,
}

impl SelectionSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The persisted code, if the slot holds a valid one. A missing
    /// file or garbled content reads as an empty slot.
    pub fn load(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        let code = content.trim().to_string();
        validate_country_code(&code).then_some(code)
    }

    pub fn store(&self, code: &str) -> Result<()> {
        files::write_atomic(&self.path, code.as_bytes())?;
        debug!(code, "selection slot stored");
        Ok(())
    }

    /// Empty the slot. Clearing an already-empty slot succeeds.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(atlas_data::Error::io(&self.path, e).into()),
        }
    }
}
