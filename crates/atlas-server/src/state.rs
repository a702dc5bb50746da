//! Shared handler state

use std::path::PathBuf;
use std::sync::RwLock;

use atlas_store::CountryRecordStore;

/// State behind every handler: the record store and the root directory
/// the country-file endpoint is allowed to write under.
pub struct AppState {
    pub store: RwLock<CountryRecordStore>,
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new(store: CountryRecordStore, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: RwLock::new(store),
            data_dir: data_dir.into(),
        }
    }
}
