//! Embedded implementation of the CountryApi boundary
//!
//! Wraps an in-process store directly, for running the whole system in
//! one process (demos, tests) without an HTTP hop. Behavior matches
//! the backend handlers: unknown codes are `NotFound`, and the
//! country-file path restriction is the same restricted writer.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use atlas_data::files;
use atlas_model::{CountryDetail, CountryRecord, PoliticalLeader, SyncPayload};
use atlas_store::CountryRecordStore;

use crate::api::{Ack, CountryApi};
use crate::error::{Error, Result};

pub struct LocalCountryApi {
    store: Arc<RwLock<CountryRecordStore>>,
    data_dir: PathBuf,
}

impl LocalCountryApi {
    pub fn new(store: Arc<RwLock<CountryRecordStore>>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            data_dir: data_dir.into(),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, CountryRecordStore>> {
        self.store
            .read()
            .map_err(|_| Error::transport("store lock poisoned"))
    }
}

#[async_trait]
impl CountryApi for LocalCountryApi {
    async fn list_countries(&self) -> Result<Vec<CountryRecord>> {
        Ok(self.read()?.list_countries())
    }

    async fn get_country(&self, code: &str) -> Result<CountryRecord> {
        self.read()?.get_country(code).ok_or_else(|| Error::NotFound {
            code: code.to_string(),
        })
    }

    async fn get_country_with_events(&self, code: &str) -> Result<CountryDetail> {
        self.read()?
            .get_country_with_events(code)
            .ok_or_else(|| Error::NotFound {
                code: code.to_string(),
            })
    }

    async fn get_leader(&self, code: &str) -> Result<PoliticalLeader> {
        self.read()?.get_leader(code).ok_or_else(|| Error::NotFound {
            code: code.to_string(),
        })
    }

    async fn search_countries(&self, query: &str) -> Result<Vec<CountryRecord>> {
        Ok(self.read()?.search_countries(query))
    }

    async fn sync_countries(&self, payload: SyncPayload) -> Result<Ack> {
        let count = payload.countries.len();
        self.store
            .write()
            .map_err(|_| Error::transport("store lock poisoned"))?
            .apply_sync(payload);
        Ok(Ack {
            success: true,
            message: format!("synced {count} countries"),
        })
    }

    async fn put_country_file(&self, path: &str, content: &str) -> Result<Ack> {
        let target = files::resolve_country_file(&self.data_dir, path)
            .map_err(|e| Error::api(e.to_string()))?;
        files::write_atomic(&target, content.as_bytes())
            .map_err(|e| Error::transport(e.to_string()))?;
        Ok(Ack {
            success: true,
            message: format!("wrote {path}"),
        })
    }
}
