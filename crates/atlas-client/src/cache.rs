//! Read-side memoization
//!
//! Panels hit "all countries" and "country by code" repeatedly; both
//! are memoized here until a reconciliation invalidates them. Detail
//! fetches are deliberately not cached — the selection flow always
//! wants the freshest joined view.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use atlas_model::CountryRecord;

use crate::api::CountryApi;
use crate::error::Result;

pub struct CountryCache {
    api: Arc<dyn CountryApi>,
    all: Mutex<Option<Vec<CountryRecord>>>,
    by_code: Mutex<HashMap<String, CountryRecord>>,
}

impl CountryCache {
    pub fn new(api: Arc<dyn CountryApi>) -> Self {
        Self {
            api,
            all: Mutex::new(None),
            by_code: Mutex::new(HashMap::new()),
        }
    }

    /// All countries, fetched once and reused until invalidated.
    pub async fn list_countries(&self) -> Result<Vec<CountryRecord>> {
        let mut cached = self.all.lock().await;
        if let Some(records) = cached.as_ref() {
            return Ok(records.clone());
        }

        let records = self.api.list_countries().await?;
        *cached = Some(records.clone());
        Ok(records)
    }

    /// One country by code, memoized per code. `NotFound` is not
    /// cached; a later sync may introduce the code.
    pub async fn get_country(&self, code: &str) -> Result<CountryRecord> {
        {
            let cached = self.by_code.lock().await;
            if let Some(record) = cached.get(code) {
                return Ok(record.clone());
            }
        }

        let record = self.api.get_country(code).await?;
        self.by_code
            .lock()
            .await
            .insert(code.to_string(), record.clone());
        Ok(record)
    }

    /// Drop everything; the next read goes back to the boundary.
    pub async fn invalidate(&self) {
        self.all.lock().await.take();
        self.by_code.lock().await.clear();
        debug!("country cache invalidated");
    }
}
