//! Dataset reconciliation
//!
//! Projects the authored static dataset down to the store's shape and
//! pushes it across the process boundary. Sync is not transactional:
//! a transport failure leaves the store in whatever state the last
//! successful sync produced, and nothing is retried automatically.

use std::sync::Arc;

use tracing::{info, warn};

use atlas_data::StaticCountryDataset;
use atlas_model::{CountryData, SyncPayload};

use crate::api::CountryApi;
use crate::cache::CountryCache;
use crate::error::Result;

pub struct DatasetReconciler {
    dataset: Arc<StaticCountryDataset>,
    api: Arc<dyn CountryApi>,
    cache: Arc<CountryCache>,
}

impl DatasetReconciler {
    pub fn new(
        dataset: Arc<StaticCountryDataset>,
        api: Arc<dyn CountryApi>,
        cache: Arc<CountryCache>,
    ) -> Self {
        Self {
            dataset,
            api,
            cache,
        }
    }

    /// Push the entire authored dataset into the store.
    ///
    /// On success the read-side cache is invalidated so the next read
    /// reflects the new data. Returns the number of countries synced.
    pub async fn sync(&self) -> Result<usize> {
        self.push(SyncPayload::from_dataset(self.dataset.all())).await
    }

    /// Push the dataset with one record overlaid on its own code.
    ///
    /// The publish flow saves a draft to disk and then calls this: the
    /// draft replaces the assembled entry for its code (or extends the
    /// set for a brand-new code), so the store serves the edit
    /// immediately rather than after the next assembly.
    pub async fn sync_with(&self, overlay: &CountryData) -> Result<usize> {
        let entries = self
            .dataset
            .all()
            .iter()
            .filter(|entry| entry.code != overlay.code)
            .chain(std::iter::once(overlay));
        self.push(SyncPayload::from_dataset(entries)).await
    }

    async fn push(&self, payload: SyncPayload) -> Result<usize> {
        let count = payload.countries.len();

        let ack = self.api.sync_countries(payload).await.inspect_err(|e| {
            warn!(error = %e, "dataset sync failed");
        })?;

        self.cache.invalidate().await;
        info!(countries = count, message = %ack.message, "dataset synced");
        Ok(count)
    }
}
