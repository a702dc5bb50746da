//! CountryApi boundary trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use atlas_model::{CountryDetail, CountryRecord, PoliticalLeader, SyncPayload};

use crate::error::Result;

/// Acknowledgement returned by the backend's mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

/// The process boundary to the record store.
///
/// Lookup methods fail with `Error::NotFound` for unknown codes;
/// a known code with no events yields an empty list inside the detail,
/// not an error.
#[async_trait]
pub trait CountryApi: Send + Sync {
    async fn list_countries(&self) -> Result<Vec<CountryRecord>>;

    async fn get_country(&self, code: &str) -> Result<CountryRecord>;

    async fn get_country_with_events(&self, code: &str) -> Result<CountryDetail>;

    async fn get_leader(&self, code: &str) -> Result<PoliticalLeader>;

    async fn search_countries(&self, query: &str) -> Result<Vec<CountryRecord>>;

    /// Push a projected payload into the store. A non-success
    /// acknowledgement surfaces as `Error::Api`.
    async fn sync_countries(&self, payload: SyncPayload) -> Result<Ack>;

    /// Persist authored-module source through the restricted writer.
    async fn put_country_file(&self, path: &str, content: &str) -> Result<Ack>;
}
