//! Sync payload
//!
//! The projected arrays posted to the record store's mutation entry
//! point. One payload may carry any number of countries; the store
//! treats each code in it as an insert-or-overwrite.

use serde::{Deserialize, Serialize};

use crate::country::{CountryRecord, PoliticalEvent, PoliticalLeader};
use crate::data::CountryData;

/// Bulk projection of authored records, as sent across the process
/// boundary to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    pub countries: Vec<CountryRecord>,
    pub events: Vec<PoliticalEvent>,
    pub leaders: Vec<PoliticalLeader>,
}

impl SyncPayload {
    /// Project a set of authored records into one payload.
    pub fn from_dataset<'a>(entries: impl IntoIterator<Item = &'a CountryData>) -> Self {
        let mut payload = Self::default();
        for entry in entries {
            let (record, events, leader) = entry.project();
            payload.countries.push(record);
            payload.events.extend(events);
            payload.leaders.extend(leader);
        }
        payload
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
