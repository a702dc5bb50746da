//! CountryRecordStore implementation

use std::collections::HashMap;

use tracing::debug;

use atlas_model::{CountryDetail, CountryRecord, PoliticalEvent, PoliticalLeader, SyncPayload};

/// In-memory map of country records keyed by code, with per-code event
/// lists and optional leaders.
///
/// Records are never deleted: a sync payload inserts or overwrites the
/// codes it carries and leaves every other code untouched
/// (additive-overwrite, see DESIGN.md). Within a carried code, the
/// event list and leader are replaced wholesale, never merged
/// field-by-field.
#[derive(Debug, Default)]
pub struct CountryRecordStore {
    countries: HashMap<String, CountryRecord>,
    /// Insertion order of codes, for stable listing.
    order: Vec<String>,
    events: HashMap<String, Vec<PoliticalEvent>>,
    leaders: HashMap<String, PoliticalLeader>,
}

impl CountryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in insertion order.
    pub fn list_countries(&self) -> Vec<CountryRecord> {
        self.order
            .iter()
            .filter_map(|code| self.countries.get(code))
            .cloned()
            .collect()
    }

    /// Point lookup by code.
    pub fn get_country(&self, code: &str) -> Option<CountryRecord> {
        self.countries.get(code).cloned()
    }

    /// The joined view: record, events sorted ascending by `order`,
    /// and the leader if one exists.
    ///
    /// Returns `None` only for unknown codes. A known code with zero
    /// events yields an empty list; a known code without a leader
    /// yields `leader: None`. Neither is an error.
    pub fn get_country_with_events(&self, code: &str) -> Option<CountryDetail> {
        let country = self.countries.get(code)?.clone();

        let mut events = self.events.get(code).cloned().unwrap_or_default();
        // Stable sort: ties in `order` keep authored sequence.
        events.sort_by_key(|event| event.order);

        Some(CountryDetail {
            country,
            events,
            leader: self.leaders.get(code).cloned(),
        })
    }

    /// The leader for a code, if any.
    pub fn get_leader(&self, code: &str) -> Option<PoliticalLeader> {
        self.leaders.get(code).cloned()
    }

    /// Case-insensitive substring search against name or code.
    ///
    /// An empty query means "no filter" and returns the full list,
    /// deliberately, so a cleared search box shows everything.
    pub fn search_countries(&self, query: &str) -> Vec<CountryRecord> {
        if query.is_empty() {
            return self.list_countries();
        }

        let needle = query.to_lowercase();
        self.order
            .iter()
            .filter_map(|code| self.countries.get(code))
            .filter(|record| {
                record.name.to_lowercase().contains(&needle)
                    || record.code.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Apply a sync payload: insert or overwrite every carried code.
    ///
    /// For each country in the payload, the stored record is replaced
    /// and the code's event list and leader are rebuilt from the
    /// payload alone. A carried code with no leader in the payload has
    /// its stored leader cleared; this is the single enforcement point
    /// of the 0-or-1 leader relation. Codes absent from the payload
    /// are retained as-is.
    pub fn apply_sync(&mut self, payload: SyncPayload) {
        let mut events_by_code: HashMap<String, Vec<PoliticalEvent>> = HashMap::new();
        for event in payload.events {
            events_by_code
                .entry(event.country_code.clone())
                .or_default()
                .push(event);
        }

        let mut leaders_by_code: HashMap<String, PoliticalLeader> = HashMap::new();
        for leader in payload.leaders {
            // Last leader wins within one payload; the relation is 0-or-1.
            leaders_by_code.insert(leader.country_code.clone(), leader);
        }

        let count = payload.countries.len();
        for record in payload.countries {
            let code = record.code.clone();

            if self.countries.insert(code.clone(), record).is_none() {
                self.order.push(code.clone());
            }

            match events_by_code.remove(&code) {
                Some(events) => {
                    self.events.insert(code.clone(), events);
                }
                None => {
                    self.events.remove(&code);
                }
            }

            match leaders_by_code.remove(&code) {
                Some(leader) => {
                    self.leaders.insert(code.clone(), leader);
                }
                None => {
                    self.leaders.remove(&code);
                }
            }
        }

        debug!(countries = count, "applied sync payload");
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
