//! Store-level record shapes
//!
//! These are the types the record store holds and the REST surface
//! serves. The richer authored shape lives in [`crate::data`].

use serde::{Deserialize, Serialize};

/// A country as the record store models it.
///
/// Identity is the 3-letter lowercase `code`; it never changes once a
/// record exists. All other attributes may be overwritten on re-sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
    pub capital: String,
    pub population: u64,
    /// Free-text region label, used only for a color lookup.
    pub region: String,
    pub color: String,
}

/// One entry in a country's political timeline.
///
/// Events reference their country by code, never by ownership pointer.
/// `order` is the sole sort key for chronological display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoliticalEvent {
    /// Back-reference by key. Authored modules may omit it; projection
    /// stamps the owning country's code.
    #[serde(default)]
    pub country_code: String,
    /// Display period, e.g. "1945–1952". Freeform text, not a date.
    pub period: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_color: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub order: i64,
}

/// The current head of government, at most one per country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoliticalLeader {
    #[serde(default)]
    pub country_code: String,
    pub name: String,
    pub title: String,
    pub party: String,
    /// Freeform year or date text, e.g. "2021" or "May 2017".
    pub in_power_since: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub description: String,
}

/// The joined view served by `with-events` lookups: the record, its
/// timeline sorted ascending by `order`, and the leader if one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDetail {
    pub country: CountryRecord,
    pub events: Vec<PoliticalEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<PoliticalLeader>,
}
