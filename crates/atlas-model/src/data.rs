//! Authored country data
//!
//! `CountryData` is the rich per-country shape the static dataset and
//! the admin editor work with. The record store models only a
//! projection of it; [`CountryData::project`] performs that narrowing.

use serde::{Deserialize, Serialize};

use crate::chart::CategoryShare;
use crate::country::{CountryRecord, PoliticalEvent, PoliticalLeader};

/// Fixed-shape demographic breakdowns for one country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default)]
    pub age_groups: Vec<CategoryShare>,
    #[serde(default)]
    pub religions: Vec<CategoryShare>,
    #[serde(default)]
    pub urban_rural: Vec<CategoryShare>,
    #[serde(default)]
    pub education: Vec<CategoryShare>,
}

/// Headline trade figures, in billions of USD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeFigures {
    pub exports_usd_bn: f64,
    pub imports_usd_bn: f64,
}

/// Fixed-shape economic breakdowns for one country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub gdp_sectors: Vec<CategoryShare>,
    #[serde(default)]
    pub employment: Vec<CategoryShare>,
    #[serde(default)]
    pub trade: TradeFigures,
    #[serde(default)]
    pub spending: Vec<CategoryShare>,
}

/// The full authored record for one country: the store-level fields
/// plus leader, demographics, statistics, and the event timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryData {
    pub code: String,
    pub name: String,
    pub capital: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub color: String,
    /// `[longitude, latitude]` marker position, if authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<PoliticalLeader>,
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub events: Vec<PoliticalEvent>,
}

impl CountryData {
    /// Narrow this authored record to the store's shape.
    ///
    /// Demographics and statistics are dropped; the store does not
    /// model them. Event and leader back-references are stamped with
    /// this record's code so authored modules never have to repeat it.
    pub fn project(&self) -> (CountryRecord, Vec<PoliticalEvent>, Option<PoliticalLeader>) {
        let record = CountryRecord {
            code: self.code.clone(),
            name: self.name.clone(),
            capital: self.capital.clone(),
            population: self.population,
            region: self.region.clone(),
            color: self.color.clone(),
        };

        let events = self
            .events
            .iter()
            .map(|event| PoliticalEvent {
                country_code: self.code.clone(),
                ..event.clone()
            })
            .collect();

        let leader = self.leader.as_ref().map(|leader| PoliticalLeader {
            country_code: self.code.clone(),
            ..leader.clone()
        });

        (record, events, leader)
    }
}
