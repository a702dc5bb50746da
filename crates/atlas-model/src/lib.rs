//! Data model for the Political Atlas
//!
//! Defines the record shapes shared by the store, the REST surface,
//! the static dataset, and the admin editor, plus the projection from
//! the rich authored records down to the store's shape.

pub mod chart;
pub mod code;
pub mod country;
pub mod data;
pub mod sync;

pub use chart::{CategoryShare, normalize_shares, share_sum};
pub use code::validate_country_code;
pub use country::{CountryDetail, CountryRecord, PoliticalEvent, PoliticalLeader};
pub use data::{CountryData, Demographics, Statistics, TradeFigures};
pub use sync::SyncPayload;
