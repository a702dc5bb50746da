//! In-memory country record store
//!
//! The canonical runtime holder of country records, political-event
//! timelines, and leader records. Point lookups, substring search, and
//! the joined "country with events" view all live here. The store does
//! no I/O; persistence and transport are other crates' concerns.

pub mod store;

pub use store::CountryRecordStore;
