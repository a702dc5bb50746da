//! Authored country dataset for the Political Atlas
//!
//! Country detail is authored as one TOML module per country, embedded
//! at compile time and assembled into a [`StaticCountryDataset`] at
//! startup. This crate also owns the hand-maintained lookup tables
//! that anchor heterogeneous inputs to canonical codes: the
//! name-to-code table behind [`resolver::resolve`] and the fallback
//! coordinate table.

pub mod authored;
pub mod coordinates;
pub mod dataset;
pub mod error;
pub mod files;
pub mod resolver;

pub use authored::{module_rel_path, to_authored_toml};
pub use dataset::StaticCountryDataset;
pub use error::{Error, Result};
pub use resolver::{Resolution, resolve};
