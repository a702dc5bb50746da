//! Authored-module serialization
//!
//! The admin publish flow serializes a draft back into the same TOML
//! shape the embedded modules use, then hands the text to the backend's
//! country-file endpoint for persistence.

use atlas_model::CountryData;

use crate::error::Result;

/// Serialize a record into authored-module TOML.
pub fn to_authored_toml(data: &CountryData) -> Result<String> {
    Ok(toml::to_string_pretty(data)?)
}

/// Repository-relative path of the authored module for a code.
///
/// This is the `path` the publish flow POSTs to the country-file
/// endpoint, which only accepts paths of exactly this shape.
pub fn module_rel_path(code: &str) -> String {
    format!("countries/{code}.toml")
}
