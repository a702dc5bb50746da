//! Static dataset assembly
//!
//! Authored modules are TOML documents embedded at compile time. They
//! are parsed once, at assembly, into the in-process dataset every
//! consumer reads from.

use std::collections::HashMap;

use tracing::debug;

use atlas_model::CountryData;

use crate::coordinates::fallback_coordinates;
use crate::error::{Error, Result};

/// Registration order here fixes dataset iteration order.
const AUTHORED_MODULES: &[(&str, &str)] = &[
    ("usa", include_str!("../countries/usa.toml")),
    ("gbr", include_str!("../countries/gbr.toml")),
    ("fra", include_str!("../countries/fra.toml")),
    ("deu", include_str!("../countries/deu.toml")),
    ("bra", include_str!("../countries/bra.toml")),
    ("jpn", include_str!("../countries/jpn.toml")),
    ("ind", include_str!("../countries/ind.toml")),
];

/// The compile-time-assembled collection of authored country records.
///
/// Assembly fails fast if two modules declare the same code; silent
/// last-wins would let one module shadow another with no trace.
#[derive(Debug)]
pub struct StaticCountryDataset {
    entries: Vec<CountryData>,
    by_code: HashMap<String, usize>,
}

impl StaticCountryDataset {
    /// Parse and assemble every embedded authored module.
    pub fn assemble() -> Result<Self> {
        Self::from_modules(AUTHORED_MODULES.iter().copied())
    }

    /// Assemble from explicit `(module name, TOML source)` pairs.
    pub fn from_modules<'a>(modules: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut entries: Vec<CountryData> = Vec::new();
        let mut by_code: HashMap<String, usize> = HashMap::new();
        let mut module_for_code: HashMap<String, String> = HashMap::new();

        for (module, source) in modules {
            let data: CountryData =
                toml::from_str(source).map_err(|e| Error::ModuleParse {
                    module: module.to_string(),
                    message: e.to_string(),
                })?;

            if data.code.is_empty() {
                return Err(Error::MissingCode {
                    module: module.to_string(),
                });
            }

            if let Some(first) = module_for_code.get(&data.code) {
                return Err(Error::DuplicateCode {
                    code: data.code.clone(),
                    first: first.clone(),
                    second: module.to_string(),
                });
            }

            module_for_code.insert(data.code.clone(), module.to_string());
            by_code.insert(data.code.clone(), entries.len());
            entries.push(data);
        }

        debug!(countries = entries.len(), "assembled static dataset");
        Ok(Self { entries, by_code })
    }

    pub fn get_by_code(&self, code: &str) -> Option<&CountryData> {
        self.by_code.get(code).map(|&idx| &self.entries[idx])
    }

    /// All entries, in module registration order.
    pub fn all(&self) -> &[CountryData] {
        &self.entries
    }

    pub fn all_codes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.code.clone()).collect()
    }

    /// Marker coordinates for a code: the authored value when present,
    /// otherwise the hand-maintained fallback table.
    pub fn coordinates(&self, code: &str) -> Option<[f64; 2]> {
        self.get_by_code(code)
            .and_then(|entry| entry.coordinates)
            .or_else(|| fallback_coordinates(code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
