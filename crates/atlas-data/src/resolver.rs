//! Country name resolution
//!
//! Maps heterogeneous country-name strings (map polygon labels, search
//! results, manual entry) to canonical 3-letter codes. Resolution is
//! total: every input yields some code. Inputs with no canonical
//! mapping fall back to a lowercased 3-character truncation, returned
//! as a distinct [`Resolution::Synthetic`] so callers can tell a real
//! ISO mapping from a generated placeholder.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Outcome of resolving a raw name to a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The name matched the canonical table.
    Canonical(String),
    /// Truncation fallback; not guaranteed to exist anywhere.
    Synthetic(String),
}

impl Resolution {
    pub fn code(&self) -> &str {
        match self {
            Self::Canonical(code) | Self::Synthetic(code) => code,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic(_))
    }
}

/// Spellings and ISO variants, all keyed lowercase.
static NAME_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("united states", "usa"),
        ("united states of america", "usa"),
        ("usa", "usa"),
        ("us", "usa"),
        ("america", "usa"),
        ("united kingdom", "gbr"),
        ("great britain", "gbr"),
        ("britain", "gbr"),
        ("uk", "gbr"),
        ("gbr", "gbr"),
        ("england", "gbr"),
        ("france", "fra"),
        ("fra", "fra"),
        ("fr", "fra"),
        ("germany", "deu"),
        ("deutschland", "deu"),
        ("deu", "deu"),
        ("ger", "deu"),
        ("de", "deu"),
        ("brazil", "bra"),
        ("brasil", "bra"),
        ("bra", "bra"),
        ("japan", "jpn"),
        ("jpn", "jpn"),
        ("jp", "jpn"),
        ("india", "ind"),
        ("ind", "ind"),
        ("china", "chn"),
        ("people's republic of china", "chn"),
        ("chn", "chn"),
        ("cn", "chn"),
        ("russia", "rus"),
        ("russian federation", "rus"),
        ("rus", "rus"),
        ("canada", "can"),
        ("can", "can"),
        ("australia", "aus"),
        ("aus", "aus"),
        ("italy", "ita"),
        ("ita", "ita"),
        ("spain", "esp"),
        ("españa", "esp"),
        ("esp", "esp"),
        ("mexico", "mex"),
        ("méxico", "mex"),
        ("mex", "mex"),
        ("south africa", "zaf"),
        ("zaf", "zaf"),
        ("south korea", "kor"),
        ("republic of korea", "kor"),
        ("korea", "kor"),
        ("kor", "kor"),
        ("egypt", "egy"),
        ("egy", "egy"),
        ("turkey", "tur"),
        ("türkiye", "tur"),
        ("tur", "tur"),
        ("argentina", "arg"),
        ("arg", "arg"),
        ("indonesia", "idn"),
        ("idn", "idn"),
        ("nigeria", "nga"),
        ("nga", "nga"),
    ])
});

/// Resolve a raw name string to a country code. Never fails.
pub fn resolve(raw: &str) -> Resolution {
    let key = raw.trim().to_lowercase();
    if let Some(code) = NAME_TABLE.get(key.as_str()) {
        return Resolution::Canonical((*code).to_string());
    }

    // Last-resort synthetic code for admin "create new country" flows:
    // lowercase letters of the input, truncated to three. May be
    // shorter (even empty) for degenerate input.
    let synthetic: String = key.chars().filter(|c| c.is_alphabetic()).take(3).collect();
    Resolution::Synthetic(synthetic)
}
