//! Country code validation
//!
//! Codes are 3-letter lowercase identifiers and serve as the primary
//! key across every entity in the system.

use std::sync::LazyLock;

use regex::Regex;

static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]{3}$").unwrap());

/// Check whether a string is a well-formed canonical country code.
///
/// Synthetic codes produced by the name resolver's truncation fallback
/// may be shorter than three characters and will fail this check; that
/// is intentional, since such codes must not be published.
pub fn validate_country_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}
