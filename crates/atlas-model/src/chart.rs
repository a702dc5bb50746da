//! Percentage-breakdown chart data
//!
//! Every demographic and statistic breakdown is a list of labeled
//! percentages that should sum to 100. The sum is not enforced at
//! parse time; the admin editor flags deviations and offers a
//! proportional rescale.

use serde::{Deserialize, Serialize};

/// One slice of a percentage breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub label: String,
    pub percentage: f64,
}

impl CategoryShare {
    pub fn new(label: impl Into<String>, percentage: f64) -> Self {
        Self {
            label: label.into(),
            percentage,
        }
    }
}

/// Sum of all percentages in a breakdown.
pub fn share_sum(shares: &[CategoryShare]) -> f64 {
    shares.iter().map(|s| s.percentage).sum()
}

/// Rescale all values proportionally so the breakdown sums to 100.
///
/// A zero-sum breakdown is left untouched; there is no proportion to
/// preserve.
pub fn normalize_shares(shares: &mut [CategoryShare]) {
    let sum = share_sum(shares);
    if sum == 0.0 {
        return;
    }
    for share in shares.iter_mut() {
        share.percentage = share.percentage / sum * 100.0;
    }
}
