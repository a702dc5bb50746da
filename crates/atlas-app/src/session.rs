//! Admin editing session
//!
//! Wraps one draft `CountryData` through the edit-validate-publish
//! flow. Validation is blocking; chart-sum warnings are advisory only.
//! Publishing persists the authored module first and then pushes a
//! dataset sync, and the two failure modes stay distinct: a failed
//! save aborts, a failed sync leaves the module saved but not live.

use tracing::{info, warn};

use atlas_client::{CountryApi, DatasetReconciler};
use atlas_data::{StaticCountryDataset, module_rel_path, to_authored_toml};
use atlas_model::{CategoryShare, CountryData, normalize_shares, share_sum, validate_country_code};

use crate::error::{Error, Result};

/// Sentinel id that opens an empty draft instead of an existing one.
pub const NEW_COUNTRY_ID: &str = "new";

/// Advisory tolerance for percentage-list sums.
const CHART_SUM_TOLERANCE: f64 = 0.5;

/// One failed validation rule, keyed by the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A percentage list whose sum strays from 100. Advisory, never
/// blocks publishing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartWarning {
    pub chart: ChartKind,
    pub sum: f64,
}

/// The fixed set of percentage lists a country carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    AgeGroups,
    Religions,
    UrbanRural,
    Education,
    GdpSectors,
    Employment,
    Spending,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        Self::AgeGroups,
        Self::Religions,
        Self::UrbanRural,
        Self::Education,
        Self::GdpSectors,
        Self::Employment,
        Self::Spending,
    ];
}

/// How a publish attempt ended.
#[derive(Debug)]
pub enum PublishOutcome {
    /// Saved and synced; the edit is live.
    Published,
    /// Blocking validation errors; nothing was written.
    ValidationFailed(Vec<FieldError>),
    /// The authored module was saved but the follow-up sync failed;
    /// the store still serves the pre-edit data.
    SavedButNotLive { sync_error: String },
}

#[derive(Debug)]
pub struct AdminEditSession {
    draft: CountryData,
    is_new: bool,
}

impl AdminEditSession {
    /// Open a session for `id`: the [`NEW_COUNTRY_ID`] sentinel seeds
    /// an empty draft, any other id must exist in the dataset.
    pub fn open(dataset: &StaticCountryDataset, id: &str) -> Result<Self> {
        if id == NEW_COUNTRY_ID {
            return Ok(Self {
                draft: CountryData::default(),
                is_new: true,
            });
        }

        let draft = dataset
            .get_by_code(id)
            .cloned()
            .ok_or_else(|| Error::UnknownCountry { id: id.to_string() })?;
        Ok(Self {
            draft,
            is_new: false,
        })
    }

    pub fn draft(&self) -> &CountryData {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CountryData {
        &mut self.draft
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Blocking validation. An empty result means the draft may be
    /// published.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let d = &self.draft;

        if !validate_country_code(&d.code) {
            errors.push(FieldError::new(
                "code",
                "must be exactly three lowercase letters",
            ));
        }
        if d.name.trim().is_empty() {
            errors.push(FieldError::new("name", "must not be empty"));
        }
        if d.capital.trim().is_empty() {
            errors.push(FieldError::new("capital", "must not be empty"));
        }
        if d.region.trim().is_empty() {
            errors.push(FieldError::new("region", "must not be empty"));
        }
        if d.population == 0 {
            errors.push(FieldError::new("population", "must be greater than zero"));
        }

        if let Some(leader) = &d.leader {
            errors.extend(validate_leader(leader));
        }

        errors
    }

    /// Advisory warnings for percentage lists that do not sum to 100
    /// within the tolerance. Empty lists are fine.
    pub fn chart_warnings(&self) -> Vec<ChartWarning> {
        ChartKind::ALL
            .into_iter()
            .filter_map(|chart| {
                let shares = self.chart(chart);
                if shares.is_empty() {
                    return None;
                }
                let sum = share_sum(shares);
                ((sum - 100.0).abs() > CHART_SUM_TOLERANCE).then_some(ChartWarning { chart, sum })
            })
            .collect()
    }

    /// Proportionally rescale one percentage list to sum to 100.
    pub fn normalize_chart(&mut self, chart: ChartKind) {
        normalize_shares(self.chart_mut(chart));
    }

    fn chart(&self, chart: ChartKind) -> &[CategoryShare] {
        match chart {
            ChartKind::AgeGroups => &self.draft.demographics.age_groups,
            ChartKind::Religions => &self.draft.demographics.religions,
            ChartKind::UrbanRural => &self.draft.demographics.urban_rural,
            ChartKind::Education => &self.draft.demographics.education,
            ChartKind::GdpSectors => &self.draft.statistics.gdp_sectors,
            ChartKind::Employment => &self.draft.statistics.employment,
            ChartKind::Spending => &self.draft.statistics.spending,
        }
    }

    fn chart_mut(&mut self, chart: ChartKind) -> &mut Vec<CategoryShare> {
        match chart {
            ChartKind::AgeGroups => &mut self.draft.demographics.age_groups,
            ChartKind::Religions => &mut self.draft.demographics.religions,
            ChartKind::UrbanRural => &mut self.draft.demographics.urban_rural,
            ChartKind::Education => &mut self.draft.demographics.education,
            ChartKind::GdpSectors => &mut self.draft.statistics.gdp_sectors,
            ChartKind::Employment => &mut self.draft.statistics.employment,
            ChartKind::Spending => &mut self.draft.statistics.spending,
        }
    }

    /// Publish the draft: validate, serialize to the authored-module
    /// format, save through the restricted writer, then push a dataset
    /// sync with this draft overlaid so the edit is immediately live.
    ///
    /// Serialization and save failures abort with an error. A sync
    /// failure after a successful save is reported as
    /// [`PublishOutcome::SavedButNotLive`] so the caller can tell the
    /// operator the module is on disk but the live store is stale.
    pub async fn publish(
        &self,
        api: &dyn CountryApi,
        reconciler: &DatasetReconciler,
    ) -> Result<PublishOutcome> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Ok(PublishOutcome::ValidationFailed(errors));
        }

        let content = to_authored_toml(&self.draft)?;
        let path = module_rel_path(&self.draft.code);
        api.put_country_file(&path, &content).await?;

        match reconciler.sync_with(&self.draft).await {
            Ok(_) => {
                info!(code = self.draft.code, "published country module");
                Ok(PublishOutcome::Published)
            }
            Err(e) => {
                warn!(code = self.draft.code, error = %e, "saved but sync failed");
                Ok(PublishOutcome::SavedButNotLive {
                    sync_error: e.to_string(),
                })
            }
        }
    }
}

/// Leader fields are all-or-nothing: a leader with every field empty
/// counts as "no leader", but once any field is filled in, name,
/// title, party, and in_power_since are all required.
fn validate_leader(leader: &atlas_model::PoliticalLeader) -> Vec<FieldError> {
    let required = [
        ("leader.name", &leader.name),
        ("leader.title", &leader.title),
        ("leader.party", &leader.party),
        ("leader.in_power_since", &leader.in_power_since),
    ];

    let any_filled = required.iter().any(|(_, v)| !v.trim().is_empty())
        || leader.image.as_deref().is_some_and(|v| !v.trim().is_empty())
        || !leader.description.trim().is_empty();
    if !any_filled {
        return Vec::new();
    }

    required
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| FieldError::new(field, "required when any leader field is set"))
        .collect()
}
