//! Narrative figures for a selection: total, change, and largest contributor.
//!
//! Only the numbers are produced here. Turning them into sentences is up to
//! whoever displays them.

use serde::Serialize;

use energy_dataset::RecordField;

use crate::aggregate::{field, group_sum, sum_field};
use crate::error::AnalyticsError;
use crate::record_set::Subset;
use crate::yoy;

/// A grouping key and its accumulated value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contributor {
    pub key: String,
    pub value: f64,
}

/// Figures behind the insights panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSummary {
    pub year: i32,
    pub total_ghg: f64,
    pub yoy_delta_percent: Option<f64>,
    pub top_contributor: Option<Contributor>,
}

/// Summarises `current` against the previous year of `all`.
///
/// `operation_type` is the type `current` was filtered by, if any; the prior
/// year is narrowed the same way so both totals cover the same facilities.
/// The top contributor is the operation type with the most emissions in
/// `current`, ties going to the type seen first.
pub fn compose(
    current: &Subset<'_>,
    all: &Subset<'_>,
    selected_year: i32,
    operation_type: Option<&str>,
) -> Result<InsightSummary, AnalyticsError> {
    let ghg = field(RecordField::GhgEmissions);
    let total_ghg = sum_field(current, &ghg);

    let prior = yoy::prior_subset(all, selected_year, operation_type);
    let comparison = yoy::compare(total_ghg, sum_field(&prior, &ghg));

    let by_type = group_sum(current, |r| r.operation_type.as_deref(), &ghg)?;
    let top_contributor = by_type
        .sorted_descending()
        .first()
        .map(|&(key, value)| Contributor {
            key: key.to_string(),
            value,
        });

    Ok(InsightSummary {
        year: selected_year,
        total_ghg,
        yoy_delta_percent: comparison.delta_percent,
        top_contributor,
    })
}
