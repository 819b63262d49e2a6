//! Headline KPIs for the selected year and type.

use serde::Serialize;

use energy_dataset::{Record, RecordField};

use crate::aggregate::{average_field, field, sum_field};
use crate::error::AnalyticsError;
use crate::ranking::top_n;
use crate::record_set::Subset;
use crate::selection::Selection;
use crate::yoy::{self, YoyComparison};

/// Average intensity, biggest emitters, and the year-over-year change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary<'a> {
    pub year: i32,
    pub average_intensity: f64,
    pub top_emitters: Vec<&'a Record>,
    pub yoy: YoyComparison,
}

/// Computes the KPIs for `current`, the records matching `selection`.
///
/// Returns `Ok(None)` when there is nothing to summarise: either `current`
/// is empty or the selection has no year.
pub fn summarize<'a>(
    current: &Subset<'a>,
    all: &Subset<'a>,
    selection: &Selection,
    top: usize,
) -> Result<Option<KpiSummary<'a>>, AnalyticsError> {
    let year = match selection.year {
        Some(year) if !current.is_empty() => year,
        _ => return Ok(None),
    };

    let ghg = field(RecordField::GhgEmissions);
    let average_intensity = average_field(current, field(RecordField::EnergyIntensity))?;
    let top_emitters = top_n(current, &ghg, top);

    let prior = yoy::prior_subset(all, year, selection.operation_type());
    let yoy = yoy::compare(sum_field(current, &ghg), sum_field(&prior, &ghg));

    Ok(Some(KpiSummary {
        year,
        average_intensity,
        top_emitters,
        yoy,
    }))
}
