//! Year-over-year comparison of emission totals.

use serde::Serialize;

use crate::filter;
use crate::record_set::Subset;

/// Outcome of comparing a period's total with the period before it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YoyComparison {
    pub current_total: f64,
    pub prior_total: f64,
    /// Percentage change, positive for an increase. `None` when the prior
    /// total is zero, which covers both "no prior records" and "prior records
    /// that sum to zero".
    pub delta_percent: Option<f64>,
}

/// Compares `current_total` against `prior_total`.
pub fn compare(current_total: f64, prior_total: f64) -> YoyComparison {
    let delta_percent = if prior_total > 0.0 {
        Some((current_total - prior_total) / prior_total * 100.0)
    } else {
        None
    };
    YoyComparison {
        current_total,
        prior_total,
        delta_percent,
    }
}

/// The records of the year before `year`, narrowed to `operation_type` when one is given.
pub fn prior_subset<'a>(
    source: &Subset<'a>,
    year: i32,
    operation_type: Option<&str>,
) -> Subset<'a> {
    let prior_year = year.checked_sub(1);
    match operation_type {
        Some(t) => filter::by_year_and_type(source, prior_year, Some(t)),
        None => filter::by_year(source, prior_year),
    }
}
