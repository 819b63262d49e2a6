//! Collapsing long-tail categories into an overflow bucket.
//!
//! Categories whose value falls strictly below a fraction of the grand total
//! are summed into a single trailing entry, which keeps categorical charts
//! readable no matter how many categories the data has. A value exactly at
//! the threshold stays as its own category.

use serde::{Deserialize, Serialize};

use crate::aggregate::GroupedAggregate;

/// Share of the total below which a category is folded into the overflow bucket.
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.05;

/// Label of the overflow bucket.
pub const DEFAULT_OVERFLOW_LABEL: &str = "Other";

/// Parallel label / value lists ready for a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn total(&self) -> f64 {
        self.values.iter().fold(0.0, |acc, v| acc + v)
    }

    fn push(&mut self, label: &str, value: f64) {
        self.labels.push(label.to_string());
        self.values.push(value);
    }
}

impl From<&GroupedAggregate> for ChartSeries {
    fn from(grouped: &GroupedAggregate) -> Self {
        let mut series = ChartSeries::default();
        for (key, value) in grouped.iter() {
            series.push(key, value);
        }
        series
    }
}

/// Emits each category at or above `threshold_fraction` of the total, in
/// first-seen order, then one `overflow_label` entry holding everything below it.
///
/// No overflow entry is added when nothing positive fell below the threshold.
/// The overflow bucket is summed on its own, so the series total matches the
/// grouped total exactly for integral values and to within f64 rounding when
/// magnitudes differ widely.
/// When the total is zero the threshold is zero too and every category is kept.
/// The overflow entry is appended even if a kept category already carries
/// the same label.
pub fn group_with_overflow(
    grouped: &GroupedAggregate,
    overflow_label: &str,
    threshold_fraction: f64,
) -> ChartSeries {
    let total = grouped.total();
    let threshold = total * threshold_fraction;

    let mut series = ChartSeries::default();
    let mut overflow = 0.0;
    for (key, value) in grouped.iter() {
        if value < threshold {
            overflow += value;
        } else {
            series.push(key, value);
        }
    }
    if overflow > 0.0 {
        series.push(overflow_label, overflow);
    }
    series
}
