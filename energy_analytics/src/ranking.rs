//! Top-N selection by a numeric field.

use std::cmp::Ordering;

use energy_dataset::Record;

use crate::record_set::Subset;

/// The `n` records with the largest `value`, largest first.
///
/// Returns `min(n, subset.len())` records. Records with equal values keep
/// their relative order from the subset.
pub fn top_n<'a, F>(subset: &Subset<'a>, value: F, n: usize) -> Vec<&'a Record>
where
    F: Fn(&Record) -> f64,
{
    let mut keyed: Vec<(f64, &'a Record)> = subset.iter().map(|r| (value(r), r)).collect();
    // sort_by is stable, which gives the tie-break.
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    keyed.truncate(n);
    keyed.into_iter().map(|(_, r)| r).collect()
}
