//! Sum, average, and grouped-sum reducers over a subset.
//!
//! Summation always walks the subset in order so repeated calls over the
//! same input produce bit-identical totals.

use std::collections::HashMap;

use energy_dataset::{Record, RecordField};

use crate::error::AnalyticsError;
use crate::record_set::Subset;

/// Selector reading one measurement column, for use with the reducers below.
pub fn field(column: RecordField) -> impl Fn(&Record) -> f64 {
    move |r| r.value(column)
}

/// Sum of `value` over the subset. `0.0` when the subset is empty.
pub fn sum_field<F>(subset: &Subset<'_>, value: F) -> f64
where
    F: Fn(&Record) -> f64,
{
    subset.iter().map(value).fold(0.0, |acc, v| acc + v)
}

/// Mean of `value` over the subset.
///
/// Fails with [`AnalyticsError::DivisionUndefined`] on an empty subset so a
/// genuine zero average stays distinguishable from "no data".
pub fn average_field<F>(subset: &Subset<'_>, value: F) -> Result<f64, AnalyticsError>
where
    F: Fn(&Record) -> f64,
{
    if subset.is_empty() {
        return Err(AnalyticsError::DivisionUndefined);
    }
    Ok(sum_field(subset, value) / subset.len() as f64)
}

/// Accumulates `value` per key returned by `key`, keys in first-seen order.
///
/// A record whose key is missing fails the whole grouping with
/// [`AnalyticsError::InvalidSelector`].
pub fn group_sum<'a, K, S, F>(
    subset: &Subset<'a>,
    key: K,
    value: F,
) -> Result<GroupedAggregate, AnalyticsError>
where
    K: Fn(&'a Record) -> Option<S>,
    S: AsRef<str>,
    F: Fn(&Record) -> f64,
{
    let mut grouped = GroupedAggregate::new();
    for (index, record) in subset.iter().enumerate() {
        let k = key(record).ok_or(AnalyticsError::InvalidSelector { index })?;
        grouped.add(k.as_ref(), value(record));
    }
    Ok(grouped)
}

/// Key → accumulated value, iterated in first-seen key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedAggregate {
    entries: Vec<(String, f64)>,
    positions: HashMap<String, usize>,
}

impl GroupedAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to `key`, appending the key if it has not been seen.
    pub fn add(&mut self, key: &str, value: f64) {
        match self.positions.get(key) {
            Some(&pos) => self.entries[pos].1 += value,
            None => {
                self.positions.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.positions.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    /// Sum of all values, in key order.
    pub fn total(&self) -> f64 {
        self.values().fold(0.0, |acc, v| acc + v)
    }

    /// Entries by value descending; equal values keep first-seen order.
    pub fn sorted_descending(&self) -> Vec<(&str, f64)> {
        let mut sorted: Vec<(&str, f64)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }
}

impl<K: AsRef<str>> FromIterator<(K, f64)> for GroupedAggregate {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut grouped = GroupedAggregate::new();
        for (key, value) in iter {
            grouped.add(key.as_ref(), value);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;
    use crate::record_set::RecordSet;
    use crate::test_support::{fixture_set, record};

    #[test]
    fn test_sum_field_matches_manual_sum() {
        let set = fixture_set();
        let year = filter::by_year(&set.all(), Some(2017));
        let expected: f64 = year.iter().map(|r| r.ghg_emissions_kg).sum();
        assert_eq!(sum_field(&year, field(RecordField::GhgEmissions)), expected);
        assert_eq!(sum_field(&year, field(RecordField::GhgEmissions)), 1_150_000.0);
    }

    #[test]
    fn test_sum_field_empty_is_zero() {
        let set = RecordSet::default();
        assert_eq!(sum_field(&set.all(), field(RecordField::Electricity)), 0.0);
    }

    #[test]
    fn test_sum_field_with_closure() {
        let set = fixture_set();
        let total_energy = sum_field(&set.all(), |r| r.electricity + r.natural_gas);
        assert!(total_energy > 0.0);
    }

    #[test]
    fn test_average_field() {
        let set = fixture_set();
        let rinks = filter::by_year_and_type(&set.all(), Some(2017), Some("Indoor ice rinks"));
        let avg = average_field(&rinks, field(RecordField::EnergyIntensity)).unwrap();
        assert!((avg - 40.55).abs() < 1e-9);
    }

    #[test]
    fn test_average_field_zero_is_not_an_error() {
        let set = RecordSet::new(vec![record(2015, "A", "X", 0.0)]);
        let avg = average_field(&set.all(), field(RecordField::GhgEmissions)).unwrap();
        assert_eq!(avg, 0.0);
    }

    #[test]
    fn test_average_field_empty_is_undefined() {
        let set = RecordSet::default();
        let result = average_field(&set.all(), field(RecordField::GhgEmissions));
        assert!(matches!(result, Err(AnalyticsError::DivisionUndefined)));
    }

    #[test]
    fn test_group_sum_first_seen_order() {
        let set = fixture_set();
        let year = filter::by_year(&set.all(), Some(2017));
        let grouped = group_sum(
            &year,
            |r| r.operation_type.as_deref(),
            field(RecordField::GhgEmissions),
        )
        .unwrap();
        let keys: Vec<&str> = grouped.keys().collect();
        assert_eq!(
            keys,
            vec!["Indoor ice rinks", "Pools", "Community centres", "Administration"]
        );
        assert_eq!(grouped.get("Indoor ice rinks"), Some(600_000.0));
        assert_eq!(grouped.get("Administration"), Some(15_000.0));
        assert_eq!(grouped.total(), 1_150_000.0);
    }

    #[test]
    fn test_group_sum_owned_keys() {
        let set = fixture_set();
        let grouped = group_sum(
            &set.all(),
            |r| Some(r.year.to_string()),
            field(RecordField::GhgEmissions),
        )
        .unwrap();
        assert_eq!(grouped.get("2015"), Some(870_000.0));
        assert_eq!(grouped.get("2016"), Some(900_000.0));
    }

    #[test]
    fn test_group_sum_missing_key_is_invalid_selector() {
        let mut untyped = record(2015, "A", "Y", 2.0);
        untyped.operation_type = None;
        let set = RecordSet::new(vec![record(2015, "A", "X", 1.0), untyped]);
        let result = group_sum(
            &set.all(),
            |r| r.operation_type.as_deref(),
            field(RecordField::GhgEmissions),
        );
        assert!(matches!(result, Err(AnalyticsError::InvalidSelector { index: 1 })));
    }

    #[test]
    fn test_group_sum_empty() {
        let set = RecordSet::default();
        let grouped = group_sum(
            &set.all(),
            |r| r.operation_type.as_deref(),
            field(RecordField::GhgEmissions),
        )
        .unwrap();
        assert!(grouped.is_empty());
        assert_eq!(grouped.total(), 0.0);
    }

    #[test]
    fn test_sorted_descending_ties_keep_first_seen() {
        let grouped: GroupedAggregate =
            vec![("B", 5.0), ("A", 10.0), ("C", 10.0), ("D", 1.0)].into_iter().collect();
        let sorted = grouped.sorted_descending();
        assert_eq!(sorted, vec![("A", 10.0), ("C", 10.0), ("B", 5.0), ("D", 1.0)]);
    }

    #[test]
    fn test_from_iter_accumulates_repeated_keys() {
        let grouped: GroupedAggregate = vec![("A", 1.0), ("B", 2.0), ("A", 3.0)].into_iter().collect();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.get("A"), Some(4.0));
    }
}
