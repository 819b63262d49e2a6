//! The loaded dataset and borrowed views over it.

use std::collections::HashSet;

use energy_dataset::Record;

/// The dataset for one analysis session, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A view over every record, the starting point for all filters.
    pub fn all(&self) -> Subset<'_> {
        Subset {
            records: self.records.iter().collect(),
        }
    }

    /// Distinct years, ascending.
    pub fn distinct_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Distinct operation types in first-seen order. Records without a type are skipped.
    pub fn distinct_types(&self) -> Vec<String> {
        first_seen(self.records.iter().filter_map(|r| r.operation_type.as_deref()))
    }

    /// Distinct building names in first-seen order. Records without a name are skipped.
    pub fn distinct_buildings(&self) -> Vec<String> {
        first_seen(self.records.iter().filter_map(|r| r.operation_name.as_deref()))
    }
}

fn first_seen<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for key in keys {
        if seen.insert(key) {
            out.push(key.to_string());
        }
    }
    out
}

/// An order-preserving selection of records borrowed from a [`RecordSet`].
///
/// Filtering a subset only ever drops references; the records themselves
/// are never copied or touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subset<'a> {
    records: Vec<&'a Record>,
}

impl<'a> Subset<'a> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Keeps the records matching `predicate`, in order.
    pub fn retain_where(&self, predicate: impl Fn(&Record) -> bool) -> Subset<'a> {
        Subset {
            records: self
                .records
                .iter()
                .copied()
                .filter(|r| predicate(*r))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
