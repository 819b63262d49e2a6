//! The user's current year / type / building choice as a plain value.

use serde::{Deserialize, Serialize};

use crate::filter;
use crate::record_set::{RecordSet, Subset};

/// Which slice of the dataset a query is about.
///
/// Every field is optional; an unset field makes the corresponding filter
/// return nothing. Passed by reference into each query so no component keeps
/// selection state of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub year: Option<i32>,
    pub operation_type: Option<String>,
    pub building: Option<String>,
}

impl Selection {
    /// The first year, type, and building in the dataset. This is also what a reset returns to.
    pub fn initial(set: &RecordSet) -> Self {
        Self {
            year: set.distinct_years().first().copied(),
            operation_type: set.distinct_types().into_iter().next(),
            building: set.distinct_buildings().into_iter().next(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_type(mut self, operation_type: impl Into<String>) -> Self {
        self.operation_type = Some(operation_type.into());
        self
    }

    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    pub fn operation_type(&self) -> Option<&str> {
        self.operation_type.as_deref()
    }

    pub fn building(&self) -> Option<&str> {
        self.building.as_deref()
    }

    /// Records matching the selected year and type.
    pub fn current<'a>(&self, set: &'a RecordSet) -> Subset<'a> {
        filter::by_year_and_type(&set.all(), self.year, self.operation_type())
    }
}
