//! Subset filters over year, operation type, and building.
//!
//! An unset selector always produces an empty subset rather than an error,
//! so callers can feed a partially filled [`Selection`](crate::Selection)
//! straight through. Matching is exact; names are never normalised.

use crate::record_set::Subset;

/// Records from `year` with operation type `operation_type`.
pub fn by_year_and_type<'a>(
    source: &Subset<'a>,
    year: Option<i32>,
    operation_type: Option<&str>,
) -> Subset<'a> {
    match (year, operation_type) {
        (Some(year), Some(operation_type)) => source.retain_where(|r| {
            r.year == year && r.operation_type.as_deref() == Some(operation_type)
        }),
        _ => Subset::empty(),
    }
}

/// Records from `year`, any type.
pub fn by_year<'a>(source: &Subset<'a>, year: Option<i32>) -> Subset<'a> {
    match year {
        Some(year) => source.retain_where(|r| r.year == year),
        None => Subset::empty(),
    }
}

/// Records for the building named `building`.
pub fn by_building<'a>(source: &Subset<'a>, building: Option<&str>) -> Subset<'a> {
    match building {
        Some(building) => source.retain_where(|r| r.operation_name.as_deref() == Some(building)),
        None => Subset::empty(),
    }
}
