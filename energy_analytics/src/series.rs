//! Chart-ready series: energy mix per building, a building's emissions
//! over time, and emissions share by operation type.

use serde::Serialize;

use energy_dataset::RecordField;

use crate::aggregate::{field, group_sum};
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::filter;
use crate::record_set::Subset;
use crate::threshold::{group_with_overflow, ChartSeries};

/// Electricity and natural gas consumed by one building.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyBar {
    pub building: String,
    pub electricity: f64,
    pub natural_gas: f64,
}

/// Emissions of one building in one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub ghg_emissions_kg: f64,
}

/// One bar per record of `subset`, in subset order.
pub fn energy_breakdown(subset: &Subset<'_>) -> Result<Vec<EnergyBar>, AnalyticsError> {
    subset
        .iter()
        .enumerate()
        .map(|(index, r)| {
            let building = r
                .operation_name
                .clone()
                .ok_or(AnalyticsError::InvalidSelector { index })?;
            Ok(EnergyBar {
                building,
                electricity: r.electricity,
                natural_gas: r.natural_gas,
            })
        })
        .collect()
}

/// Every record of `building` across all years, in input order.
pub fn emissions_trend(all: &Subset<'_>, building: Option<&str>) -> Vec<TrendPoint> {
    filter::by_building(all, building)
        .iter()
        .map(|r| TrendPoint {
            year: r.year,
            ghg_emissions_kg: r.ghg_emissions_kg,
        })
        .collect()
}

/// Emissions per operation type for `year`, small types folded into the overflow bucket.
pub fn emissions_by_type(
    all: &Subset<'_>,
    year: Option<i32>,
    config: &AnalyticsConfig,
) -> Result<ChartSeries, AnalyticsError> {
    let in_year = filter::by_year(all, year);
    let grouped = group_sum(
        &in_year,
        |r| r.operation_type.as_deref(),
        field(RecordField::GhgEmissions),
    )?;
    Ok(group_with_overflow(
        &grouped,
        &config.overflow_label,
        config.threshold_fraction,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_set::RecordSet;
    use crate::test_support::{fixture_set, record};

    #[test]
    fn test_energy_breakdown_follows_subset_order() {
        let set = fixture_set();
        let subset = filter::by_year_and_type(&set.all(), Some(2017), Some("Indoor ice rinks"));
        let bars = energy_breakdown(&subset).unwrap();
        assert_eq!(
            bars,
            vec![
                EnergyBar {
                    building: "Centennial Arena".to_string(),
                    electricity: 1_100_000.0,
                    natural_gas: 160_000.0,
                },
                EnergyBar {
                    building: "Lakeview Rink".to_string(),
                    electricity: 950_000.0,
                    natural_gas: 150_000.0,
                },
            ]
        );
    }

    #[test]
    fn test_energy_breakdown_missing_name() {
        let mut unnamed = record(2015, "A", "X", 1.0);
        unnamed.operation_name = None;
        let set = RecordSet::new(vec![record(2015, "A", "Y", 1.0), unnamed]);
        let result = energy_breakdown(&set.all());
        assert!(matches!(result, Err(AnalyticsError::InvalidSelector { index: 1 })));
    }

    #[test]
    fn test_emissions_trend_for_building() {
        let set = fixture_set();
        let trend = emissions_trend(&set.all(), Some("Westside Pool"));
        let years: Vec<i32> = trend.iter().map(|p| p.year).collect();
        let ghg: Vec<f64> = trend.iter().map(|p| p.ghg_emissions_kg).collect();
        assert_eq!(years, vec![2015, 2016, 2017]);
        assert_eq!(ghg, vec![420_000.0, 460_000.0, 440_000.0]);
    }

    #[test]
    fn test_emissions_trend_unknown_building() {
        let set = fixture_set();
        assert!(emissions_trend(&set.all(), Some("Library")).is_empty());
        assert!(emissions_trend(&set.all(), None).is_empty());
    }

    #[test]
    fn test_emissions_by_type_folds_small_types() {
        let set = fixture_set();
        let series =
            emissions_by_type(&set.all(), Some(2017), &AnalyticsConfig::default()).unwrap();
        assert_eq!(
            series.labels,
            vec!["Indoor ice rinks", "Pools", "Community centres", "Other"]
        );
        assert_eq!(series.values, vec![600_000.0, 440_000.0, 95_000.0, 15_000.0]);
    }

    #[test]
    fn test_emissions_by_type_custom_config() {
        let set = fixture_set();
        let config = AnalyticsConfig {
            threshold_fraction: 0.0,
            overflow_label: "Rest".to_string(),
            ..AnalyticsConfig::default()
        };
        let series = emissions_by_type(&set.all(), Some(2017), &config).unwrap();
        assert_eq!(series.len(), 4);
        assert!(!series.labels.contains(&"Rest".to_string()));
    }

    #[test]
    fn test_emissions_by_type_no_year() {
        let set = fixture_set();
        let series = emissions_by_type(&set.all(), None, &AnalyticsConfig::default()).unwrap();
        assert!(series.is_empty());
    }
}
