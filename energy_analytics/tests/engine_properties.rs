use energy_analytics::aggregate::{average_field, field, group_sum, sum_field};
use energy_analytics::filter::{by_building, by_year, by_year_and_type};
use energy_analytics::ranking::top_n;
use energy_analytics::threshold::{group_with_overflow, DEFAULT_OVERFLOW_LABEL, DEFAULT_THRESHOLD_FRACTION};
use energy_analytics::yoy::compare;
use energy_analytics::{insight, AnalyticsError, RecordField, RecordSet, Selection};

fn load_fixture_set() -> RecordSet {
    let records = energy_analytics::energy_dataset::load_records(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../energy_dataset/tests/fixtures/records.json"
    ))
    .unwrap();
    RecordSet::new(records)
}

#[test]
fn filter_is_idempotent_for_every_key_pair() {
    let set = load_fixture_set();
    for year in set.distinct_years() {
        for operation_type in set.distinct_types() {
            let once = by_year_and_type(&set.all(), Some(year), Some(&operation_type));
            let twice = by_year_and_type(&once, Some(year), Some(&operation_type));
            assert_eq!(once, twice, "year {} type {}", year, operation_type);
        }
    }
}

#[test]
fn filters_partition_the_year() {
    let set = load_fixture_set();
    for year in set.distinct_years() {
        let whole = by_year(&set.all(), Some(year));
        let parts: usize = set
            .distinct_types()
            .iter()
            .map(|t| by_year_and_type(&set.all(), Some(year), Some(t)).len())
            .sum();
        assert_eq!(whole.len(), parts);
    }
}

#[test]
fn sum_field_equals_manual_sum_for_every_column() {
    let set = load_fixture_set();
    for column in RecordField::ALL {
        let expected = set.records().iter().fold(0.0, |acc, r| acc + r.value(column));
        assert_eq!(sum_field(&set.all(), field(column)), expected, "{}", column);
    }
}

#[test]
fn grouped_total_matches_subset_total() {
    let set = load_fixture_set();
    let ghg = field(RecordField::GhgEmissions);
    for year in set.distinct_years() {
        let subset = by_year(&set.all(), Some(year));
        let grouped = group_sum(&subset, |r| r.operation_type.as_deref(), &ghg).unwrap();
        assert_eq!(grouped.total(), sum_field(&subset, &ghg));
    }
}

#[test]
fn overflow_grouping_conserves_totals_per_year() {
    let set = load_fixture_set();
    let ghg = field(RecordField::GhgEmissions);
    for year in set.distinct_years() {
        let subset = by_year(&set.all(), Some(year));
        let grouped = group_sum(&subset, |r| r.operation_type.as_deref(), &ghg).unwrap();
        let series = group_with_overflow(&grouped, DEFAULT_OVERFLOW_LABEL, DEFAULT_THRESHOLD_FRACTION);
        assert_eq!(series.total(), grouped.total());
        assert_eq!(series.labels.len(), series.values.len());
    }
}

#[test]
fn ranking_is_stable_and_sorted() {
    let set = load_fixture_set();
    let ghg = field(RecordField::GhgEmissions);
    let top = top_n(&set.all(), &ghg, set.len());
    assert_eq!(top.len(), set.len());
    for pair in top.windows(2) {
        assert!(pair[0].ghg_emissions_kg >= pair[1].ghg_emissions_kg);
    }
    // The two 300 000 kg rinks in 2017 appear in input order.
    let tied: Vec<&str> = top
        .iter()
        .filter(|r| r.ghg_emissions_kg == 300_000.0)
        .filter_map(|r| r.operation_name.as_deref())
        .collect();
    assert_eq!(tied, vec!["Centennial Arena", "Lakeview Rink"]);
}

#[test]
fn yoy_is_none_only_for_zero_prior() {
    for prior in [0.0, 0.5, 100.0] {
        for current in [0.0, 10.0, 250.0] {
            let result = compare(current, prior);
            assert_eq!(result.delta_percent.is_none(), prior == 0.0);
        }
    }
}

#[test]
fn repeated_queries_are_bit_identical() {
    let set = load_fixture_set();
    let selection = Selection::initial(&set).with_year(2017);
    let current = selection.current(&set);
    let first = insight::compose(&current, &set.all(), 2017, selection.operation_type()).unwrap();
    let second = insight::compose(&current, &set.all(), 2017, selection.operation_type()).unwrap();
    assert_eq!(first.total_ghg.to_bits(), second.total_ghg.to_bits());
    assert_eq!(
        first.yoy_delta_percent.map(f64::to_bits),
        second.yoy_delta_percent.map(f64::to_bits)
    );
}

#[test]
fn building_filter_on_filtered_subset() {
    let set = load_fixture_set();
    let year = by_year(&set.all(), Some(2016));
    let northgate = by_building(&year, Some("Northgate Community Centre"));
    assert_eq!(northgate.len(), 1);
    assert_eq!(northgate.records()[0].natural_gas, 0.0);
}

#[test]
fn empty_dataset_is_no_data_not_error() {
    let set = RecordSet::default();
    assert!(set.distinct_years().is_empty());
    assert_eq!(sum_field(&set.all(), field(RecordField::GhgEmissions)), 0.0);
    assert!(top_n(&set.all(), field(RecordField::GhgEmissions), 5).is_empty());
    assert!(matches!(
        average_field(&set.all(), field(RecordField::EnergyIntensity)),
        Err(AnalyticsError::DivisionUndefined)
    ));
}
