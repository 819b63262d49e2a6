use energy_dataset::Record;

use crate::record_set::RecordSet;

pub(crate) fn record(year: i32, operation_type: &str, operation_name: &str, ghg: f64) -> Record {
    Record {
        year,
        operation_type: Some(operation_type.to_string()),
        operation_name: Some(operation_name.to_string()),
        electricity: 0.0,
        natural_gas: 0.0,
        ghg_emissions_kg: ghg,
        energy_intensity: 0.0,
    }
}

pub(crate) fn fixture_set() -> RecordSet {
    let json = include_str!("../../energy_dataset/tests/fixtures/records.json");
    RecordSet::new(energy_dataset::parse_records(json).unwrap())
}
