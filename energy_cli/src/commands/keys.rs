//! The `keys` subcommand: distinct selector values in the dataset.

use anyhow::Result;
use energy_analytics::RecordSet;

use crate::output::{print_json, print_keys_csv, print_keys_table, print_keys_xml, Keys, OutputFormat};

pub fn run(set: &RecordSet, format: &OutputFormat) -> Result<()> {
    let keys = Keys {
        years: set.distinct_years(),
        types: set.distinct_types(),
        buildings: set.distinct_buildings(),
    };

    eprintln!(
        "{} years, {} operation types, {} buildings",
        keys.years.len(),
        keys.types.len(),
        keys.buildings.len()
    );

    match format {
        OutputFormat::Table => print_keys_table(&keys, false),
        OutputFormat::Markdown => print_keys_table(&keys, true),
        OutputFormat::Json => print_json(&keys),
        OutputFormat::Csv => print_keys_csv(&keys)?,
        OutputFormat::Xml => print_keys_xml(&keys)?,
    }

    Ok(())
}
