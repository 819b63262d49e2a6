use anyhow::Result;
use clap::Args;
use energy_analytics::{filter, series, RecordSet};

use crate::output::{print_energy_csv, print_energy_table, print_energy_xml, print_json, OutputFormat};

#[derive(Args)]
pub struct EnergyArgs {
    /// Reporting year (e.g. 2017)
    #[arg(long)]
    pub year: i32,

    /// Operation type (e.g. "Pools")
    #[arg(long = "type")]
    pub operation_type: String,
}

pub fn run(args: &EnergyArgs, set: &RecordSet, format: &OutputFormat) -> Result<()> {
    let current = filter::by_year_and_type(
        &set.all(),
        Some(args.year),
        Some(args.operation_type.as_str()),
    );
    let bars = series::energy_breakdown(&current)?;

    eprintln!("{} buildings", bars.len());

    match format {
        OutputFormat::Table => print_energy_table(&bars, false),
        OutputFormat::Markdown => print_energy_table(&bars, true),
        OutputFormat::Json => print_json(&bars),
        OutputFormat::Csv => print_energy_csv(&bars)?,
        OutputFormat::Xml => print_energy_xml(&bars)?,
    }

    Ok(())
}
