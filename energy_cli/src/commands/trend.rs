use anyhow::Result;
use clap::Args;
use energy_analytics::{series, RecordSet};

use crate::output::{print_json, print_trend_csv, print_trend_table, print_trend_xml, OutputFormat};

#[derive(Args)]
pub struct TrendArgs {
    /// Building name, as listed by `energydash keys`
    #[arg(long)]
    pub building: String,
}

pub fn run(args: &TrendArgs, set: &RecordSet, format: &OutputFormat) -> Result<()> {
    let points = series::emissions_trend(&set.all(), Some(args.building.as_str()));

    if points.is_empty() {
        eprintln!("No records for building '{}'", args.building);
    }

    match format {
        OutputFormat::Table => print_trend_table(&points, false),
        OutputFormat::Markdown => print_trend_table(&points, true),
        OutputFormat::Json => print_json(&points),
        OutputFormat::Csv => print_trend_csv(&points)?,
        OutputFormat::Xml => print_trend_xml(&points)?,
    }

    Ok(())
}
