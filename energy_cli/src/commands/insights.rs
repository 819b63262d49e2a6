use anyhow::Result;
use clap::Args;
use energy_analytics::{filter, insight, RecordSet};

use crate::output::{
    print_insight_csv, print_insight_table, print_insight_xml, print_json, OutputFormat,
};

#[derive(Args)]
pub struct InsightsArgs {
    /// Reporting year (e.g. 2017)
    #[arg(long)]
    pub year: i32,

    /// Restrict to one operation type; all types when omitted
    #[arg(long = "type")]
    pub operation_type: Option<String>,
}

pub fn run(args: &InsightsArgs, set: &RecordSet, format: &OutputFormat) -> Result<()> {
    let all = set.all();
    let current = match args.operation_type.as_deref() {
        Some(operation_type) => filter::by_year_and_type(&all, Some(args.year), Some(operation_type)),
        None => filter::by_year(&all, Some(args.year)),
    };

    if current.is_empty() {
        eprintln!("No records for {}", args.year);
        return Ok(());
    }

    let summary = insight::compose(&current, &all, args.year, args.operation_type.as_deref())?;

    match format {
        OutputFormat::Table => print_insight_table(&summary, false),
        OutputFormat::Markdown => print_insight_table(&summary, true),
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Csv => print_insight_csv(&summary)?,
        OutputFormat::Xml => print_insight_xml(&summary)?,
    }

    Ok(())
}
