use anyhow::{bail, Result};
use clap::Args;
use energy_analytics::{kpi, AnalyticsConfig, RecordSet, Selection};

use crate::output::{print_json, print_kpis_csv, print_kpis_table, print_kpis_xml, OutputFormat};

#[derive(Args)]
pub struct KpisArgs {
    /// Reporting year (e.g. 2017)
    #[arg(long)]
    pub year: i32,

    /// Operation type (e.g. "Indoor ice rinks")
    #[arg(long = "type")]
    pub operation_type: String,

    /// Number of top emitters to list (defaults to the configured value)
    #[arg(long)]
    pub top: Option<usize>,
}

pub fn run(
    args: &KpisArgs,
    set: &RecordSet,
    config: &AnalyticsConfig,
    format: &OutputFormat,
) -> Result<()> {
    let top = args.top.unwrap_or(config.top_emitters);
    if top == 0 {
        bail!("--top must be a positive integer");
    }

    let selection = Selection::default()
        .with_year(args.year)
        .with_type(args.operation_type.as_str());
    let current = selection.current(set);

    let kpis = match kpi::summarize(&current, &set.all(), &selection, top)? {
        Some(kpis) => kpis,
        None => {
            eprintln!(
                "No records for operation type '{}' in {}",
                args.operation_type, args.year
            );
            return Ok(());
        }
    };

    match format {
        OutputFormat::Table => print_kpis_table(&kpis, false),
        OutputFormat::Markdown => print_kpis_table(&kpis, true),
        OutputFormat::Json => print_json(&kpis),
        OutputFormat::Csv => print_kpis_csv(&kpis)?,
        OutputFormat::Xml => print_kpis_xml(&kpis)?,
    }

    Ok(())
}
