use anyhow::Result;
use clap::Args;
use energy_analytics::{series, AnalyticsConfig, RecordSet};

use crate::output::{print_json, print_shares_csv, print_shares_table, print_shares_xml, OutputFormat};

#[derive(Args)]
pub struct SharesArgs {
    /// Reporting year (e.g. 2017)
    #[arg(long)]
    pub year: i32,

    /// Fraction of the total below which a type is grouped (0.0-1.0)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Label of the grouped bucket
    #[arg(long)]
    pub other_label: Option<String>,
}

pub fn run(
    args: &SharesArgs,
    set: &RecordSet,
    config: &AnalyticsConfig,
    format: &OutputFormat,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(threshold) = args.threshold {
        config.threshold_fraction = threshold;
    }
    if let Some(label) = &args.other_label {
        config.overflow_label = label.clone();
    }
    config.validate()?;

    let shares = series::emissions_by_type(&set.all(), Some(args.year), &config)?;

    match format {
        OutputFormat::Table => print_shares_table(&shares, false),
        OutputFormat::Markdown => print_shares_table(&shares, true),
        OutputFormat::Json => print_json(&shares),
        OutputFormat::Csv => print_shares_csv(&shares)?,
        OutputFormat::Xml => print_shares_xml(&shares)?,
    }

    Ok(())
}
