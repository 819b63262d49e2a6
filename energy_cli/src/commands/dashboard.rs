//! The `dashboard` subcommand: every panel for one selection.
//!
//! Selectors left out on the command line take the values the dashboard
//! opens with: the first year, type, and building of the dataset.

use anyhow::{bail, Result};
use clap::Args;
use energy_analytics::{AnalyticsConfig, DashboardView, RecordSet, Selection};

use crate::output::{print_dashboard_table, print_dashboard_xml, print_json, OutputFormat};

#[derive(Args)]
pub struct DashboardArgs {
    /// Reporting year
    #[arg(long)]
    pub year: Option<i32>,

    /// Operation type
    #[arg(long = "type")]
    pub operation_type: Option<String>,

    /// Building for the emissions trend
    #[arg(long)]
    pub building: Option<String>,
}

pub fn run(
    args: &DashboardArgs,
    set: &RecordSet,
    config: &AnalyticsConfig,
    format: &OutputFormat,
) -> Result<()> {
    let mut selection = Selection::initial(set);
    if let Some(year) = args.year {
        selection = selection.with_year(year);
    }
    if let Some(operation_type) = &args.operation_type {
        selection = selection.with_type(operation_type.as_str());
    }
    if let Some(building) = &args.building {
        selection = selection.with_building(building.as_str());
    }

    let view = DashboardView::build(set, &selection, config)?;

    match format {
        OutputFormat::Table => print_dashboard_table(&view, false),
        OutputFormat::Markdown => print_dashboard_table(&view, true),
        OutputFormat::Json => print_json(&view),
        OutputFormat::Xml => print_dashboard_xml(&view)?,
        OutputFormat::Csv => {
            bail!("the dashboard has several panels; use a single-panel command for CSV")
        }
    }

    Ok(())
}
