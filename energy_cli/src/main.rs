mod commands;
mod output;
mod xml_output;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use energy_analytics::config::load_config;
use energy_analytics::energy_dataset::load_records;
use energy_analytics::{AnalyticsConfig, RecordSet};

use crate::output::OutputFormat;

/// Environment variable naming the dataset when `--data` is not given.
const DATA_ENV: &str = "ENERGYDASH_DATA";

#[derive(Parser)]
#[command(name = "energydash")]
#[command(about = "Explore energy use and greenhouse gas emissions of municipal facilities")]
struct Cli {
    /// Output format: table, json, csv, markdown, or xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Path to the facility records JSON file (defaults to $ENERGYDASH_DATA)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Path to a YAML file with analytics settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the years, operation types, and buildings in the dataset
    Keys,
    /// Average intensity, top emitters, and year-over-year change
    Kpis(commands::kpis::KpisArgs),
    /// Total emissions, change, and largest contributing type
    Insights(commands::insights::InsightsArgs),
    /// Electricity and natural gas per building
    Energy(commands::energy::EnergyArgs),
    /// Emissions of one building over the years
    Trend(commands::trend::TrendArgs),
    /// Emissions share by operation type, small types grouped
    Shares(commands::shares::SharesArgs),
    /// Every panel of the dashboard for one selection
    Dashboard(commands::dashboard::DashboardArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("energy_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = parse_format(&cli.output)?;
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AnalyticsConfig::default(),
    };
    let set = load_dataset(cli.data.as_deref())?;

    match &cli.command {
        Commands::Keys => commands::keys::run(&set, &format)?,
        Commands::Kpis(args) => commands::kpis::run(args, &set, &config, &format)?,
        Commands::Insights(args) => commands::insights::run(args, &set, &format)?,
        Commands::Energy(args) => commands::energy::run(args, &set, &format)?,
        Commands::Trend(args) => commands::trend::run(args, &set, &format)?,
        Commands::Shares(args) => commands::shares::run(args, &set, &config, &format)?,
        Commands::Dashboard(args) => commands::dashboard::run(args, &set, &config, &format)?,
    }

    Ok(())
}

fn parse_format(name: &str) -> Result<OutputFormat> {
    Ok(match name {
        "table" => OutputFormat::Table,
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        "xml" => OutputFormat::Xml,
        other => bail!(
            "unknown output format '{}': expected table, json, csv, markdown, or xml",
            other
        ),
    })
}

fn load_dataset(flag: Option<&Path>) -> Result<RecordSet> {
    let path = match flag {
        Some(path) => path.to_path_buf(),
        None => match std::env::var_os(DATA_ENV) {
            Some(path) => PathBuf::from(path),
            None => bail!("no dataset given: pass --data or set {}", DATA_ENV),
        },
    };
    let records = load_records(&path)?;
    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(RecordSet::new(records))
}
