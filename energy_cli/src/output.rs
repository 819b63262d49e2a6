use anyhow::Result;
use energy_analytics::{
    ChartSeries, DashboardView, EnergyBar, InsightSummary, KpiSummary, Record, TrendPoint,
};
use serde::{Serialize, Serializer};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

#[derive(Tabled, Serialize)]
struct KeyRow {
    #[tabled(rename = "Dimension")]
    #[serde(rename = "Dimension")]
    dimension: &'static str,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    #[serde(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct EmitterRow {
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Operation Name")]
    #[serde(rename = "Operation Name")]
    name: String,
    #[tabled(rename = "Operation Type")]
    #[serde(rename = "Operation Type")]
    operation_type: String,
    #[tabled(rename = "GHG Emissions (kg)", display_with = "format_quantity")]
    #[serde(rename = "GHG Emissions (kg)", serialize_with = "serialize_number")]
    ghg_emissions_kg: f64,
}

#[derive(Tabled, Serialize)]
struct EnergyRow {
    #[tabled(rename = "Operation Name")]
    #[serde(rename = "Operation Name")]
    building: String,
    #[tabled(rename = "Electricity (kWh)", display_with = "format_quantity")]
    #[serde(rename = "Electricity (kWh)", serialize_with = "serialize_number")]
    electricity: f64,
    #[tabled(rename = "Natural Gas (m³)", display_with = "format_quantity")]
    #[serde(rename = "Natural Gas (m³)", serialize_with = "serialize_number")]
    natural_gas: f64,
}

#[derive(Tabled, Serialize)]
struct TrendRow {
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i32,
    #[tabled(rename = "GHG Emissions (kg)", display_with = "format_quantity")]
    #[serde(rename = "GHG Emissions (kg)", serialize_with = "serialize_number")]
    ghg_emissions_kg: f64,
}

#[derive(Tabled, Serialize)]
struct ShareRow {
    #[tabled(rename = "Facility Type")]
    #[serde(rename = "Facility Type")]
    label: String,
    #[tabled(rename = "Emissions (kg)", display_with = "format_quantity")]
    #[serde(rename = "Emissions (kg)", serialize_with = "serialize_number")]
    emissions_kg: f64,
    // Table only; the CSV export keeps the two chart columns.
    #[tabled(rename = "Share")]
    #[serde(skip)]
    share: String,
}

/// Distinct values of each selector, as listed by the `keys` command.
#[derive(Serialize)]
pub struct Keys {
    pub years: Vec<i32>,
    pub types: Vec<String>,
    pub buildings: Vec<String>,
}

// -- Row builders --

fn build_key_rows(keys: &Keys) -> Vec<KeyRow> {
    let years = keys.years.iter().map(|y| KeyRow {
        dimension: "Year",
        value: y.to_string(),
    });
    let types = keys.types.iter().map(|t| KeyRow {
        dimension: "Operation Type",
        value: t.clone(),
    });
    let buildings = keys.buildings.iter().map(|b| KeyRow {
        dimension: "Operation Name",
        value: b.clone(),
    });
    years.chain(types).chain(buildings).collect()
}

fn build_kpi_rows(kpis: &KpiSummary<'_>) -> Vec<MetricRow> {
    vec![
        MetricRow {
            metric: "Year".to_string(),
            value: kpis.year.to_string(),
        },
        MetricRow {
            metric: "Average energy intensity".to_string(),
            value: format!("{} EkWh/SqFt", format_decimal(&kpis.average_intensity)),
        },
        MetricRow {
            metric: "Total GHG emissions".to_string(),
            value: format!("{} kg", format_quantity(&kpis.yoy.current_total)),
        },
        MetricRow {
            metric: format!("Change vs {}", kpis.year.saturating_sub(1)),
            value: format_delta(kpis.yoy.delta_percent),
        },
    ]
}

fn build_emitter_rows(records: &[&Record]) -> Vec<EmitterRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| EmitterRow {
            rank: i + 1,
            name: r.operation_name.clone().unwrap_or_default(),
            operation_type: r.operation_type.clone().unwrap_or_default(),
            ghg_emissions_kg: r.ghg_emissions_kg,
        })
        .collect()
}

fn build_insight_rows(insight: &InsightSummary) -> Vec<MetricRow> {
    let top = match &insight.top_contributor {
        Some(c) => format!("{} ({} kg)", c.key, format_quantity(&c.value)),
        None => "n/a".to_string(),
    };
    vec![
        MetricRow {
            metric: "Year".to_string(),
            value: insight.year.to_string(),
        },
        MetricRow {
            metric: "Total GHG emissions".to_string(),
            value: format!("{} kg", format_quantity(&insight.total_ghg)),
        },
        MetricRow {
            metric: format!("Change vs {}", insight.year.saturating_sub(1)),
            value: format_delta(insight.yoy_delta_percent),
        },
        MetricRow {
            metric: "Largest contributor".to_string(),
            value: top,
        },
    ]
}

fn build_energy_rows(bars: &[EnergyBar]) -> Vec<EnergyRow> {
    bars.iter()
        .map(|b| EnergyRow {
            building: b.building.clone(),
            electricity: b.electricity,
            natural_gas: b.natural_gas,
        })
        .collect()
}

fn build_trend_rows(points: &[TrendPoint]) -> Vec<TrendRow> {
    points
        .iter()
        .map(|p| TrendRow {
            year: p.year,
            ghg_emissions_kg: p.ghg_emissions_kg,
        })
        .collect()
}

fn build_share_rows(series: &ChartSeries) -> Vec<ShareRow> {
    let total = series.total();
    series
        .iter()
        .map(|(label, value)| ShareRow {
            label: label.to_string(),
            emissions_kg: value,
            share: format_share(value, total),
        })
        .collect()
}

// -- Shared writers --

fn table_string<T: Tabled>(rows: Vec<T>, markdown: bool) -> String {
    let mut table = Table::new(rows);
    if markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

fn print_csv<T: Serialize>(rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Keys --

pub fn print_keys_table(keys: &Keys, markdown: bool) {
    println!("{}", table_string(build_key_rows(keys), markdown));
}

pub fn print_keys_csv(keys: &Keys) -> Result<()> {
    print_csv(&build_key_rows(keys))
}

pub fn print_keys_xml(keys: &Keys) -> Result<()> {
    println!("{}", xml_output::keys_to_xml(keys)?);
    Ok(())
}

// -- KPIs --

pub fn print_kpis_table(kpis: &KpiSummary<'_>, markdown: bool) {
    println!("{}", table_string(build_kpi_rows(kpis), markdown));
    println!();
    println!("{}", table_string(build_emitter_rows(&kpis.top_emitters), markdown));
}

/// Writes the top-emitter rows; the headline figures are in the other formats.
pub fn print_kpis_csv(kpis: &KpiSummary<'_>) -> Result<()> {
    print_csv(&build_emitter_rows(&kpis.top_emitters))
}

pub fn print_kpis_xml(kpis: &KpiSummary<'_>) -> Result<()> {
    println!("{}", xml_output::kpis_to_xml(kpis)?);
    Ok(())
}

// -- Insights --

pub fn print_insight_table(insight: &InsightSummary, markdown: bool) {
    println!("{}", table_string(build_insight_rows(insight), markdown));
}

pub fn print_insight_csv(insight: &InsightSummary) -> Result<()> {
    print_csv(&build_insight_rows(insight))
}

pub fn print_insight_xml(insight: &InsightSummary) -> Result<()> {
    println!("{}", xml_output::insight_to_xml(insight)?);
    Ok(())
}

// -- Energy --

pub fn print_energy_table(bars: &[EnergyBar], markdown: bool) {
    println!("{}", table_string(build_energy_rows(bars), markdown));
}

pub fn print_energy_csv(bars: &[EnergyBar]) -> Result<()> {
    print_csv(&build_energy_rows(bars))
}

pub fn print_energy_xml(bars: &[EnergyBar]) -> Result<()> {
    println!("{}", xml_output::energy_to_xml(bars)?);
    Ok(())
}

// -- Trend --

pub fn print_trend_table(points: &[TrendPoint], markdown: bool) {
    println!("{}", table_string(build_trend_rows(points), markdown));
}

pub fn print_trend_csv(points: &[TrendPoint]) -> Result<()> {
    print_csv(&build_trend_rows(points))
}

pub fn print_trend_xml(points: &[TrendPoint]) -> Result<()> {
    println!("{}", xml_output::trend_to_xml(points)?);
    Ok(())
}

// -- Shares --

pub fn print_shares_table(series: &ChartSeries, markdown: bool) {
    println!("{}", table_string(build_share_rows(series), markdown));
}

pub fn print_shares_csv(series: &ChartSeries) -> Result<()> {
    print_csv(&build_share_rows(series))
}

pub fn print_shares_xml(series: &ChartSeries) -> Result<()> {
    println!("{}", xml_output::shares_to_xml(series)?);
    Ok(())
}

// -- Dashboard --

/// Prints every panel of the view under its own heading.
pub fn print_dashboard_table(view: &DashboardView<'_>, markdown: bool) {
    let heading = |title: &str| {
        if markdown {
            println!("## {}\n", title);
        } else {
            println!("{}", title);
        }
    };

    heading("Selection");
    let selection = vec![
        MetricRow {
            metric: "Year".to_string(),
            value: view.selection.year.map(|y| y.to_string()).unwrap_or_default(),
        },
        MetricRow {
            metric: "Operation Type".to_string(),
            value: view.selection.operation_type.clone().unwrap_or_default(),
        },
        MetricRow {
            metric: "Operation Name".to_string(),
            value: view.selection.building.clone().unwrap_or_default(),
        },
    ];
    println!("{}\n", table_string(selection, markdown));

    heading("Key metrics");
    match &view.kpis {
        Some(kpis) => print_kpis_table(kpis, markdown),
        None => println!("No data for this selection."),
    }
    println!();

    heading("Insights");
    match &view.insight {
        Some(insight) => print_insight_table(insight, markdown),
        None => println!("No data for this selection."),
    }
    println!();

    heading("Electricity vs natural gas");
    print_energy_table(&view.energy, markdown);
    println!();

    heading("Emissions trend");
    print_trend_table(&view.trend, markdown);
    println!();

    heading("Emissions by facility type");
    print_shares_table(&view.type_shares, markdown);
}

pub fn print_dashboard_xml(view: &DashboardView<'_>) -> Result<()> {
    println!("{}", xml_output::dashboard_to_xml(view)?);
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Number formatting --

/// Rounds to a whole number and groups thousands with commas.
fn format_quantity(value: &f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn format_decimal(value: &f64) -> String {
    format!("{:.2}", value)
}

fn format_delta(delta: Option<f64>) -> String {
    match delta {
        Some(d) if d < 0.0 => format!("↓ {:.1}%", d.abs()),
        Some(d) => format!("↑ {:.1}%", d),
        None => "n/a".to_string(),
    }
}

fn format_share(value: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.1}%", value / total * 100.0)
    } else {
        "n/a".to_string()
    }
}

/// Whole numbers are written without a fractional part.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
