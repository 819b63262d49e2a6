//! Analytics engine for municipal facility energy and emissions records.
//!
//! Turns an in-memory dataset into filtered subsets, field aggregates,
//! year-over-year comparisons, rankings, and chart-ready grouped series.
//! Every function here is a pure computation over borrowed records: nothing
//! is cached, nothing is mutated, and no I/O happens outside of `config`.

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod insight;
pub mod kpi;
pub mod ranking;
pub mod record_set;
pub mod selection;
pub mod series;
pub mod threshold;
pub mod yoy;

#[cfg(test)]
pub(crate) mod test_support;

pub use energy_dataset;
pub use energy_dataset::types;
pub use energy_dataset::{Record, RecordField};

pub use aggregate::GroupedAggregate;
pub use config::AnalyticsConfig;
pub use dashboard::DashboardView;
pub use error::AnalyticsError;
pub use insight::{Contributor, InsightSummary};
pub use kpi::KpiSummary;
pub use record_set::{RecordSet, Subset};
pub use selection::Selection;
pub use series::{EnergyBar, TrendPoint};
pub use threshold::ChartSeries;
pub use yoy::YoyComparison;
