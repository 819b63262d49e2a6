//! CLI subcommand implementations.

pub mod dashboard;
pub mod energy;
pub mod insights;
pub mod keys;
pub mod kpis;
pub mod shares;
pub mod trend;
