//! Everything the dashboard shows for one selection, computed in one pass.

use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::insight::{self, InsightSummary};
use crate::kpi::{self, KpiSummary};
use crate::record_set::RecordSet;
use crate::selection::Selection;
use crate::series::{self, EnergyBar, TrendPoint};
use crate::threshold::ChartSeries;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView<'a> {
    pub selection: Selection,
    pub years: Vec<i32>,
    pub types: Vec<String>,
    pub buildings: Vec<String>,
    pub kpis: Option<KpiSummary<'a>>,
    pub insight: Option<InsightSummary>,
    pub energy: Vec<EnergyBar>,
    pub trend: Vec<TrendPoint>,
    pub type_shares: ChartSeries,
}

impl<'a> DashboardView<'a> {
    /// Builds the view for `selection`.
    ///
    /// KPIs, insight, and energy bars cover the selected year and type. The
    /// trend follows the selected building over all years, and the type
    /// shares cover every type in the selected year.
    pub fn build(
        set: &'a RecordSet,
        selection: &Selection,
        config: &AnalyticsConfig,
    ) -> Result<Self, AnalyticsError> {
        let all = set.all();
        let current = selection.current(set);

        let kpis = kpi::summarize(&current, &all, selection, config.top_emitters)?;
        let insight = match selection.year {
            Some(year) if !current.is_empty() => Some(insight::compose(
                &current,
                &all,
                year,
                selection.operation_type(),
            )?),
            _ => None,
        };
        let energy = series::energy_breakdown(&current)?;
        let trend = series::emissions_trend(&all, selection.building());
        let type_shares = series::emissions_by_type(&all, selection.year, config)?;

        tracing::debug!(
            records = set.len(),
            current = current.len(),
            trend_points = trend.len(),
            share_slices = type_shares.len(),
            "built dashboard view"
        );

        Ok(Self {
            selection: selection.clone(),
            years: set.distinct_years(),
            types: set.distinct_types(),
            buildings: set.distinct_buildings(),
            kpis,
            insight,
            energy,
            trend,
            type_shares,
        })
    }
}
