//! JSON output structures for plant summaries.
//!
//! Every series here is plotting-ready; the chart renderer only adds axes,
//! scales and styling.

use hydrosum_duration::{ExceedancePoint, WeightedPeak};
use hydrosum_monthly::MonthlySummary;
use hydrosum_turbine::{TurbineRegion, Vertex};
use hydrosum_units::UnitSystem;
use serde::Serialize;

use crate::error::SummaryError;
use crate::performance::PerformancePoint;

/// Top-level plant summary.
#[derive(Debug, Serialize)]
pub struct PlantSummary {
    /// Unit system of every flow in this document except the metric
    /// turbine chart.
    pub units: UnitSystem,
    pub turbine: TurbineSelection,
    /// `None` when the run produced no time series.
    pub flow_duration: Option<FlowDuration>,
    /// `None` when the run produced no time series.
    pub performance: Option<Vec<PerformancePoint>>,
    /// `None` when the run produced no time series.
    pub monthly: Option<MonthlyGeneration>,
}

/// Turbine selection chart data.
#[derive(Debug, Serialize)]
pub struct TurbineSelection {
    /// Flow used for selection, in `units`.
    pub design_flow: f64,
    /// Net head, in `units`.
    pub net_head: f64,
    /// Site point on the chart, m³/s and m.
    pub site: Vertex,
    /// Regions containing the site.
    pub regions: Vec<TurbineRegion>,
    /// Outline of every region, for drawing.
    pub outlines: Vec<RegionOutline>,
    /// Axis window shared by flow and head.
    pub chart_limits: (f64, f64),
}

/// A region's closed vertex loop.
#[derive(Debug, Serialize)]
pub struct RegionOutline {
    pub region: TurbineRegion,
    pub vertices: Vec<Vertex>,
}

/// Flow-duration curve data.
#[derive(Debug, Serialize)]
pub struct FlowDuration {
    /// Flow unit label, `"cfs"` or `"m3/s"`.
    pub flow_units: &'static str,
    pub curve: Vec<ExceedancePoint>,
    /// `percent_exceedance * flow` for each curve point.
    pub weighted: Vec<f64>,
    pub peak: WeightedPeak,
    /// Design flow marker; `None` without a design or nominal flow.
    pub design_flow: Option<DesignFlowMarker>,
}

/// Where the design flow sits on the flow-duration curve.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DesignFlowMarker {
    pub flow: f64,
    /// Percent of time the river supplies at least the design flow.
    pub percent_time_running_full: f64,
}

/// Monthly statistics of the generation time series.
#[derive(Debug, Serialize)]
pub struct MonthlyGeneration {
    pub turbine_flow: MonthlySummary,
    pub energy_kwh: MonthlySummary,
    /// `None` without a positive rated power.
    pub capacity_factor: Option<MonthlySummary>,
}

/// Serialize a summary to pretty-printed JSON.
pub fn to_json(summary: &PlantSummary) -> Result<String, SummaryError> {
    serde_json::to_string_pretty(summary).map_err(|e| SummaryError::Serialization {
        reason: e.to_string(),
    })
}
