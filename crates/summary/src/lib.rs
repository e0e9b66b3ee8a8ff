//! hydrosum summary: turn a plant simulation run into plotting-ready data.
//!
//! ```text
//! summarize()
//!   ├─ turbine selection          (always)
//!   └─ SimulationSeries::Available
//!        ├─ flow-duration curve + weighted peak + design flow marker
//!        ├─ performance curve     (performance.rs)
//!        └─ monthly turbine flow, energy, capacity factor
//! ```

mod config;
mod error;
mod input;
mod output;
mod performance;

use hydrosum_duration::{compute_exceedance, locate_weighted_peak, weighted_flows};
use hydrosum_io::PlantTimeseries;
use hydrosum_monthly::aggregate_by_month;
use hydrosum_turbine::{CHART_LIMITS, OperatingPoint, TurbineRegion, classify};
use tracing::{debug, warn};

pub use config::SummaryConfig;
pub use error::SummaryError;
pub use input::SimulationSeries;
pub use output::{
    DesignFlowMarker, FlowDuration, MonthlyGeneration, PlantSummary, RegionOutline,
    TurbineSelection, to_json,
};
pub use performance::{PerformancePoint, capacity_factor, performance_curve};

/// Summarize a plant simulation run.
///
/// Turbine selection only needs the site configuration. The flow-duration,
/// performance and monthly sections need the simulation time series and are
/// `None` for [`SimulationSeries::Unavailable`].
///
/// # Errors
///
/// Returns [`SummaryError::MissingDesignFlow`] if the configuration has no
/// flow to select a turbine with, and wraps any error from the
/// flow-duration, turbine or monthly computations.
#[tracing::instrument(skip_all, fields(units = %config.units()))]
pub fn summarize(
    series: &SimulationSeries,
    config: &SummaryConfig,
) -> Result<PlantSummary, SummaryError> {
    let turbine = turbine_selection(config)?;

    let (flow_duration, performance, monthly) = match series {
        SimulationSeries::Available(table) => {
            debug!(n_rows = table.len(), "summarizing simulation time series");
            (
                Some(flow_duration(table, config)?),
                Some(performance_curve(
                    table.turbine_flow(),
                    table.efficiency(),
                    table.power_kw(),
                )),
                Some(monthly_generation(table, config)?),
            )
        }
        SimulationSeries::Unavailable => {
            warn!(
                "flow duration, performance and monthly summaries require simulation \
                 time series data; only turbine selection is reported"
            );
            (None, None, None)
        }
    };

    Ok(PlantSummary {
        units: config.units(),
        turbine,
        flow_duration,
        performance,
        monthly,
    })
}

fn turbine_selection(config: &SummaryConfig) -> Result<TurbineSelection, SummaryError> {
    let design_flow = config
        .selection_flow()
        .ok_or(SummaryError::MissingDesignFlow)?;
    let classification = classify(
        OperatingPoint::new(design_flow, config.net_head()),
        config.units(),
    )?;

    let outlines = TurbineRegion::ALL
        .into_iter()
        .map(|region| RegionOutline {
            region,
            vertices: region.vertices().to_vec(),
        })
        .collect();

    Ok(TurbineSelection {
        design_flow,
        net_head: config.net_head(),
        site: classification.point,
        regions: classification.regions,
        outlines,
        chart_limits: CHART_LIMITS,
    })
}

fn flow_duration(
    table: &PlantTimeseries,
    config: &SummaryConfig,
) -> Result<FlowDuration, SummaryError> {
    let curve = compute_exceedance(table.flow(), config.units())?;
    let peak = locate_weighted_peak(&curve)?;
    debug!(
        peak_percent = peak.percent_exceedance,
        peak_value = peak.weighted_value,
        "weighted flow peak located"
    );

    let design_flow = config.selection_flow().map(|flow| DesignFlowMarker {
        flow,
        percent_time_running_full: curve.percent_time_at_or_above(flow),
    });

    Ok(FlowDuration {
        flow_units: curve.units().flow_label(),
        weighted: weighted_flows(&curve),
        curve: curve.points().to_vec(),
        peak,
        design_flow,
    })
}

fn monthly_generation(
    table: &PlantTimeseries,
    config: &SummaryConfig,
) -> Result<MonthlyGeneration, SummaryError> {
    let months = table.months();
    let turbine_flow = aggregate_by_month("turbine_flow", table.turbine_flow(), months)?;
    let energy_kwh = aggregate_by_month("energy_kwh", table.energy_kwh(), months)?;

    let capacity = match config.rated_power_kw() {
        Some(rated) if rated.is_finite() && rated > 0.0 => {
            let cf = capacity_factor(table.power_kw(), rated);
            Some(aggregate_by_month("capacity_factor", &cf, months)?)
        }
        Some(rated) => {
            warn!(rated, "rated power must be positive; capacity factor skipped");
            None
        }
        None => {
            warn!("no rated power configured; capacity factor skipped");
            None
        }
    };

    Ok(MonthlyGeneration {
        turbine_flow,
        energy_kwh,
        capacity_factor: capacity,
    })
}
