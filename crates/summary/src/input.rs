//! Summary input: simulation time series, when the run produced one.

use hydrosum_io::PlantTimeseries;

/// Time series output of a simulation run.
///
/// Runs driven by a single flow value have no time series; the summary
/// then only covers turbine selection.
#[derive(Debug, Clone)]
pub enum SimulationSeries {
    /// The run produced a per-time-step table.
    Available(PlantTimeseries),
    /// The run produced no time series.
    Unavailable,
}

impl From<Option<PlantTimeseries>> for SimulationSeries {
    fn from(table: Option<PlantTimeseries>) -> Self {
        match table {
            Some(t) => SimulationSeries::Available(t),
            None => SimulationSeries::Unavailable,
        }
    }
}
