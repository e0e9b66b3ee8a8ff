//! Plant simulation output container.

use crate::error::IoError;
use crate::validate::{self, ValidationCollector};

/// Time series produced by a hydropower plant simulation, one row per
/// time step.
///
/// Flows are in the unit system of the run that produced them (cfs or
/// m³/s); the table itself does not convert.
#[derive(Debug, Clone)]
pub struct PlantTimeseries {
    years: Vec<i32>,
    months: Vec<u8>,
    flow: Vec<f64>,
    turbine_flow: Vec<f64>,
    efficiency: Vec<f64>,
    power_kw: Vec<f64>,
    energy_kwh: Vec<f64>,
}

impl PlantTimeseries {
    /// Creates a new table after validating every column.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every failed check:
    /// - the table has no rows
    /// - column lengths differ
    /// - a month is outside 1..=12
    /// - `flow` or `turbine_flow` is negative or non-finite
    /// - `efficiency`, `power_kw` or `energy_kwh` is non-finite
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        years: Vec<i32>,
        months: Vec<u8>,
        flow: Vec<f64>,
        turbine_flow: Vec<f64>,
        efficiency: Vec<f64>,
        power_kw: Vec<f64>,
        energy_kwh: Vec<f64>,
    ) -> Result<Self, IoError> {
        let mut c = ValidationCollector::new();
        if months.is_empty() {
            c.push("table has no rows");
        }
        c.extend(validate::validate_lengths(
            months.len(),
            &[
                ("year", years.len()),
                ("flow", flow.len()),
                ("turbine_flow", turbine_flow.len()),
                ("efficiency", efficiency.len()),
                ("power_kw", power_kw.len()),
                ("energy_kwh", energy_kwh.len()),
            ],
        ));
        c.extend(validate::validate_months(&months));
        c.extend(validate::validate_flow("flow", &flow));
        c.extend(validate::validate_flow("turbine_flow", &turbine_flow));
        c.extend(validate::validate_finite("efficiency", &efficiency));
        c.extend(validate::validate_finite("power_kw", &power_kw));
        c.extend(validate::validate_finite("energy_kwh", &energy_kwh));
        c.finish()?;

        Ok(Self {
            years,
            months,
            flow,
            turbine_flow,
            efficiency,
            power_kw,
            energy_kwh,
        })
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Always `false`; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Calendar year of each time step.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Calendar month (1..=12) of each time step.
    pub fn months(&self) -> &[u8] {
        &self.months
    }

    /// River flow available at the intake.
    pub fn flow(&self) -> &[f64] {
        &self.flow
    }

    /// Flow routed through the turbine.
    pub fn turbine_flow(&self) -> &[f64] {
        &self.turbine_flow
    }

    /// Turbine efficiency (fraction).
    pub fn efficiency(&self) -> &[f64] {
        &self.efficiency
    }

    /// Power output, kW.
    pub fn power_kw(&self) -> &[f64] {
        &self.power_kw
    }

    /// Energy generated during the time step, kWh.
    pub fn energy_kwh(&self) -> &[f64] {
        &self.energy_kwh
    }
}
