//! Summary configuration.

use hydrosum_units::UnitSystem;

/// Site description needed to summarize a plant.
///
/// Flows and head are in the configured unit system.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    units: UnitSystem,
    net_head: f64,
    design_flow: Option<f64>,
    flow: Option<f64>,
    rated_power_kw: Option<f64>,
}

impl SummaryConfig {
    /// Creates a configuration for a site with the given net head.
    pub fn new(units: UnitSystem, net_head: f64) -> Self {
        Self {
            units,
            net_head,
            design_flow: None,
            flow: None,
            rated_power_kw: None,
        }
    }

    /// Set the design flow used for turbine selection.
    pub fn with_design_flow(mut self, design_flow: f64) -> Self {
        self.design_flow = Some(design_flow);
        self
    }

    /// Set the nominal flow, used when no design flow is given.
    pub fn with_flow(mut self, flow: f64) -> Self {
        self.flow = Some(flow);
        self
    }

    /// Set the rated power (kW) used for the capacity factor.
    pub fn with_rated_power_kw(mut self, rated_power_kw: f64) -> Self {
        self.rated_power_kw = Some(rated_power_kw);
        self
    }

    /// Returns the unit system.
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Returns the net head.
    pub fn net_head(&self) -> f64 {
        self.net_head
    }

    /// Returns the design flow, if set.
    pub fn design_flow(&self) -> Option<f64> {
        self.design_flow
    }

    /// Returns the nominal flow, if set.
    pub fn flow(&self) -> Option<f64> {
        self.flow
    }

    /// Returns the rated power in kW, if set.
    pub fn rated_power_kw(&self) -> Option<f64> {
        self.rated_power_kw
    }

    /// Flow for turbine selection: the design flow, else the nominal flow.
    pub fn selection_flow(&self) -> Option<f64> {
        self.design_flow.or(self.flow)
    }
}
