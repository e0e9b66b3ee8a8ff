//! Operating point classification.

use hydrosum_units::UnitSystem;
use serde::Serialize;

use crate::error::TurbineError;
use crate::geometry::Vertex;
use crate::region::TurbineRegion;

/// A site's design condition: flow and net head in the caller's units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    /// Design flow (cfs or m³/s).
    pub flow: f64,
    /// Net head (ft or m).
    pub head: f64,
}

impl OperatingPoint {
    /// Creates an operating point.
    pub fn new(flow: f64, head: f64) -> Self {
        Self { flow, head }
    }

    /// Converts to metric chart coordinates.
    pub fn to_metric(self, units: UnitSystem) -> Vertex {
        Vertex::new(units.flow_to_metric(self.flow), units.head_to_metric(self.head))
    }
}

/// Regions whose polygon contains an operating point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// The tested point, in m³/s and m.
    pub point: Vertex,
    /// Matching regions in [`TurbineRegion::ALL`] order. May be empty, and
    /// holds several entries where regions overlap.
    pub regions: Vec<TurbineRegion>,
}

impl Classification {
    /// Returns `true` if `region` matched.
    pub fn contains(&self, region: TurbineRegion) -> bool {
        self.regions.contains(&region)
    }

    /// Returns `true` if no region matched.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Tests an operating point against every turbine region.
///
/// US points are converted to m³/s and m before testing. Each region is
/// tested on its own, so overlapping regions all report a match.
///
/// # Errors
///
/// Returns [`TurbineError::InvalidInput`] if flow or head is non-positive or
/// non-finite.
#[tracing::instrument]
pub fn classify(point: OperatingPoint, units: UnitSystem) -> Result<Classification, TurbineError> {
    check_positive("flow", point.flow)?;
    check_positive("head", point.head)?;

    let metric = point.to_metric(units);
    let regions: Vec<TurbineRegion> = TurbineRegion::ALL
        .into_iter()
        .filter(|r| r.contains(metric))
        .collect();

    if regions.is_empty() {
        tracing::debug!(
            flow = metric.flow,
            head = metric.head,
            "operating point outside every turbine region"
        );
    } else {
        tracing::debug!(?regions, "turbine regions matched");
    }

    Ok(Classification {
        point: metric,
        regions,
    })
}

fn check_positive(name: &str, value: f64) -> Result<(), TurbineError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TurbineError::InvalidInput {
            reason: format!("{name} must be positive and finite, got {value}"),
        });
    }
    Ok(())
}
