//! Turbine performance curve and capacity factor.

use std::collections::HashSet;

use serde::Serialize;

/// Efficiency and power at one turbine flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformancePoint {
    pub turbine_flow: f64,
    pub efficiency: f64,
    pub power_kw: f64,
}

/// Efficiency and power as a function of turbine flow.
///
/// Keeps the first row for each distinct turbine flow, then sorts by
/// turbine flow ascending. `-0.0` and `0.0` are the same flow.
pub fn performance_curve(
    turbine_flow: &[f64],
    efficiency: &[f64],
    power_kw: &[f64],
) -> Vec<PerformancePoint> {
    let mut seen: HashSet<u64> = HashSet::new();
    let mut points: Vec<PerformancePoint> = Vec::new();
    for ((&q, &eff), &p) in turbine_flow.iter().zip(efficiency).zip(power_kw) {
        // adding +0.0 folds -0.0 into 0.0
        let q = q + 0.0;
        if !seen.insert(q.to_bits()) {
            continue;
        }
        points.push(PerformancePoint {
            turbine_flow: q,
            efficiency: eff,
            power_kw: p,
        });
    }
    points.sort_by(|a, b| a.turbine_flow.total_cmp(&b.turbine_flow));
    points
}

/// Power divided by rated power, per time step.
pub fn capacity_factor(power_kw: &[f64], rated_power_kw: f64) -> Vec<f64> {
    power_kw.iter().map(|p| p / rated_power_kw).collect()
}
