//! Exceedance ranking of a flow series.

use hydrosum_units::UnitSystem;
use serde::Serialize;

use crate::error::DurationError;

/// One point of a flow-duration curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExceedancePoint {
    /// Percent of time the flow is equaled or exceeded.
    pub percent_exceedance: f64,
    /// Flow magnitude, in the curve's unit system.
    pub flow: f64,
}

/// Flow-duration curve: flows sorted descending, each paired with its
/// percent exceedance `100 * rank / n` (rank is 1-based).
///
/// Percents are strictly increasing and flows non-increasing. Equal flows
/// keep distinct ranks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExceedanceCurve {
    points: Vec<ExceedancePoint>,
    units: UnitSystem,
}

impl ExceedanceCurve {
    /// Builds a curve from precomputed points, e.g. a curve read back from
    /// an earlier summary.
    ///
    /// An empty point list is accepted; operations that need at least one
    /// point reject it themselves.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::InvalidInput`] if a percent or flow is not
    /// finite, percents are not strictly increasing, or flows increase
    /// anywhere along the curve.
    pub fn from_points(
        points: Vec<ExceedancePoint>,
        units: UnitSystem,
    ) -> Result<Self, DurationError> {
        if let Some(i) = points
            .iter()
            .position(|p| !p.percent_exceedance.is_finite() || !p.flow.is_finite())
        {
            return Err(DurationError::invalid(format!("non-finite point at index {i}")));
        }
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].percent_exceedance <= pair[0].percent_exceedance {
                return Err(DurationError::invalid(format!(
                    "percent exceedance not strictly increasing at index {}",
                    i + 1
                )));
            }
            if pair[1].flow > pair[0].flow {
                return Err(DurationError::invalid(format!(
                    "flow increases at index {}",
                    i + 1
                )));
            }
        }
        Ok(Self { points, units })
    }

    /// Returns the curve points in ranking order.
    pub fn points(&self) -> &[ExceedancePoint] {
        &self.points
    }

    /// Unit system of the flow values.
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Number of points (equal to the length of the ranked series).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Percent exceedance column.
    pub fn percents(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.percent_exceedance).collect()
    }

    /// Flow column, in descending order.
    pub fn flows(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.flow).collect()
    }

    /// Re-expresses the flows in `target` units. Percents are unchanged.
    pub fn to_units(&self, target: UnitSystem) -> ExceedanceCurve {
        if target == self.units {
            return self.clone();
        }
        let points = self
            .points
            .iter()
            .map(|p| ExceedancePoint {
                percent_exceedance: p.percent_exceedance,
                flow: self.units.convert_flow(p.flow, target),
            })
            .collect();
        ExceedanceCurve {
            points,
            units: target,
        }
    }

    /// Largest percent exceedance whose flow is at least `flow`, i.e. the
    /// share of time a plant sized for `flow` runs full. Returns 0.0 when no
    /// point reaches `flow`.
    ///
    /// `flow` must be in the curve's unit system.
    pub fn percent_time_at_or_above(&self, flow: f64) -> f64 {
        // flows are non-increasing, so the qualifying points form a prefix
        let n_at_or_above = self.points.partition_point(|p| p.flow >= flow);
        if n_at_or_above == 0 {
            0.0
        } else {
            self.points[n_at_or_above - 1].percent_exceedance
        }
    }
}

/// Ranks a flow series into a flow-duration curve.
///
/// The series is sorted descending and the i-th ranked sample (0-based)
/// gets `100 * (i + 1) / n`. The ranking does not depend on units, so flows
/// are kept as given and tagged with `units`.
///
/// # Errors
///
/// Returns [`DurationError::InvalidInput`] if the series is empty or holds a
/// negative or non-finite value.
#[tracing::instrument(skip(flows), fields(n = flows.len()))]
pub fn compute_exceedance(
    flows: &[f64],
    units: UnitSystem,
) -> Result<ExceedanceCurve, DurationError> {
    if flows.is_empty() {
        return Err(DurationError::invalid("flow series is empty"));
    }
    if let Some((i, &v)) = flows.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(DurationError::invalid(format!(
            "flow series has non-finite value {v} at index {i}"
        )));
    }
    if let Some((i, &v)) = flows.iter().enumerate().find(|(_, v)| **v < 0.0) {
        return Err(DurationError::invalid(format!(
            "flow series has negative value {v} at index {i}"
        )));
    }

    let mut sorted = flows.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let n = sorted.len() as f64;
    let points: Vec<ExceedancePoint> = sorted
        .into_iter()
        .enumerate()
        .map(|(i, flow)| ExceedancePoint {
            percent_exceedance: 100.0 * (i + 1) as f64 / n,
            flow,
        })
        .collect();

    tracing::debug!(
        max_flow = points[0].flow,
        min_flow = points[points.len() - 1].flow,
        "ranked flow series"
    );

    Ok(ExceedanceCurve { points, units })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pt(percent_exceedance: f64, flow: f64) -> ExceedancePoint {
        ExceedancePoint {
            percent_exceedance,
            flow,
        }
    }

    #[test]
    fn three_point_series() {
        let curve = compute_exceedance(&[10.0, 30.0, 20.0], UnitSystem::Us).unwrap();
        assert_eq!(curve.flows(), vec![30.0, 20.0, 10.0]);
        let pct = curve.percents();
        assert_relative_eq!(pct[0], 100.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(pct[1], 200.0 / 3.0, epsilon = 1e-12);
        assert_eq!(pct[2], 100.0);
        assert_eq!(curve.units(), UnitSystem::Us);
    }

    #[test]
    fn single_value() {
        let curve = compute_exceedance(&[5.0], UnitSystem::Metric).unwrap();
        assert_eq!(curve.len(), 1);
        assert_eq!(curve.points()[0].percent_exceedance, 100.0);
        assert_eq!(curve.points()[0].flow, 5.0);
    }

    #[test]
    fn duplicates_keep_distinct_ranks() {
        let curve = compute_exceedance(&[4.0, 4.0, 4.0, 4.0], UnitSystem::Metric).unwrap();
        assert_eq!(curve.percents(), vec![25.0, 50.0, 75.0, 100.0]);
        assert_eq!(curve.flows(), vec![4.0; 4]);
    }

    #[test]
    fn zero_flows_are_allowed() {
        let curve = compute_exceedance(&[0.0, 2.0], UnitSystem::Metric).unwrap();
        assert_eq!(curve.flows(), vec![2.0, 0.0]);
    }

    #[test]
    fn empty_is_rejected() {
        let err = compute_exceedance(&[], UnitSystem::Metric).unwrap_err();
        assert!(matches!(err, DurationError::InvalidInput { .. }));
    }

    #[test]
    fn negative_is_rejected() {
        let err = compute_exceedance(&[1.0, -0.5], UnitSystem::Metric).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: flow series has negative value -0.5 at index 1"
        );
    }

    #[test]
    fn nan_is_rejected() {
        let err = compute_exceedance(&[1.0, f64::NAN], UnitSystem::Metric).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn to_units_converts_flows_only() {
        let curve = compute_exceedance(&[100.0, 50.0], UnitSystem::Us).unwrap();
        let metric = curve.to_units(UnitSystem::Metric);
        assert_eq!(metric.units(), UnitSystem::Metric);
        assert_eq!(metric.percents(), curve.percents());
        assert_relative_eq!(metric.flows()[0], 2.83168, epsilon = 1e-9);
        assert_relative_eq!(metric.flows()[1], 1.41584, epsilon = 1e-9);
    }

    #[test]
    fn to_units_same_system_is_identity() {
        let curve = compute_exceedance(&[3.0, 1.0], UnitSystem::Metric).unwrap();
        assert_eq!(curve.to_units(UnitSystem::Metric), curve);
    }

    #[test]
    fn from_points_checks_ordering() {
        let ok = vec![pt(50.0, 2.0), pt(100.0, 2.0)];
        assert!(ExceedanceCurve::from_points(ok, UnitSystem::Metric).is_ok());

        let rising = vec![pt(50.0, 1.0), pt(100.0, 2.0)];
        let err = ExceedanceCurve::from_points(rising, UnitSystem::Metric).unwrap_err();
        assert!(err.to_string().contains("flow increases at index 1"));

        let repeated_pct = vec![pt(50.0, 2.0), pt(50.0, 1.0)];
        assert!(ExceedanceCurve::from_points(repeated_pct, UnitSystem::Metric).is_err());
    }

    #[test]
    fn from_points_rejects_non_finite() {
        let nan_flow = vec![pt(50.0, f64::NAN), pt(100.0, 1.0)];
        let err = ExceedanceCurve::from_points(nan_flow, UnitSystem::Metric).unwrap_err();
        assert!(err.to_string().contains("non-finite point at index 0"));

        let nan_pct = vec![pt(50.0, 2.0), pt(f64::NAN, 1.0)];
        assert!(ExceedanceCurve::from_points(nan_pct, UnitSystem::Metric).is_err());

        let inf_flow = vec![pt(100.0, f64::INFINITY)];
        assert!(ExceedanceCurve::from_points(inf_flow, UnitSystem::Us).is_err());
    }

    #[test]
    fn from_points_accepts_empty() {
        let curve = ExceedanceCurve::from_points(Vec::new(), UnitSystem::Metric).unwrap();
        assert!(curve.is_empty());
    }

    #[test]
    fn percent_time_at_or_above() {
        // sorted: 40, 30, 20, 10 -> 25, 50, 75, 100
        let curve = compute_exceedance(&[10.0, 20.0, 30.0, 40.0], UnitSystem::Metric).unwrap();
        assert_eq!(curve.percent_time_at_or_above(25.0), 50.0);
        assert_eq!(curve.percent_time_at_or_above(30.0), 50.0);
        assert_eq!(curve.percent_time_at_or_above(5.0), 100.0);
        assert_eq!(curve.percent_time_at_or_above(50.0), 0.0);
    }
}
