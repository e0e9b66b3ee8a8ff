//! Weighted-peak detection on a flow-duration curve.

use serde::Serialize;

use crate::error::DurationError;
use crate::exceedance::ExceedanceCurve;

/// Maximum of `percent_exceedance * flow` along a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedPeak {
    /// Percent exceedance at which the weighted value peaks.
    pub percent_exceedance: f64,
    /// The peak weighted value.
    pub weighted_value: f64,
    /// Position of the peak in the curve.
    pub index: usize,
}

/// Weighted series `percent_exceedance * flow`, one value per curve point.
pub fn weighted_flows(curve: &ExceedanceCurve) -> Vec<f64> {
    curve
        .points()
        .iter()
        .map(|p| p.percent_exceedance * p.flow)
        .collect()
}

/// Locates the point maximizing `percent_exceedance * flow`.
///
/// Ties resolve to the first point in curve order.
///
/// # Errors
///
/// Returns [`DurationError::InvalidInput`] if the curve is empty.
pub fn locate_weighted_peak(curve: &ExceedanceCurve) -> Result<WeightedPeak, DurationError> {
    let weighted = weighted_flows(curve);

    let mut best: Option<(usize, f64)> = None;
    for (i, &w) in weighted.iter().enumerate() {
        if best.is_none_or(|(_, b)| w > b) {
            best = Some((i, w));
        }
    }

    let (index, weighted_value) =
        best.ok_or_else(|| DurationError::invalid("exceedance curve is empty"))?;

    Ok(WeightedPeak {
        percent_exceedance: curve.points()[index].percent_exceedance,
        weighted_value,
        index,
    })
}
