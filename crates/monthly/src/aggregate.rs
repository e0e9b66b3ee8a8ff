//! Per-month pooling of a time-indexed series.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::MonthlyError;

/// Central tendency and spread of one month's observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub mean: f64,
    pub median: f64,
    /// 25th percentile.
    pub p25: f64,
    /// 75th percentile.
    pub p75: f64,
    /// Number of pooled observations.
    pub count: usize,
}

/// Statistics of a named variable keyed by calendar month (1..=12).
///
/// Months without observations have no entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    variable: String,
    months: BTreeMap<u8, MonthlyStats>,
}

impl MonthlySummary {
    /// Name of the summarized variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Stats for `month`, or `None` if it had no observations.
    pub fn get(&self, month: u8) -> Option<&MonthlyStats> {
        self.months.get(&month)
    }

    /// Iterates over months with observations, in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &MonthlyStats)> {
        self.months.iter().map(|(&m, s)| (m, s))
    }

    /// Number of months with observations.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Returns `true` if no month has observations.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Summarizes `values` per calendar month.
///
/// `months[i]` is the calendar month (1..=12) of `values[i]`. All years are
/// pooled: every January observation lands in one group. Percentiles
/// interpolate linearly between closest ranks.
///
/// # Errors
///
/// Returns [`MonthlyError::InvalidInput`] if the series is empty, the two
/// slices differ in length, a value is NaN or infinite, or a month is
/// outside 1..=12.
#[tracing::instrument(skip(values, months), fields(n = values.len()))]
pub fn aggregate_by_month(
    variable: &str,
    values: &[f64],
    months: &[u8],
) -> Result<MonthlySummary, MonthlyError> {
    if values.len() != months.len() {
        return Err(MonthlyError::InvalidInput {
            reason: format!(
                "series length {} does not match month index length {}",
                values.len(),
                months.len()
            ),
        });
    }
    if values.is_empty() {
        return Err(MonthlyError::InvalidInput {
            reason: format!("series '{variable}' is empty"),
        });
    }

    let mut groups: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
    for (i, (&v, &m)) in values.iter().zip(months).enumerate() {
        if !(1..=12).contains(&m) {
            return Err(MonthlyError::InvalidInput {
                reason: format!("month {m} at index {i} is outside 1..=12"),
            });
        }
        if !v.is_finite() {
            return Err(MonthlyError::InvalidInput {
                reason: format!("{variable} value {v} at index {i} is not finite"),
            });
        }
        groups.entry(m).or_default().push(v);
    }

    let months: BTreeMap<u8, MonthlyStats> = groups
        .into_iter()
        .map(|(m, group)| (m, month_stats(&group)))
        .collect();

    tracing::debug!(variable, n_months = months.len(), "monthly summary computed");

    Ok(MonthlySummary {
        variable: variable.to_string(),
        months,
    })
}

fn month_stats(group: &[f64]) -> MonthlyStats {
    let sorted = hydrosum_stats::sorted_ascending(group);
    MonthlyStats {
        mean: hydrosum_stats::mean(group),
        median: hydrosum_stats::median(&sorted),
        p25: hydrosum_stats::quantile_type7(&sorted, 0.25),
        p75: hydrosum_stats::quantile_type7(&sorted, 0.75),
        count: group.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn groups_by_month() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let months = [1, 2, 1, 2, 1, 3];
        let s = aggregate_by_month("flow", &values, &months).unwrap();

        assert_eq!(s.variable(), "flow");
        assert_eq!(s.len(), 3);
        let jan = s.get(1).unwrap();
        assert_eq!(jan.count, 3);
        assert_relative_eq!(jan.mean, 3.0);
        assert_relative_eq!(jan.median, 3.0);
        assert_relative_eq!(jan.p25, 2.0);
        assert_relative_eq!(jan.p75, 4.0);

        let feb = s.get(2).unwrap();
        assert_relative_eq!(feb.mean, 3.0);
        assert_relative_eq!(feb.p25, 2.5);
        assert_relative_eq!(feb.p75, 3.5);
    }

    #[test]
    fn absent_months_have_no_entry() {
        let s = aggregate_by_month("x", &[1.0, 2.0], &[6, 6]).unwrap();
        assert!(s.get(1).is_none());
        assert!(s.get(7).is_none());
        assert_eq!(s.iter().map(|(m, _)| m).collect::<Vec<_>>(), vec![6]);
    }

    #[test]
    fn single_observation_month() {
        let s = aggregate_by_month("x", &[7.5], &[12]).unwrap();
        let dec = s.get(12).unwrap();
        assert_eq!((dec.mean, dec.median, dec.p25, dec.p75), (7.5, 7.5, 7.5, 7.5));
    }

    #[test]
    fn length_mismatch() {
        let err = aggregate_by_month("x", &[1.0, 2.0, 3.0], &[1, 1]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: series length 3 does not match month index length 2"
        );
    }

    #[test]
    fn empty_series() {
        let err = aggregate_by_month("energy_kwh", &[], &[]).unwrap_err();
        assert!(err.to_string().contains("'energy_kwh' is empty"));
    }

    #[test]
    fn month_out_of_range() {
        let err = aggregate_by_month("x", &[1.0, 2.0], &[1, 13]).unwrap_err();
        assert!(err.to_string().contains("month 13 at index 1"));
        assert!(aggregate_by_month("x", &[1.0], &[0]).is_err());
    }

    #[test]
    fn non_finite_values_rejected() {
        let values = [5.0, 4.0, f64::NAN, 1.0, 2.0, 3.0];
        let err = aggregate_by_month("energy_kwh", &values, &[1; 6]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: energy_kwh value NaN at index 2 is not finite"
        );

        let err = aggregate_by_month("flow", &[1.0, f64::NEG_INFINITY], &[3, 3]).unwrap_err();
        assert!(err.to_string().contains("value -inf at index 1"));
    }
}
