//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus helpers that check the
//! invariants of a plant simulation table.

use arrow::array::Array;

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Append every error recorded by `other`.
    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Check that every named column has `expected` rows.
pub(crate) fn validate_lengths(expected: usize, columns: &[(&str, usize)]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for &(name, len) in columns {
        if len != expected {
            c.push(format!("{name} length {len} != month length {expected}"));
        }
    }
    c
}

/// Check that every month lies in 1..=12.
pub(crate) fn validate_months(months: &[u8]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, &m) in months.iter().enumerate() {
        if !(1..=12).contains(&m) {
            c.push(format!("month {m} at row {i} is outside 1..=12"));
        }
    }
    c
}

/// Check that a flow column is finite and non-negative.
///
/// Records one message per offending row.
pub(crate) fn validate_flow(name: &str, values: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() || v < 0.0 {
            c.push(format!("invalid {name} at row {i}: {v}"));
        }
    }
    c
}

/// Check that every value of a measured column is finite.
pub(crate) fn validate_finite(name: &str, values: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            c.push(format!("non-finite {name} at row {i}: {v}"));
        }
    }
    c
}

/// Check that a column has no null cells.
///
/// `offset` is the table row of the column's first element, so messages
/// refer to rows of the concatenated table rather than of one batch.
pub(crate) fn validate_no_nulls(
    name: &str,
    column: &dyn Array,
    offset: usize,
) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    if column.null_count() == 0 {
        return c;
    }
    for i in 0..column.len() {
        if column.is_null(i) {
            c.push(format!("null {name} at row {}", offset + i));
        }
    }
    c
}
