//! Error types for the hydrosum-monthly crate.

/// Error type for all fallible operations in the hydrosum-monthly crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MonthlyError {
    /// Returned when the series cannot be grouped by month.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
}
