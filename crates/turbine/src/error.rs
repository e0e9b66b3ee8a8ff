//! Error types for the hydrosum-turbine crate.

/// Error type for all fallible operations in the hydrosum-turbine crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TurbineError {
    /// Returned when an operating point cannot be placed on the log-log
    /// selection chart.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
}
