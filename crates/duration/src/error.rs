//! Error types for the hydrosum-duration crate.

/// Error type for all fallible operations in the hydrosum-duration crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DurationError {
    /// Returned when a flow series or curve cannot be ranked.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
}

impl DurationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        DurationError::InvalidInput {
            reason: reason.into(),
        }
    }
}
