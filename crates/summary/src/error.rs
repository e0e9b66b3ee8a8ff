//! Summary error types.

use hydrosum_duration::DurationError;
use hydrosum_monthly::MonthlyError;
use hydrosum_turbine::TurbineError;

/// Errors that can occur while assembling a plant summary.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// Neither a design flow nor a nominal flow was configured.
    #[error("no design flow: set a design flow or a nominal flow for turbine selection")]
    MissingDesignFlow,

    /// Flow-duration analysis failed.
    #[error("flow duration: {0}")]
    Duration(#[from] DurationError),

    /// Turbine classification failed.
    #[error("turbine selection: {0}")]
    Turbine(#[from] TurbineError),

    /// Monthly aggregation failed.
    #[error("monthly summary: {0}")]
    Monthly(#[from] MonthlyError),

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
