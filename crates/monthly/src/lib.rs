//! # hydrosum-monthly
//!
//! Reduces a time-indexed plant series to mean, median and interquartile
//! band per calendar month. Multi-year series are pooled by month.
//!
//! ```
//! use hydrosum_monthly::aggregate_by_month;
//!
//! let s = aggregate_by_month("turbine_flow", &[10.0, 20.0, 30.0], &[1, 1, 2]).unwrap();
//! assert_eq!(s.get(1).unwrap().mean, 15.0);
//! assert!(s.get(3).is_none());
//! ```

mod aggregate;
mod error;

pub use aggregate::{MonthlyStats, MonthlySummary, aggregate_by_month};
pub use error::MonthlyError;
