//! # hydrosum-duration
//!
//! Flow-duration analysis: rank a flow series into percent-exceedance values
//! and find the peak of `percent_exceedance * flow`.
//!
//! ```text
//! compute_exceedance()        (exceedance.rs)
//!   └─ ExceedanceCurve
//!        └─ locate_weighted_peak()   (peak.rs)
//! ```
//!
//! # Quick start
//!
//! ```
//! use hydrosum_duration::{compute_exceedance, locate_weighted_peak};
//! use hydrosum_units::UnitSystem;
//!
//! let curve = compute_exceedance(&[10.0, 30.0, 20.0], UnitSystem::Metric).unwrap();
//! assert_eq!(curve.flows(), vec![30.0, 20.0, 10.0]);
//!
//! let peak = locate_weighted_peak(&curve).unwrap();
//! assert_eq!(peak.index, 1);
//! ```
//!
//! Percent exceedance uses `100 * rank / n` with a 1-based rank, so the
//! lowest flow always sits at exactly 100 %.

mod error;
mod exceedance;
mod peak;

pub use error::DurationError;
pub use exceedance::{ExceedanceCurve, ExceedancePoint, compute_exceedance};
pub use peak::{WeightedPeak, locate_weighted_peak, weighted_flows};
