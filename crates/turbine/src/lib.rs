//! # hydrosum-turbine
//!
//! Turbine type selection. A site's (design flow, net head) point is tested
//! against five empirical regions of influence (Pelton, Turgo, Francis,
//! Kaplan, Crossflow). Regions overlap, so a point may match several
//! families, one, or none.
//!
//! ```
//! use hydrosum_turbine::{OperatingPoint, TurbineRegion, classify};
//! use hydrosum_units::UnitSystem;
//!
//! let c = classify(OperatingPoint::new(1.0, 50.0), UnitSystem::Metric).unwrap();
//! assert!(c.contains(TurbineRegion::Pelton));
//! assert!(c.contains(TurbineRegion::Turgo));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `geometry` | Inclusive point-in-polygon test |
//! | `region` | Fixed region vertex loops |
//! | `classify` | Unit conversion and per-region testing |
//! | `error` | Error types |

mod classify;
mod error;
mod geometry;
mod region;

pub use classify::{Classification, OperatingPoint, classify};
pub use error::TurbineError;
pub use geometry::{Vertex, contains_inclusive, on_boundary};
pub use region::{CHART_LIMITS, TurbineRegion};
