//! # hydrosum-io
//!
//! Reads hydropower plant simulation output from Parquet into a validated
//! column table, [`PlantTimeseries`], that the summary crates consume as
//! plain `&[f64]` slices.

mod error;
mod parquet_read;
mod plant;
mod reader;
mod validate;

pub use error::IoError;
pub use parquet_read::{PLANT_COLUMNS, plant_schema};
pub use plant::PlantTimeseries;
pub use reader::read_parquet;
