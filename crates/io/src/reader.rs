//! Public reading entry point.

use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::parquet_read;
use crate::plant::PlantTimeseries;

/// Reads a plant simulation table from a Parquet file.
///
/// The file must hold the columns listed in
/// [`PLANT_COLUMNS`](crate::PLANT_COLUMNS), in that order and with the
/// types of [`plant_schema`](crate::plant_schema).
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::Parquet`] if the file cannot be decoded.
/// - [`IoError::Validation`] if the schema or the data is invalid.
pub fn read_parquet(path: &Path) -> Result<PlantTimeseries, IoError> {
    let batches = parquet_read::read_batches(path)?;
    debug!(n_batches = batches.len(), "parquet batches loaded");

    for batch in &batches {
        parquet_read::validate_schema(batch)?;
    }
    let plant = parquet_read::batches_to_plant(&batches)?;

    info!(path = %path.display(), n_rows = plant.len(), "plant simulation table read");
    Ok(plant)
}
