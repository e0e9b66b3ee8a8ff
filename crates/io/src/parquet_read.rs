//! Low-level Parquet reading and column extraction.

use std::path::Path;

use arrow::array::{AsArray, RecordBatch};
use arrow::datatypes::{DataType, Field, Float64Type, Int32Type, Schema, UInt8Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;
use crate::plant::PlantTimeseries;
use crate::validate::{self, ValidationCollector};

/// Column names of a plant simulation table, in file order.
pub const PLANT_COLUMNS: [&str; 7] = [
    "year",
    "month",
    "flow",
    "turbine_flow",
    "efficiency",
    "power_kw",
    "energy_kwh",
];

/// Arrow schema of a plant simulation table.
pub fn plant_schema() -> Schema {
    Schema::new(vec![
        Field::new(PLANT_COLUMNS[0], DataType::Int32, false),
        Field::new(PLANT_COLUMNS[1], DataType::UInt8, false),
        Field::new(PLANT_COLUMNS[2], DataType::Float64, false),
        Field::new(PLANT_COLUMNS[3], DataType::Float64, false),
        Field::new(PLANT_COLUMNS[4], DataType::Float64, false),
        Field::new(PLANT_COLUMNS[5], DataType::Float64, false),
        Field::new(PLANT_COLUMNS[6], DataType::Float64, false),
    ])
}

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> = reader.collect::<Result<Vec<_>, _>>()?;

    Ok(batches)
}

/// Validates a batch schema against [`plant_schema`], by position.
///
/// # Errors
///
/// Returns [`IoError::Validation`] listing every name or type mismatch.
pub(crate) fn validate_schema(batch: &RecordBatch) -> Result<(), IoError> {
    let expected = plant_schema();
    let num_cols = batch.num_columns();
    if num_cols != expected.fields().len() {
        return Err(IoError::Validation {
            count: 1,
            details: format!(
                "expected {} columns, got {num_cols}",
                expected.fields().len()
            ),
        });
    }

    let schema = batch.schema();
    let mut mismatches: Vec<String> = Vec::new();
    for (i, want) in expected.fields().iter().enumerate() {
        let got = schema.field(i);
        if got.name() != want.name() {
            mismatches.push(format!(
                "column {i}: expected '{}', got '{}'",
                want.name(),
                got.name()
            ));
        } else if got.data_type() != want.data_type() {
            mismatches.push(format!(
                "column '{}': expected {}, got {}",
                want.name(),
                want.data_type(),
                got.data_type()
            ));
        }
    }

    if !mismatches.is_empty() {
        return Err(IoError::Validation {
            count: mismatches.len(),
            details: mismatches.join("; "),
        });
    }
    Ok(())
}

/// Concatenates record batches into one [`PlantTimeseries`].
///
/// Schema must already be validated. Null cells are rejected rather than
/// read through to the zeroed value buffer.
///
/// # Errors
///
/// Returns [`IoError::Validation`] listing every null cell, or any error
/// from [`PlantTimeseries::new`].
pub(crate) fn batches_to_plant(batches: &[RecordBatch]) -> Result<PlantTimeseries, IoError> {
    let n_rows: usize = batches.iter().map(|b| b.num_rows()).sum();

    let mut nulls = ValidationCollector::new();
    let mut offset = 0;
    for batch in batches {
        for (i, name) in PLANT_COLUMNS.iter().enumerate() {
            nulls.extend(validate::validate_no_nulls(name, batch.column(i).as_ref(), offset));
        }
        offset += batch.num_rows();
    }
    nulls.finish()?;

    let mut years = Vec::with_capacity(n_rows);
    let mut months = Vec::with_capacity(n_rows);
    let mut flow = Vec::with_capacity(n_rows);
    let mut turbine_flow = Vec::with_capacity(n_rows);
    let mut efficiency = Vec::with_capacity(n_rows);
    let mut power_kw = Vec::with_capacity(n_rows);
    let mut energy_kwh = Vec::with_capacity(n_rows);

    for batch in batches {
        years.extend(batch.column(0).as_primitive::<Int32Type>().values().iter());
        months.extend(batch.column(1).as_primitive::<UInt8Type>().values().iter());
        flow.extend(batch.column(2).as_primitive::<Float64Type>().values().iter());
        turbine_flow.extend(batch.column(3).as_primitive::<Float64Type>().values().iter());
        efficiency.extend(batch.column(4).as_primitive::<Float64Type>().values().iter());
        power_kw.extend(batch.column(5).as_primitive::<Float64Type>().values().iter());
        energy_kwh.extend(batch.column(6).as_primitive::<Float64Type>().values().iter());
    }

    PlantTimeseries::new(
        years,
        months,
        flow,
        turbine_flow,
        efficiency,
        power_kw,
        energy_kwh,
    )
}
