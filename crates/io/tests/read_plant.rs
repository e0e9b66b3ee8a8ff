//! Integration tests: read plant simulation tables from Parquet.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int32Array, RecordBatch, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema};
use hydrosum_io::{IoError, plant_schema, read_parquet};
use parquet::arrow::ArrowWriter;

fn write(path: &Path, schema: Schema, columns: Vec<ArrayRef>) {
    let schema = Arc::new(schema);
    let batch = RecordBatch::try_new(schema.clone(), columns).expect("valid batch");
    let file = std::fs::File::create(path).expect("create file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("writer");
    writer.write(&batch).expect("write batch");
    writer.close().expect("close writer");
}

fn plant_columns(months: Vec<u8>, flow: Vec<f64>) -> Vec<ArrayRef> {
    let n = months.len();
    vec![
        Arc::new(Int32Array::from(vec![2019; n])),
        Arc::new(UInt8Array::from(months)),
        Arc::new(Float64Array::from(flow)),
        Arc::new(Float64Array::from(vec![5.0; n])),
        Arc::new(Float64Array::from(vec![0.9; n])),
        Arc::new(Float64Array::from(vec![300.0; n])),
        Arc::new(Float64Array::from(vec![7200.0; n])),
    ]
}

#[test]
fn reads_valid_table() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("sim.parquet");
    write(
        &path,
        plant_schema(),
        plant_columns(vec![1, 1, 2, 12], vec![3.0, 4.0, 5.0, 6.0]),
    );

    let plant = read_parquet(&path).expect("read succeeds");
    assert_eq!(plant.len(), 4);
    assert_eq!(plant.months(), &[1, 1, 2, 12]);
    assert_eq!(plant.flow(), &[3.0, 4.0, 5.0, 6.0]);
    assert_eq!(plant.turbine_flow(), &[5.0; 4]);
    assert_eq!(plant.efficiency(), &[0.9; 4]);
}

#[test]
fn missing_file() {
    let err = read_parquet(Path::new("/nonexistent/sim.parquet")).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}

#[test]
fn not_a_parquet_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("garbage.parquet");
    std::fs::write(&path, b"definitely not parquet").unwrap();
    let err = read_parquet(&path).unwrap_err();
    assert!(matches!(err, IoError::Parquet { .. }));
}

#[test]
fn renamed_column_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("renamed.parquet");

    let mut fields: Vec<Field> = plant_schema()
        .fields()
        .iter()
        .map(|f| (**f).clone())
        .collect();
    fields[2] = Field::new("discharge", DataType::Float64, false);
    write(&path, Schema::new(fields), plant_columns(vec![1], vec![1.0]));

    let err = read_parquet(&path).unwrap_err();
    match err {
        IoError::Validation { count, details } => {
            assert_eq!(count, 1);
            assert!(details.contains("column 2: expected 'flow', got 'discharge'"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn invalid_data_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bad.parquet");
    write(
        &path,
        plant_schema(),
        plant_columns(vec![1, 14], vec![1.0, -1.0]),
    );

    let err = read_parquet(&path).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("2 validation error(s)"));
    assert!(msg.contains("month 14 at row 1"));
    assert!(msg.contains("invalid flow at row 1"));
}

#[test]
fn null_cells_are_rejected_not_zeroed() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nullable.parquet");

    let nullable: Vec<Field> = plant_schema()
        .fields()
        .iter()
        .map(|f| (**f).clone().with_nullable(true))
        .collect();
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from(vec![2019, 2019])),
        Arc::new(UInt8Array::from(vec![1, 1])),
        Arc::new(Float64Array::from(vec![Some(10.0), None])),
        Arc::new(Float64Array::from(vec![Some(5.0), None])),
        Arc::new(Float64Array::from(vec![0.9, 0.9])),
        Arc::new(Float64Array::from(vec![300.0, 300.0])),
        Arc::new(Float64Array::from(vec![Some(2400.0), None])),
    ];
    write(&path, Schema::new(nullable), columns);

    let err = read_parquet(&path).unwrap_err();
    match err {
        IoError::Validation { count, details } => {
            assert_eq!(count, 3);
            assert!(details.contains("null flow at row 1"));
            assert!(details.contains("null turbine_flow at row 1"));
            assert!(details.contains("null energy_kwh at row 1"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn nullable_schema_without_nulls_reads() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nullable_full.parquet");

    let nullable: Vec<Field> = plant_schema()
        .fields()
        .iter()
        .map(|f| (**f).clone().with_nullable(true))
        .collect();
    write(
        &path,
        Schema::new(nullable),
        plant_columns(vec![3, 4], vec![7.0, 8.0]),
    );

    let plant = read_parquet(&path).expect("read succeeds");
    assert_eq!(plant.flow(), &[7.0, 8.0]);
}
