use std::{fs::File, path::Path};

use arrow::{
    array::{Array, ArrayRef, Float64Array, StringArray, TimestampNanosecondArray},
    compute::cast,
    datatypes::{DataType, Schema, TimeUnit},
};
use chrono::{DateTime, NaiveDateTime};
use grid_series::{Column, Frame, IndexZone};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::{stamps::parse_stamps, SourceError};

/// Column pandas uses for an unnamed index.
const PANDAS_DEFAULT_INDEX: &str = "__index_level_0__";

/// Subset of the `pandas` schema metadata written by `DataFrame.to_parquet`.
#[derive(Deserialize)]
struct PandasMetadata {
    #[serde(default)]
    index_columns: Vec<serde_json::Value>,
}

/// Read a timestamp-indexed table written by pandas (or any writer that
/// stores the index as a timestamp column).
///
/// Numeric columns become `f64` with NaN read as missing; other columns are
/// skipped.
pub fn read_frame(path: &Path) -> Result<Frame, SourceError> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();

    let index_name = index_column(&schema).ok_or(SourceError::MissingIndex)?;
    let value_names: Vec<String> = schema
        .fields()
        .iter()
        .filter(|f| *f.name() != index_name && f.data_type().is_numeric())
        .map(|f| f.name().clone())
        .collect();

    let reader = builder.with_batch_size(65536).build()?;

    let mut stamps: Vec<NaiveDateTime> = Vec::new();
    let mut zone = IndexZone::Naive;
    let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); value_names.len()];

    for batch_result in reader {
        let batch = batch_result?;

        let index = batch
            .column_by_name(&index_name)
            .ok_or(SourceError::MissingIndex)?;
        let (batch_stamps, batch_zone) = index_stamps(index)?;
        stamps.extend(batch_stamps);
        zone = batch_zone;

        for (name, out) in value_names.iter().zip(values.iter_mut()) {
            let Some(column) = batch.column_by_name(name) else {
                out.extend(std::iter::repeat(None).take(batch.num_rows()));
                continue;
            };
            let column = cast(column, &DataType::Float64)?;
            let floats = column
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| arrow::error::ArrowError::CastError(format!("column '{name}' is not numeric")))?;
            out.extend(floats.iter().map(|v| v.filter(|v| v.is_finite())));
        }
    }

    let columns = value_names
        .into_iter()
        .zip(values)
        .map(|(name, v)| Column::new(name, v))
        .collect();

    let (frame, dropped) = Frame::from_unsorted(stamps, zone, columns)?;
    if dropped > 0 {
        tracing::warn!(path = %path.display(), dropped, "dropped rows with repeated timestamps");
    }
    Ok(frame)
}

/// Name of the index column: pandas metadata first, then the first timestamp
/// column, then pandas' default index name.
fn index_column(schema: &Schema) -> Option<String> {
    let from_pandas = schema
        .metadata()
        .get("pandas")
        .and_then(|raw| serde_json::from_str::<PandasMetadata>(raw).ok())
        .and_then(|meta| {
            meta.index_columns.into_iter().find_map(|entry| match entry {
                serde_json::Value::String(name) if schema.field_with_name(&name).is_ok() => Some(name),
                _ => None,
            })
        });

    from_pandas
        .or_else(|| {
            schema
                .fields()
                .iter()
                .find(|f| matches!(f.data_type(), DataType::Timestamp(_, _)))
                .map(|f| f.name().clone())
        })
        .or_else(|| {
            schema
                .field_with_name(PANDAS_DEFAULT_INDEX)
                .ok()
                .map(|f| f.name().clone())
        })
}

fn index_stamps(array: &ArrayRef) -> Result<(Vec<NaiveDateTime>, IndexZone), SourceError> {
    match array.data_type() {
        DataType::Timestamp(_, tz) => {
            let zone = match tz {
                None => IndexZone::Naive,
                Some(name) => IndexZone::parse(name).ok_or_else(|| SourceError::UnknownZone(name.to_string()))?,
            };
            let nanos = cast(array, &DataType::Timestamp(TimeUnit::Nanosecond, tz.clone()))?;
            Ok((nanos_to_stamps(&nanos)?, zone))
        }
        DataType::Date32 | DataType::Date64 => {
            let nanos = cast(array, &DataType::Timestamp(TimeUnit::Nanosecond, None))?;
            Ok((nanos_to_stamps(&nanos)?, IndexZone::Naive))
        }
        DataType::Utf8 | DataType::LargeUtf8 => {
            let text = cast(array, &DataType::Utf8)?;
            let text = text
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or(SourceError::MissingIndex)?;
            let raw = text
                .iter()
                .map(|v| v.ok_or_else(|| SourceError::InvalidTimestamp("null".to_string())))
                .collect::<Result<Vec<&str>, _>>()?;
            parse_stamps(raw)
        }
        _ => Err(SourceError::MissingIndex),
    }
}

fn nanos_to_stamps(array: &ArrayRef) -> Result<Vec<NaiveDateTime>, SourceError> {
    let nanos = array
        .as_any()
        .downcast_ref::<TimestampNanosecondArray>()
        .ok_or(SourceError::MissingIndex)?;
    nanos
        .iter()
        .map(|v| {
            v.map(|n| DateTime::from_timestamp_nanos(n).naive_utc())
                .ok_or_else(|| SourceError::InvalidTimestamp("null".to_string()))
        })
        .collect()
}
