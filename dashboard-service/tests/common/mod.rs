#![allow(dead_code)]

use std::{collections::HashMap, fs, fs::File, path::Path, sync::Arc};

use arrow::{
    array::{ArrayRef, Float64Array, TimestampNanosecondArray},
    datatypes::{DataType, Field, Schema, TimeUnit},
    record_batch::RecordBatch,
};
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;

pub const MADRID: &str = "Europe/Madrid";

/// Local quarter-hour of the demand drop in [`write_incident_parquet`].
pub const DROP_STEP: usize = 50;

/// One day of 15-minute readings for 2025-04-28 (Madrid), written the way
/// pandas does: a tz-aware timestamp index named in the schema metadata.
///
/// Demand falls from 25 000 MW to 12 000 MW at 12:30 local.
pub fn write_incident_parquet(path: &Path) {
    let start = NaiveDate::from_ymd_opt(2025, 4, 27)
        .and_then(|d| d.and_hms_opt(22, 0, 0))
        .and_then(|t| t.and_utc().timestamp_nanos_opt())
        .unwrap();
    let step = 15 * 60 * 1_000_000_000_i64;
    let n = 96;

    let stamps: Vec<i64> = (0..n as i64).map(|i| start + i * step).collect();
    let demand: Vec<f64> = (0..n).map(|i| if i < DROP_STEP { 25_000.0 } else { 12_000.0 }).collect();
    let wind: Vec<Option<f64>> = (0..n).map(|i| (i != 3).then_some(6_000.0 + i as f64)).collect();
    let solar: Vec<f64> = (0..n).map(|i| if (28..76).contains(&i) { 9_000.0 } else { 0.0 }).collect();
    let exchange: Vec<f64> = vec![-2_500.0; n];
    let price: Vec<f64> = vec![15.5; n];
    let renewable: Vec<f64> = (0..n).map(|i| if i == 40 { 165.0 } else { 80.0 }).collect();

    let tz: Option<Arc<str>> = Some(MADRID.into());
    let schema = Schema::new(vec![
        Field::new("datetime", DataType::Timestamp(TimeUnit::Nanosecond, tz), false),
        Field::new("DemandaReal_MW", DataType::Float64, true),
        Field::new("Eolica_MW", DataType::Float64, true),
        Field::new("SolarFotovoltaica_MW", DataType::Float64, true),
        Field::new("SaldoIntercambios_MW", DataType::Float64, true),
        Field::new("PrecioMercado_EUR_MWh", DataType::Float64, true),
        Field::new("CoberturaRenovable_pct", DataType::Float64, true),
    ])
    .with_metadata(HashMap::from([(
        "pandas".to_string(),
        r#"{"index_columns": ["datetime"], "columns": []}"#.to_string(),
    )]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(TimestampNanosecondArray::from(stamps).with_timezone(MADRID)),
        Arc::new(Float64Array::from(demand)),
        Arc::new(Float64Array::from(wind)),
        Arc::new(Float64Array::from(solar)),
        Arc::new(Float64Array::from(exchange)),
        Arc::new(Float64Array::from(price)),
        Arc::new(Float64Array::from(renewable)),
    ];
    let batch = RecordBatch::try_new(Arc::new(schema), columns).unwrap();

    let mut writer = ArrowWriter::try_new(File::create(path).unwrap(), batch.schema(), None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

/// Two June readings a year apart, as a naive-indexed CSV.
pub fn write_hourly_csv(path: &Path) {
    fs::write(
        path,
        "datetime,Eolica_MW,Nuclear_MW\n\
         2023-06-01 00:00:00,1000,7000\n\
         2024-06-01 00:00:00,1500,7000\n",
    )
    .unwrap();
}
