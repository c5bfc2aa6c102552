use std::path::PathBuf;

use grid_series::FrameError;

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("unsupported table format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("no timestamp index column found")]
    MissingIndex,
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
    #[error("unknown timezone '{0}'")]
    UnknownZone(String),
    #[error(transparent)]
    Frame(#[from] FrameError),
}
