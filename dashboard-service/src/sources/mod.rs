pub mod csv_file;
pub mod error;
pub mod parquet_file;
pub mod snapshot;
pub mod stamps;

pub use error::SourceError;
pub use snapshot::{load_snapshot, load_table, Snapshot};
