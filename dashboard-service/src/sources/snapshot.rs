use std::path::Path;

use grid_series::{ops::window, Frame, IncidentWindow};

use super::{csv_file, parquet_file, SourceError};
use crate::config::DataConfig;

/// The two read-only tables every view is built from.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Multi-year hourly generation.
    pub hourly: Frame,
    /// 15-minute series clipped to the incident window.
    pub incident: Frame,
}

impl Snapshot {
    /// True when neither table has rows; the dashboard has nothing to show.
    pub fn is_unusable(&self) -> bool {
        self.hourly.is_empty() && self.incident.is_empty()
    }
}

/// Read one table, picking the reader from the file extension.
pub fn load_table(path: &Path) -> Result<Frame, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("parquet") | Some("pq") => parquet_file::read_frame(path),
        Some("csv") => csv_file::read_frame(path),
        _ => Err(SourceError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn load_or_empty(table: &'static str, path: &Path) -> Frame {
    match load_table(path) {
        Ok(frame) => {
            tracing::info!(
                table,
                path = %path.display(),
                rows = frame.len(),
                columns = frame.columns().len(),
                "table loaded"
            );
            frame
        }
        Err(e) => {
            metrics::counter!("dashboard_table_load_failures_total", "table" => table).increment(1);
            tracing::error!(table, path = %path.display(), error = %e, "table unavailable, views will show placeholders");
            Frame::empty()
        }
    }
}

/// Load both tables. Missing or unreadable files yield empty tables.
pub fn load_snapshot(data: &DataConfig, window: &IncidentWindow) -> Snapshot {
    let incident = load_or_empty("incident", &data.incident_path);
    let incident = if incident.is_empty() {
        incident
    } else {
        let clipped = window::clip(&incident, window);
        tracing::info!(
            rows = clipped.len(),
            first = ?clipped.index().wall_clock(0),
            last = ?clipped.len().checked_sub(1).and_then(|p| clipped.index().wall_clock(p)),
            "incident table clipped to analysis window"
        );
        clipped
    };

    let hourly = load_or_empty("hourly", &data.hourly_path);

    Snapshot { hourly, incident }
}
