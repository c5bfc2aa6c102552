use std::path::Path;

use grid_series::{Column, Frame};

use super::{stamps::parse_stamps, SourceError};

/// Read a table exported with `DataFrame.to_csv`.
///
/// The first column is the timestamp index; every other column is read as
/// numbers, with empty, `NaN` and unparseable cells as missing.
pub fn read_frame(path: &Path) -> Result<Frame, SourceError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();
    let names: Vec<String> = headers.iter().skip(1).map(|h| h.trim().to_string()).collect();

    let mut raw_stamps: Vec<String> = Vec::new();
    let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); names.len()];

    for result in rdr.records() {
        let record = result?;
        raw_stamps.push(record.get(0).unwrap_or_default().to_string());
        for (i, out) in values.iter_mut().enumerate() {
            out.push(parse_optional_f64(record.get(i + 1).unwrap_or_default()));
        }
    }

    let (stamps, zone) = parse_stamps(raw_stamps.iter().map(String::as_str))?;
    let columns = names
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

fn parse_optional_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
