use crate::domain::Frame;

/// Percent share of one column in a total.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareSeries {
    pub column: String,
    pub percent: Vec<f64>,
}

/// Per-row `100 * value / total`.
///
/// A zero, missing or non-finite total gives a share of 0. A missing value
/// counts as 0.
pub fn share_of_total(values: &[Option<f64>], totals: &[Option<f64>]) -> Vec<f64> {
    values
        .iter()
        .zip(totals)
        .map(|(value, total)| match total {
            Some(t) if t.is_finite() && *t != 0.0 => {
                let v = value.filter(|v| v.is_finite()).unwrap_or(0.0);
                v / t * 100.0
            }
            _ => 0.0,
        })
        .collect()
}

/// Row-wise sum of `columns`. Absent columns and missing values count as 0.
pub fn row_sum(frame: &Frame, columns: &[&str]) -> Vec<Option<f64>> {
    let mut sums = vec![0.0; frame.len()];
    for column in columns.iter().filter_map(|name| frame.column(name)) {
        for (sum, value) in sums.iter_mut().zip(column.values()) {
            if let Some(v) = value.filter(|v| v.is_finite()) {
                *sum += v;
            }
        }
    }
    sums.into_iter().map(Some).collect()
}

/// Shares of each of `columns` in `total_column`, or in their row sum when
/// no total column is given or the frame does not have it.
pub fn mix_shares(frame: &Frame, columns: &[&str], total_column: Option<&str>) -> Vec<ShareSeries> {
    let totals = match total_column.and_then(|name| frame.column(name)) {
        Some(total) => total.values().to_vec(),
        None => row_sum(frame, columns),
    };

    columns
        .iter()
        .map(|&name| {
            let percent = match frame.column(name) {
                Some(column) => share_of_total(column.values(), &totals),
                None => vec![0.0; frame.len()],
            };
            ShareSeries {
                column: name.to_string(),
                percent,
            }
        })
        .collect()
}
