use std::ops::Range;

use chrono::NaiveDateTime;

use super::{FrameError, IndexZone, TimeIndex};

/// A named value series aligned with a [`TimeIndex`]. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Build from dense values, reading non-finite entries as missing.
    pub fn from_dense(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(
            name,
            values
                .into_iter()
                .map(|v| v.is_finite().then_some(v))
                .collect(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether at least one value is present.
    pub fn has_data(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }

    /// Values with missing entries replaced by zero.
    pub fn filled(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.unwrap_or(0.0)).collect()
    }

    pub fn min(&self) -> Option<f64> {
        self.present().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.present().reduce(f64::max)
    }

    fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flatten().copied().filter(|v| v.is_finite())
    }

    fn select(&self, positions: &[usize]) -> Self {
        Self {
            name: self.name.clone(),
            values: positions.iter().map(|&p| self.values[p]).collect(),
        }
    }
}

/// Timestamp-indexed table of `f64` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    index: TimeIndex,
    columns: Vec<Column>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::empty()
    }
}

impl Frame {
    /// Sentinel table used when a source is unavailable.
    pub fn empty() -> Self {
        Self {
            index: TimeIndex::empty(IndexZone::Naive),
            columns: Vec::new(),
        }
    }

    pub fn new(index: TimeIndex, columns: Vec<Column>) -> Result<Self, FrameError> {
        check_columns(index.len(), &columns)?;
        Ok(Self { index, columns })
    }

    /// Build a frame from rows in arbitrary order.
    ///
    /// Rows are sorted by stamp; for repeated stamps the first row wins.
    /// Returns the frame and the number of dropped duplicate rows.
    pub fn from_unsorted(
        stamps: Vec<NaiveDateTime>,
        zone: IndexZone,
        columns: Vec<Column>,
    ) -> Result<(Self, usize), FrameError> {
        check_columns(stamps.len(), &columns)?;

        let mut order: Vec<usize> = (0..stamps.len()).collect();
        order.sort_by_key(|&p| stamps[p]);
        order.dedup_by_key(|p| stamps[*p]);
        let dropped = stamps.len() - order.len();

        let index = TimeIndex::new(order.iter().map(|&p| stamps[p]).collect(), zone)?;
        let columns = columns.iter().map(|c| c.select(&order)).collect();
        Ok((Self { index, columns }, dropped))
    }

    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    pub fn zone(&self) -> IndexZone {
        self.index.zone()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Whether `name` exists and holds at least one value.
    pub fn has_data(&self, name: &str) -> bool {
        self.column(name).is_some_and(Column::has_data)
    }

    pub fn value(&self, name: &str, position: usize) -> Option<f64> {
        self.column(name)
            .and_then(|c| c.values.get(position).copied().flatten())
    }

    pub fn take_rows(&self, rows: Range<usize>) -> Self {
        let positions: Vec<usize> = rows.filter(|&p| p < self.len()).collect();
        self.select(&positions)
    }

    pub fn filter_rows(&self, mut keep: impl FnMut(usize) -> bool) -> Self {
        let positions: Vec<usize> = (0..self.len()).filter(|&p| keep(p)).collect();
        self.select(&positions)
    }

    fn select(&self, positions: &[usize]) -> Self {
        Self {
            index: self.index.select(positions),
            columns: self.columns.iter().map(|c| c.select(positions)).collect(),
        }
    }
}

fn check_columns(expected: usize, columns: &[Column]) -> Result<(), FrameError> {
    for (i, column) in columns.iter().enumerate() {
        if column.len() != expected {
            return Err(FrameError::LengthMismatch {
                column: column.name.clone(),
                expected,
                found: column.len(),
            });
        }
        if columns[..i].iter().any(|c| c.name == column.name) {
            return Err(FrameError::DuplicateColumn(column.name.clone()));
        }
    }
    Ok(())
}
