use chrono::NaiveDateTime;

use crate::domain::Frame;

/// A row resolved by a point-in-time lookup.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    frame: &'a Frame,
    position: usize,
    exact: bool,
}

impl<'a> Row<'a> {
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the row sits exactly on the requested time.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Wall-clock time of the row.
    pub fn at(&self) -> NaiveDateTime {
        let index = self.frame.index();
        index.zone().wall_clock(index.stamps()[self.position])
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.frame.value(column, self.position).filter(|v| v.is_finite())
    }
}

/// Row at `wall`, or else the most recent row before it.
///
/// `wall` is a naive wall-clock time and is localized to the frame's zone.
/// Returns `None` when the frame is empty, the target precedes the first row,
/// or the target does not exist in the zone.
pub fn row_asof(frame: &Frame, wall: NaiveDateTime) -> Option<Row<'_>> {
    let index = frame.index();
    let target = index.localize(wall)?;
    let position = index.asof(target)?;
    Some(Row {
        frame,
        position,
        exact: index.stamps()[position] == target,
    })
}
