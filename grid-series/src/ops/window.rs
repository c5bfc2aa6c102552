use chrono::{NaiveDateTime, TimeDelta};

use crate::domain::{Frame, IncidentWindow, IndexZone};

const GAP_STEP_MINUTES: i64 = 15;
const MAX_GAP_STEPS: i64 = 16;

/// Keep the rows of `frame` that fall inside `window`.
///
/// The wall-clock bounds are reconciled with the frame's zone first. A bound
/// that falls into a DST gap moves to the nearest instant inside the window.
pub fn clip(frame: &Frame, window: &IncidentWindow) -> Frame {
    let zone = frame.zone();
    let bounds = localize_toward(zone, window.start, GAP_STEP_MINUTES)
        .zip(localize_toward(zone, window.end, -GAP_STEP_MINUTES));

    match bounds {
        Some((start, end)) => frame.take_rows(frame.index().range(start, end)),
        None => frame.take_rows(0..0),
    }
}

fn localize_toward(zone: IndexZone, wall: NaiveDateTime, step_minutes: i64) -> Option<NaiveDateTime> {
    (0..=MAX_GAP_STEPS)
        .map(|k| wall + TimeDelta::minutes(k * step_minutes))
        .find_map(|w| zone.localize(w))
}
