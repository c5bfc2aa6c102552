use chrono::NaiveDateTime;

use crate::domain::Frame;

/// Largest absolute step of a series and when it happened (wall clock).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampPeak {
    pub at: NaiveDateTime,
    pub value: f64,
}

/// First difference: `out[i] = values[i] - values[i - 1]`, `out[0] = None`.
pub fn ramp(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }
    out.push(None);
    out.extend(values.windows(2).map(|w| match (w[0], w[1]) {
        (Some(prev), Some(cur)) => Some(cur - prev),
        _ => None,
    }));
    out
}

/// Position of the largest absolute value, skipping missing and NaN entries.
/// Ties resolve to the earliest position.
pub fn argmax_abs(values: &[Option<f64>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.iter().enumerate() {
        let Some(v) = v.filter(|v| !v.is_nan()) else {
            continue;
        };
        match best {
            Some((_, b)) if v.abs() <= b => {}
            _ => best = Some((i, v.abs())),
        }
    }
    best.map(|(i, _)| i)
}

/// Largest ramp of `column` within the frame.
pub fn max_ramp(frame: &Frame, column: &str) -> Option<RampPeak> {
    let steps = ramp(frame.column(column)?.values());
    let position = argmax_abs(&steps)?;
    Some(RampPeak {
        at: frame.index().wall_clock(position)?,
        value: steps[position]?,
    })
}
