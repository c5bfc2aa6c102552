use chrono::NaiveDateTime;
use grid_series::{ops::row_asof, Frame};

use super::{time_label, Panel};
use crate::catalog::{NON_EMITTING_COVERAGE, RENEWABLE_COVERAGE};

/// Coverage ratios at the pre-event reference time (or the latest reading
/// before it).
pub fn build(incident: &Frame, pre_event: NaiveDateTime) -> Panel {
    if incident.is_empty() {
        return Panel::message("Coverage KPIs unavailable: incident data missing.");
    }

    let Some(row) = row_asof(incident, pre_event) else {
        return Panel::List {
            heading: heading(pre_event),
            items: vec!["Data unavailable for the requested time.".to_string()],
        };
    };

    let items = [(RENEWABLE_COVERAGE, "Renewable coverage"), (NON_EMITTING_COVERAGE, "Non-emitting coverage")]
        .into_iter()
        .filter_map(|(series, label)| row.get(series.column).map(|v| format!("{label}: {v:.1}%")))
        .collect();

    Panel::list_or(heading(row.at()), items, "Pre-event coverage data unavailable.")
}

fn heading(at: NaiveDateTime) -> String {
    format!("Coverage at {} (before the event):", time_label(at))
}
