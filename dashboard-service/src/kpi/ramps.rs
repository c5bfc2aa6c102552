use grid_series::{ops::max_ramp, Frame};

use super::{time_label, Panel};
use crate::catalog::RAMP_KPIS;

pub fn build(incident: &Frame) -> Panel {
    if incident.is_empty() {
        return Panel::message("Ramp KPIs unavailable: incident data missing.");
    }

    let items = RAMP_KPIS
        .iter()
        .filter_map(|s| {
            let peak = max_ramp(incident, s.column)?;
            Some(format!("{}: {:.0} MW (on {})", s.label, peak.value, time_label(peak.at)))
        })
        .collect();

    Panel::list_or(
        "Largest ramps (MW per 15 min) in the incident window:".to_string(),
        items,
        "No ramp KPIs could be computed.",
    )
}
