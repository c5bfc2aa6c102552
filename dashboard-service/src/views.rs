use crate::{
    charts,
    config::Timeline,
    figure::Figure,
    kpi::{self, Panel},
    sources::Snapshot,
};

pub const FIGURE_IDS: [&str; 6] = [
    "mix-evolution",
    "incident-mix",
    "incident-mix-share",
    "demand-exchange-price",
    "ramps",
    "coverage",
];

pub const PANEL_IDS: [&str; 4] = ["mix-evolution", "incident-start", "ramps", "coverage"];

/// Loaded tables plus the incident timeline; maps view ids to builders.
///
/// Views are rebuilt on every request from the same immutable snapshot.
#[derive(Debug, Clone)]
pub struct Dashboard {
    snapshot: Snapshot,
    timeline: Timeline,
}

impl Dashboard {
    pub fn new(snapshot: Snapshot, timeline: Timeline) -> Self {
        Self { snapshot, timeline }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Build the figure registered under `id`, or `None` for unknown ids.
    pub fn figure(&self, id: &str) -> Option<Figure> {
        let id = FIGURE_IDS.into_iter().find(|known| *known == id)?;
        let Snapshot { hourly, incident } = &self.snapshot;

        let figure = match id {
            "mix-evolution" => charts::mix_evolution::build(hourly),
            "incident-mix" => charts::incident_mix::build(incident),
            "incident-mix-share" => charts::incident_mix::build_share(incident),
            "demand-exchange-price" => {
                charts::demand_exchange_price::build(incident, self.timeline.demand_drop)
            }
            "ramps" => charts::ramps::build(incident),
            "coverage" => charts::coverage::build(incident, self.timeline.coverage_peak),
            _ => return None,
        };

        metrics::counter!("dashboard_figure_renders_total", "view" => id).increment(1);
        if figure.is_placeholder() {
            metrics::counter!("dashboard_placeholder_renders_total", "view" => id).increment(1);
            tracing::debug!(view = id, title = figure.title(), "rendered placeholder");
        }
        Some(figure)
    }

    /// Build the KPI panel registered under `id`, or `None` for unknown ids.
    pub fn panel(&self, id: &str) -> Option<Panel> {
        let id = PANEL_IDS.into_iter().find(|known| *known == id)?;
        let Snapshot { hourly, incident } = &self.snapshot;

        let panel = match id {
            "mix-evolution" => kpi::evolution::build(hourly),
            "incident-start" => kpi::incident_start::build(incident, self.timeline.pre_event),
            "ramps" => kpi::ramps::build(incident),
            "coverage" => kpi::coverage::build(incident, self.timeline.pre_event),
            _ => return None,
        };

        metrics::counter!("dashboard_panel_renders_total", "view" => id).increment(1);
        Some(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IncidentConfig;

    fn empty_dashboard() -> Dashboard {
        Dashboard::new(Snapshot::default(), IncidentConfig::default().timeline().unwrap())
    }

    #[test]
    fn every_registered_id_builds() {
        let dashboard = empty_dashboard();
        for id in FIGURE_IDS {
            assert!(dashboard.figure(id).unwrap().is_placeholder(), "{id}");
        }
        for id in PANEL_IDS {
            assert!(dashboard.panel(id).unwrap().is_message(), "{id}");
        }
    }

    #[test]
    fn unknown_ids_are_none() {
        let dashboard = empty_dashboard();
        assert!(dashboard.figure("sankey").is_none());
        assert!(dashboard.panel("incident-mix").is_none());
    }
}
