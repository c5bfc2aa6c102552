use grid_series::{ops::mix_shares, Frame};
use plotly::Layout;

use crate::{
    catalog::{self, Series, INCIDENT_MIX, TOTAL_GENERATION},
    figure::Figure,
};

fn layout(y_title: &str, ticksuffix: Option<&str>) -> Layout {
    let y_axis = super::titled_axis(y_title);
    let y_axis = match ticksuffix {
        Some(suffix) => y_axis.tick_suffix(suffix),
        None => y_axis,
    };
    super::base_layout(500, 10)
        .x_axis(super::titled_axis("Date and time"))
        .y_axis(y_axis)
}

/// Technologies with at least one reading, in catalogue order.
fn technologies(incident: &Frame) -> Result<Vec<Series>, Figure> {
    if incident.is_empty() {
        return Err(Figure::placeholder("Incident mix: data unavailable"));
    }
    let techs = super::with_data(incident, &INCIDENT_MIX);
    if techs.is_empty() {
        return Err(Figure::placeholder("Incident mix: no generation columns"));
    }
    Ok(techs)
}

/// Stacked generation in MW per technology across the incident window.
/// Missing readings stack as 0.
pub fn build(incident: &Frame) -> Figure {
    let techs = match technologies(incident) {
        Ok(techs) => techs,
        Err(placeholder) => return placeholder,
    };
    let x = super::x_labels(incident);

    let mut figure = Figure::new("Generation mix during the incident (MW)");
    for (s, c) in techs.iter().filter_map(|s| incident.column(s.column).map(|c| (s, c))) {
        let filled = c.filled().into_iter().map(Some).collect();
        figure.add_trace(super::line(s, x.clone(), filled).stack_group("one"));
    }
    figure.set_layout(layout("Generation (MW)", None));
    figure
}

/// Same technologies as [`build`], each as a percentage of total generation.
///
/// The total is `TotalGeneracion_MW` when the table has it, otherwise the
/// row sum of the plotted technologies.
pub fn build_share(incident: &Frame) -> Figure {
    let techs = match technologies(incident) {
        Ok(techs) => techs,
        Err(placeholder) => return placeholder,
    };
    let x = super::x_labels(incident);
    let names = catalog::columns(&techs);
    let total = incident.has_column(TOTAL_GENERATION).then_some(TOTAL_GENERATION);

    let mut figure = Figure::new("Generation mix during the incident (% of total)");
    for (s, share) in techs.iter().zip(mix_shares(incident, &names, total)) {
        let percent = share.percent.into_iter().map(Some).collect();
        figure.add_trace(super::line(s, x.clone(), percent).stack_group("one"));
    }
    figure.set_layout(layout("Share of generation", Some("%")));
    figure
}
