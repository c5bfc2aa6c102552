use chrono::NaiveDateTime;
use grid_series::{ops::row_asof, Frame};
use plotly::{
    common::{Anchor, DashType, Font},
    layout::{Annotation, Shape, ShapeLine, ShapeType},
};

use crate::{
    catalog::{Series, COVERAGE},
    figure::{date_label, Figure},
};

/// Values above this are called out at the configured peak time.
const PEAK_CALLOUT_PCT: f64 = 150.0;

/// Renewable and non-emitting coverage of demand, with the 100% line.
pub fn build(incident: &Frame, coverage_peak: NaiveDateTime) -> Figure {
    let series: Vec<Series> = COVERAGE
        .iter()
        .copied()
        .filter(|s| incident.has_column(s.column))
        .collect();
    if incident.is_empty() || series.is_empty() {
        return Figure::placeholder("Coverage: data unavailable");
    }

    let x = super::x_labels(incident);
    let mut figure = Figure::new("Renewable and non-emitting coverage of demand");
    for (s, c) in series.iter().filter_map(|s| incident.column(s.column).map(|c| (s, c))) {
        figure.add_trace(super::line(s, x.clone(), c.values().to_vec()));
    }

    let peak = series
        .iter()
        .filter_map(|s| incident.column(s.column).and_then(|c| c.max()))
        .fold(0.0, f64::max);
    let top = if peak > 0.0 { (peak * 1.05).max(120.0) } else { 120.0 };

    let mut annotations = vec![Annotation::new()
        .x(1.0)
        .x_ref("paper")
        .y(100.0)
        .y_ref("y")
        .text("100% coverage")
        .show_arrow(false)
        .x_anchor(Anchor::Right)
        .y_anchor(Anchor::Bottom)];
    annotations.extend(peak_callout(incident, series[0], coverage_peak));

    figure.set_layout(
        super::base_layout(450, 10)
            .x_axis(super::titled_axis("Date and time"))
            .y_axis(
                super::titled_axis("Coverage (%)")
                    .tick_suffix("%")
                    .range(vec![0.0, top]),
            )
            .shapes(vec![Shape::new()
                .shape_type(ShapeType::Line)
                .x_ref("paper")
                .y_ref("y")
                .x0(0.0)
                .x1(1.0)
                .y0(100.0)
                .y1(100.0)
                .line(ShapeLine::new().color("grey").dash(DashType::Dash))])
            .annotations(annotations),
    );
    figure
}

fn peak_callout(incident: &Frame, series: Series, at: NaiveDateTime) -> Option<Annotation> {
    let index = incident.index();
    if !index.spans(index.localize(at)?) {
        return None;
    }
    let row = row_asof(incident, at)?;
    let value = row.get(series.column).filter(|v| *v > PEAK_CALLOUT_PCT)?;
    let floor = (value / 50.0).floor() * 50.0;
    Some(
        Annotation::new()
            .x(date_label(row.at()))
            .x_ref("x")
            .y(value)
            .y_ref("y")
            .text(format!("Coverage peak >{floor:.0}%<br>(low demand)"))
            .show_arrow(true)
            .ax(-40.0)
            .ay(-50.0)
            .font(Font::new().size(10)),
    )
}
