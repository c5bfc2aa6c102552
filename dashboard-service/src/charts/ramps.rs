use grid_series::{
    ops::{argmax_abs, ramp},
    Frame,
};
use plotly::{
    common::{Anchor, Font},
    layout::Annotation,
};

use crate::{
    catalog::{Series, RAMP_PLOTS},
    figure::Figure,
};

/// Subplot rows, top to bottom: y-axis reference and vertical domain. All
/// rows share the single x axis drawn under the bottom row.
struct Row {
    yref: &'static str,
    domain: [f64; 2],
}

const ROWS: [Row; 3] = [
    Row { yref: "y", domain: [0.72, 1.0] },
    Row { yref: "y2", domain: [0.36, 0.64] },
    Row { yref: "y3", domain: [0.0, 0.28] },
];

/// One row per ramp series, sharing the time axis, with the largest step
/// of each row marked.
pub fn build(incident: &Frame) -> Figure {
    if incident.is_empty() {
        return Figure::placeholder("Ramps: data unavailable");
    }
    if !RAMP_PLOTS.iter().any(|s| incident.has_column(s.column)) {
        return Figure::placeholder("Ramps: no demand, wind or solar columns");
    }

    let x = super::x_labels(incident);
    let mut figure = Figure::new("Ramps (MW per 15 min)");
    let mut annotations = Vec::new();

    for (row, series) in ROWS.iter().zip(RAMP_PLOTS) {
        annotations.push(
            Annotation::new()
                .x(0.5)
                .x_ref("paper")
                .y(row.domain[1])
                .y_ref("paper")
                .text(subplot_title(&series))
                .show_arrow(false)
                .x_anchor(Anchor::Center)
                .y_anchor(Anchor::Bottom)
                .font(Font::new().size(12)),
        );

        let Some(column) = incident.column(series.column) else {
            continue;
        };
        let steps = ramp(column.values());
        if let Some((peak, value)) = argmax_abs(&steps).and_then(|p| steps[p].map(|v| (p, v))) {
            annotations.push(
                Annotation::new()
                    .x(x[peak].as_str())
                    .x_ref("x")
                    .y(value)
                    .y_ref(row.yref)
                    .text(format!("Max: {value:.0}"))
                    .show_arrow(true)
                    .ax(20.0)
                    .ay(if value > 0.0 { -20.0 } else { 20.0 })
                    .font(Font::new().size(9)),
            );
        }
        figure.add_trace(
            super::line(&series, x.clone(), steps)
                .name(subplot_title(&series))
                .y_axis(row.yref),
        );
    }

    let axis = |row: &Row| {
        super::titled_axis("MW/15min")
            .domain(row.domain.as_slice())
            .anchor("x")
    };
    figure.set_layout(
        super::base_layout(600, 10)
            .show_legend(false)
            .x_axis(super::titled_axis("Date and time").anchor("y3"))
            .y_axis(axis(&ROWS[0]))
            .y_axis2(axis(&ROWS[1]))
            .y_axis3(axis(&ROWS[2]))
            .annotations(annotations),
    );
    figure
}

fn subplot_title(series: &Series) -> String {
    format!("{} ramp", series.label)
}
