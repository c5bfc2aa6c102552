//! Figure builders. Each takes read-only tables and returns a [`Figure`],
//! falling back to a titled placeholder when the data cannot support it.
//!
//! [`Figure`]: crate::figure::Figure

pub mod coverage;
pub mod demand_exchange_price;
pub mod incident_mix;
pub mod mix_evolution;
pub mod ramps;

use grid_series::Frame;
use plotly::{
    common::{Anchor, Font, Line, Mode, Orientation, Title},
    layout::Axis,
    Layout, Scatter,
};

use crate::{catalog::Series, figure::date_label};

/// Wall-clock x values of every row.
pub(crate) fn x_labels(frame: &Frame) -> Vec<String> {
    frame.index().wall_clocks().map(date_label).collect()
}

/// Line trace of `series`, missing values left as gaps.
pub(crate) fn line(series: &Series, x: Vec<String>, y: Vec<Option<f64>>) -> Box<Scatter<String, Option<f64>>> {
    Scatter::new(x, y)
        .name(series.label)
        .mode(Mode::Lines)
        .line(Line::new().color(series.color))
}

/// Hover-unified layout with a horizontal legend above the plot area.
pub(crate) fn base_layout(height: usize, legend_font: usize) -> Layout {
    Layout::new()
        .height(height)
        .hover_mode(plotly::layout::HoverMode::XUnified)
        .legend(
            plotly::layout::Legend::new()
                .orientation(Orientation::Horizontal)
                .x(0.5)
                .x_anchor(Anchor::Center)
                .y(1.05)
                .y_anchor(Anchor::Bottom)
                .font(Font::new().size(legend_font)),
        )
}

pub(crate) fn titled_axis(title: &str) -> Axis {
    Axis::new().title(Title::from(title))
}

/// The subset of `series` whose columns hold at least one value.
pub(crate) fn with_data(frame: &Frame, series: &[Series]) -> Vec<Series> {
    series.iter().copied().filter(|s| frame.has_data(s.column)).collect()
}
