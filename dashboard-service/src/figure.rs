//! Plotly figures served to the page.
//!
//! Builders assemble a [`plotly::Plot`] and wrap it in a [`Figure`]; the page
//! hands [`Figure::to_json`] to `Plotly.newPlot` unchanged.

use chrono::{NaiveDate, NaiveDateTime};
use plotly::{common::Title, Layout, Plot, Trace};

/// Plotly date string for a wall-clock stamp.
pub fn date_label(stamp: NaiveDateTime) -> String {
    stamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn day_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A titled plot. A figure without traces is a placeholder.
pub struct Figure {
    title: String,
    plot: Plot,
    traces: usize,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let mut plot = Plot::new();
        plot.set_layout(Layout::new().title(Title::from(title.as_str())));
        Self {
            title,
            plot,
            traces: 0,
        }
    }

    /// Empty figure carrying only its title.
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self::new(title)
    }

    pub fn add_trace(&mut self, trace: Box<dyn Trace>) {
        self.plot.add_trace(trace);
        self.traces += 1;
    }

    /// Replace the layout, keeping the figure title.
    pub fn set_layout(&mut self, layout: Layout) {
        self.plot.set_layout(layout.title(Title::from(self.title.as_str())));
    }

    pub fn is_placeholder(&self) -> bool {
        self.traces == 0
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn trace_count(&self) -> usize {
        self.traces
    }

    /// `{"data": [...], "layout": {...}, "config": {...}}` as Plotly.js expects.
    pub fn to_json(&self) -> String {
        self.plot.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotly::{common::Mode, Scatter};
    use serde_json::{json, Value};

    fn value(figure: &Figure) -> Value {
        serde_json::from_str(&figure.to_json()).unwrap()
    }

    #[test]
    fn placeholder_has_title_and_no_traces() {
        let fig = Figure::placeholder("Ramps: data unavailable");
        assert!(fig.is_placeholder());

        let v = value(&fig);
        assert_eq!(v["data"], json!([]));
        assert_eq!(v["layout"]["title"]["text"], "Ramps: data unavailable");
    }

    #[test]
    fn layout_keeps_the_figure_title() {
        let mut fig = Figure::new("Coverage");
        fig.add_trace(
            Scatter::new(vec!["2025-04-28 00:00:00".to_string()], vec![None::<f64>])
                .name("Wind")
                .mode(Mode::Lines)
                .stack_group("one"),
        );
        fig.set_layout(Layout::new().height(450));

        assert!(!fig.is_placeholder());
        assert_eq!(fig.trace_count(), 1);
        let v = value(&fig);
        assert_eq!(v["layout"]["title"]["text"], "Coverage");
        assert_eq!(v["layout"]["height"], 450);
        assert_eq!(v["data"][0]["y"], json!([null]));
        assert_eq!(v["data"][0]["stackgroup"], "one");
        assert_eq!(v["data"][0]["type"], "scatter");
    }
}
