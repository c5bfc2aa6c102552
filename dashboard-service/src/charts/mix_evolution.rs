use grid_series::{
    ops::{monthly_mean, row_sum, share_of_total},
    Column, Frame,
};

use crate::{
    catalog::{self, EVOLUTION_MIX, HOURLY_TOTALS},
    figure::{day_label, Figure},
};

/// Months averaging less total generation than this are dropped as incomplete.
const MIN_MONTHLY_TOTAL_MW: f64 = 1000.0;

const TOTAL: &str = "__total__";

/// Monthly percentage mix of the hourly table, stacked to 100%.
pub fn build(hourly: &Frame) -> Figure {
    if hourly.is_empty() {
        return Figure::placeholder("Mix evolution: hourly data unavailable");
    }

    let techs = super::with_data(hourly, &EVOLUTION_MIX);
    if techs.is_empty() {
        return Figure::placeholder("Mix evolution: no generation columns in the hourly table");
    }
    let names = catalog::columns(&techs);

    let totals = match HOURLY_TOTALS.iter().find_map(|name| hourly.column(name)) {
        Some(total) => total.values().to_vec(),
        None => row_sum(hourly, &names),
    };

    let mut columns: Vec<Column> = techs
        .iter()
        .filter_map(|s| hourly.column(s.column))
        .map(|c| Column::new(c.name(), c.filled().into_iter().map(Some).collect()))
        .collect();
    columns.push(Column::new(TOTAL, totals.clone()));

    let working = match Frame::new(hourly.index().clone(), columns) {
        Ok(frame) => frame.filter_rows(|p| totals[p].is_some_and(|t| t > 0.0)),
        Err(e) => {
            tracing::warn!(error = %e, "could not assemble monthly mix inputs");
            return Figure::placeholder("Mix evolution: inconsistent hourly table");
        }
    };
    if working.is_empty() {
        return Figure::placeholder("Mix evolution: no hours with positive generation");
    }

    let mut all = names.clone();
    all.push(TOTAL);
    let mut monthly = monthly_mean(&working, &all);
    let keep: Vec<bool> = monthly
        .column(TOTAL)
        .map(|c| c.values().iter().map(|t| t.is_some_and(|t| t > MIN_MONTHLY_TOTAL_MW)).collect())
        .unwrap_or_default();
    monthly.retain(|p| keep.get(p).copied().unwrap_or(false));
    if monthly.is_empty() {
        return Figure::placeholder("Mix evolution: no complete months");
    }

    let x: Vec<String> = monthly.labels.iter().copied().map(day_label).collect();
    let month_totals = monthly.column(TOTAL).map(|c| c.values().to_vec()).unwrap_or_default();

    let mut figure = Figure::new("Monthly generation mix (% of total)");
    for (s, c) in techs.iter().filter_map(|s| monthly.column(s.column).map(|c| (s, c))) {
        let percent = share_of_total(c.values(), &month_totals);
        let percent = percent.into_iter().map(Some).collect();
        figure.add_trace(super::line(s, x.clone(), percent).stack_group("one"));
    }
    figure.set_layout(
        super::base_layout(500, 9)
            .x_axis(super::titled_axis("Month"))
            .y_axis(super::titled_axis("Share of generation").tick_suffix("%")),
    );
    figure
}
