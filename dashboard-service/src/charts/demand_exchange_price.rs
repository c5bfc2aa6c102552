use chrono::NaiveDateTime;
use grid_series::{Column, Frame};
use plotly::{
    common::{Anchor, AxisSide, DashType, Font, Line},
    layout::{Annotation, Axis, Shape, ShapeLine, ShapeType},
};

use crate::{
    catalog::{DEMAND, EXCHANGE_BALANCE, PRICE},
    figure::{date_label, Figure},
};

/// Demand on the left axis; interchange balance and market price share the
/// right axis. A dotted marker flags the demand drop.
pub fn build(incident: &Frame, demand_drop: NaiveDateTime) -> Figure {
    if incident.is_empty() {
        return Figure::placeholder("Demand, interchange and price: data unavailable");
    }
    if ![DEMAND, EXCHANGE_BALANCE, PRICE]
        .iter()
        .any(|s| incident.has_column(s.column))
    {
        return Figure::placeholder("Demand, interchange and price: no matching columns");
    }

    let x = super::x_labels(incident);
    let mut figure = Figure::new("Actual demand, interchange balance and market price");

    if let Some(demand) = incident.column(DEMAND.column) {
        figure.add_trace(super::line(&DEMAND, x.clone(), demand.values().to_vec()));
    }
    if let Some(exchange) = incident.column(EXCHANGE_BALANCE.column) {
        figure.add_trace(
            super::line(&EXCHANGE_BALANCE, x.clone(), exchange.values().to_vec())
                .line(Line::new().color(EXCHANGE_BALANCE.color).dash(DashType::Dash))
                .y_axis("y2"),
        );
    }
    let price = incident.column(PRICE.column).filter(|c| c.has_data());
    if let Some(price) = price {
        figure.add_trace(
            super::line(&PRICE, x.clone(), price.values().to_vec())
                .line(Line::new().color(PRICE.color).dash(DashType::Dot))
                .y_axis("y2"),
        );
    }

    let exchange = incident.column(EXCHANGE_BALANCE.column).filter(|c| c.has_data());
    let marker = date_label(demand_drop);

    figure.set_layout(
        super::base_layout(500, 10)
            .x_axis(super::titled_axis("Date and time"))
            .y_axis(
                super::titled_axis("Actual demand (MW)")
                    .show_grid(false)
                    .color(DEMAND.color),
            )
            .y_axis2(secondary_axis(exchange, price))
            .shapes(vec![Shape::new()
                .shape_type(ShapeType::Line)
                .x_ref("x")
                .y_ref("paper")
                .x0(marker.as_str())
                .x1(marker.as_str())
                .y0(0.0)
                .y1(1.0)
                .line(ShapeLine::new().color("red").dash(DashType::Dot))])
            .annotations(vec![Annotation::new()
                .x(marker.as_str())
                .x_ref("x")
                .y(1.0)
                .y_ref("paper")
                .text("Demand drop")
                .show_arrow(false)
                .x_anchor(Anchor::Right)
                .y_anchor(Anchor::Bottom)
                .font(Font::new().size(10).color("red"))]),
    );
    figure
}

/// Right-hand axis shared by interchange and price, symmetric around zero
/// when interchange is drawn.
fn secondary_axis(exchange: Option<&Column>, price: Option<&Column>) -> Axis {
    let mut titles = Vec::new();
    let mut range: Option<[f64; 2]> = None;

    if let Some(exchange) = exchange {
        titles.push("Interchange (MW)");
        let reach = exchange
            .min()
            .zip(exchange.max())
            .map_or(0.0, |(lo, hi)| lo.abs().max(hi.abs()));
        let bound = if reach > 0.0 { reach * 1.2 } else { 1000.0 };
        range = Some([-bound, bound]);
    }

    if let Some(price) = price {
        titles.push("Price (€/MWh)");
        let low = price.min().unwrap_or(0.0);
        let high = price.max().unwrap_or(100.0);
        let low = if low > 0.0 { low * 0.9 } else { low * 1.1 - 1.0 };
        let high = if high > 0.0 { high * 1.1 } else { high * 0.9 + 1.0 };
        range = Some(match range {
            Some([lo, hi]) => [lo.min(low), hi.max(high)],
            None => [low.min(0.0), high],
        });
    }

    let color = match (exchange.is_some(), price.is_some()) {
        (true, false) => EXCHANGE_BALANCE.color,
        (false, true) => PRICE.color,
        _ => "purple",
    };
    let title = if titles.is_empty() {
        "Secondary axis".to_string()
    } else {
        titles.join(" / ")
    };

    let axis = super::titled_axis(&title)
        .overlaying("y")
        .side(AxisSide::Right)
        .show_grid(true)
        .grid_color("#f0f0f0")
        .color(color);
    match range {
        Some([lo, hi]) => axis.range(vec![lo, hi]),
        None => axis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures::{at, json, quarter_hours};
    use serde_json::Value;

    fn range(axis: &Value) -> (f64, f64) {
        (axis["range"][0].as_f64().unwrap(), axis["range"][1].as_f64().unwrap())
    }

    #[test]
    fn missing_inputs_are_placeholders() {
        assert!(build(&Frame::empty(), at(28, 12, 30)).is_placeholder());
        let frame = quarter_hours(at(28, 12, 0), vec![("Eolica_MW", vec![1.0])]);
        assert!(build(&frame, at(28, 12, 30)).is_placeholder());
    }

    #[test]
    fn secondary_axis_spans_exchange_and_price() {
        let frame = quarter_hours(
            at(28, 12, 0),
            vec![
                ("DemandaReal_MW", vec![25_000.0, 24_000.0, 12_000.0]),
                ("SaldoIntercambios_MW", vec![-2_000.0, 500.0, 1_000.0]),
                ("PrecioMercado_EUR_MWh", vec![10.0, 20.0, 50.0]),
            ],
        );

        let fig = json(&build(&frame, at(28, 12, 30)));
        assert_eq!(fig["data"].as_array().unwrap().len(), 3);
        assert_eq!(fig["data"][1]["yaxis"], "y2");
        assert_eq!(fig["data"][1]["line"]["dash"], "dash");

        let y2 = &fig["layout"]["yaxis2"];
        let (lo, hi) = range(y2);
        assert!((lo + 2_400.0).abs() < 1e-9);
        assert!((hi - 2_400.0).abs() < 1e-9);
        assert_eq!(y2["overlaying"], "y");
        assert_eq!(y2["side"], "right");
        assert_eq!(y2["color"], "purple");
        assert_eq!(y2["title"]["text"], "Interchange (MW) / Price (€/MWh)");

        assert_eq!(fig["layout"]["shapes"][0]["x0"], "2025-04-28 12:30:00");
        assert_eq!(fig["layout"]["annotations"][0]["text"], "Demand drop");
    }

    #[test]
    fn price_only_range_starts_at_zero() {
        let frame = quarter_hours(
            at(28, 12, 0),
            vec![
                ("DemandaReal_MW", vec![25_000.0, 24_000.0]),
                ("PrecioMercado_EUR_MWh", vec![10.0, 20.0]),
            ],
        );

        let fig = json(&build(&frame, at(28, 12, 30)));
        let (lo, hi) = range(&fig["layout"]["yaxis2"]);
        assert_eq!(lo, 0.0);
        assert!((hi - 22.0).abs() < 1e-9);
        assert_eq!(fig["layout"]["yaxis2"]["color"], "forestgreen");
    }

    #[test]
    fn flat_exchange_uses_default_range() {
        let frame = quarter_hours(
            at(28, 12, 0),
            vec![("SaldoIntercambios_MW", vec![0.0, 0.0])],
        );

        let fig = json(&build(&frame, at(28, 12, 30)));
        assert_eq!(range(&fig["layout"]["yaxis2"]), (-1000.0, 1000.0));
        assert_eq!(fig["layout"]["yaxis2"]["color"], "dodgerblue");
    }
}
