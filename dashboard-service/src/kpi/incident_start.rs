use chrono::NaiveDateTime;
use grid_series::{ops::row_asof, Frame};

use super::{time_label, Panel};
use crate::catalog::{DEMAND, EXCHANGE_BALANCE, PRICE, TOTAL_GENERATION};

/// System conditions at the pre-event reference time.
///
/// Uses the reading at that time, or the latest one before it.
pub fn build(incident: &Frame, pre_event: NaiveDateTime) -> Panel {
    if incident.is_empty() {
        return Panel::message("Incident KPIs unavailable: incident data missing.");
    }

    let Some(row) = row_asof(incident, pre_event) else {
        return Panel::List {
            heading: heading(pre_event),
            items: vec!["Data unavailable for the requested time.".to_string()],
        };
    };

    let mut items = Vec::new();
    if let Some(demand) = row.get(DEMAND.column) {
        items.push(format!("Demand: {demand:.0} MW"));
    }
    if let Some(balance) = row.get(EXCHANGE_BALANCE.column) {
        let direction = if balance > 0.0 {
            "Import"
        } else if balance < 0.0 {
            "Export"
        } else {
            "Zero"
        };
        items.push(format!("Interchange balance: {:.0} MW ({direction})", balance.abs()));
    }
    if incident.has_column(TOTAL_GENERATION) {
        if let Some(total) = row.get(TOTAL_GENERATION) {
            items.push(format!("Total generation: {total:.0} MW"));
        }
    }
    if let Some(price) = row.get(PRICE.column) {
        items.push(format!("Market price: {price:.2} €/MWh"));
    }

    Panel::list_or(heading(row.at()), items, "Incident KPI data unavailable.")
}

fn heading(at: NaiveDateTime) -> String {
    format!("Conditions at {} (before the event):", time_label(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures::{at, quarter_hours};

    #[test]
    fn falls_back_to_the_latest_earlier_reading() {
        let frame = quarter_hours(
            at(28, 8, 30),
            vec![
                ("DemandaReal_MW", vec![24_800.0, 25_012.4]),
                ("SaldoIntercambios_MW", vec![-1_500.0, -2_100.0]),
                ("PrecioMercado_EUR_MWh", vec![11.0, 12.346]),
            ],
        );

        let Panel::List { heading, items } = build(&frame, at(28, 8, 50)) else {
            panic!("expected a list");
        };
        assert_eq!(heading, "Conditions at 28-Apr 08:45 (before the event):");
        assert_eq!(
            items,
            vec![
                "Demand: 25012 MW",
                "Interchange balance: 2100 MW (Export)",
                "Market price: 12.35 €/MWh",
            ]
        );
    }

    #[test]
    fn before_the_first_reading_is_unavailable() {
        let frame = quarter_hours(at(28, 9, 0), vec![("DemandaReal_MW", vec![1.0])]);
        let Panel::List { heading, items } = build(&frame, at(28, 8, 45)) else {
            panic!("expected a list");
        };
        assert_eq!(heading, "Conditions at 28-Apr 08:45 (before the event):");
        assert_eq!(items, vec!["Data unavailable for the requested time."]);
    }

    #[test]
    fn empty_table_and_empty_row() {
        assert!(build(&Frame::empty(), at(28, 8, 45)).is_message());

        let frame = quarter_hours(
            at(28, 8, 45),
            vec![("Eolica_MW", vec![1.0]), ("TotalGeneracion_MW", vec![f64::NAN])],
        );
        assert_eq!(build(&frame, at(28, 8, 45)), Panel::message("Incident KPI data unavailable."));
    }
}
