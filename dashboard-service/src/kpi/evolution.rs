use chrono::Datelike;
use grid_series::{ops::yearly_mean, Frame};

use super::Panel;
use crate::catalog::{self, TREND_KPIS};

/// Relative change, in percent, beyond which a trend is reported as a move.
const STABLE_BAND_PCT: f64 = 5.0;
/// First-year means at or below this are too small to compare against.
const MIN_BASELINE_MW: f64 = 0.1;

/// Compare first- and last-year average output of the headline technologies.
pub fn build(hourly: &Frame) -> Panel {
    let index = hourly.index();
    let (Some(first), Some(last)) = (index.wall_clock(0), index.len().checked_sub(1).and_then(|p| index.wall_clock(p)))
    else {
        return Panel::message("Mix evolution KPIs unavailable: hourly data missing.");
    };
    let (first_year, last_year) = (first.year(), last.year());
    if first_year >= last_year {
        return Panel::message("Mix evolution KPIs need more than one calendar year of hourly data.");
    }

    let yearly = yearly_mean(hourly, &catalog::columns(&TREND_KPIS));
    let items = TREND_KPIS
        .iter()
        .filter_map(|s| {
            let column = yearly.column(s.column).filter(|c| c.has_data())?;
            let start = column.values().first().copied().flatten();
            let end = column.values().last().copied().flatten()?;
            let label = s.label;
            Some(match start {
                Some(start) if start > MIN_BASELINE_MW => {
                    let change = (end - start) / start * 100.0;
                    let trend = if change > STABLE_BAND_PCT {
                        "increased"
                    } else if change < -STABLE_BAND_PCT {
                        "decreased"
                    } else {
                        "remained stable, changing"
                    };
                    format!(
                        "{label}: average output {trend} ~{:.0}% between {first_year} and {last_year}.",
                        change.abs()
                    )
                }
                _ => format!("{label}: average output in {last_year} was {end:.0} MW."),
            })
        })
        .collect();

    Panel::list_or(
        format!("Mix highlights ({first_year}-{last_year}):"),
        items,
        "Could not derive mix evolution KPIs.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use grid_series::{Column, IndexZone, TimeIndex};

    fn stamp(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    fn frame(stamps: Vec<NaiveDateTime>, columns: Vec<(&str, Vec<f64>)>) -> Frame {
        Frame::new(
            TimeIndex::new(stamps, IndexZone::Naive).unwrap(),
            columns
                .into_iter()
                .map(|(name, values)| Column::from_dense(name, values))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn single_year_is_a_message() {
        let f = frame(vec![stamp(2024, 1, 1), stamp(2024, 6, 1)], vec![("Eolica_MW", vec![1.0, 2.0])]);
        assert!(build(&f).is_message());
        assert!(build(&Frame::empty()).is_message());
    }

    #[test]
    fn trends_between_first_and_last_year() {
        let f = frame(
            vec![stamp(2020, 3, 1), stamp(2020, 9, 1), stamp(2024, 3, 1)],
            vec![
                ("Eolica_MW", vec![1_000.0, 1_000.0, 1_500.0]),
                ("SolarFotovoltaica_MW", vec![0.0, 0.0, 4_000.0]),
                ("Carbon_MW", vec![2_000.0, 2_000.0, 200.0]),
                ("CicloCombinado_MW", vec![5_000.0, 5_000.0, 5_100.0]),
            ],
        );

        let Panel::List { heading, items } = build(&f) else {
            panic!("expected a list");
        };
        assert_eq!(heading, "Mix highlights (2020-2024):");
        assert_eq!(
            items,
            vec![
                "Wind: average output increased ~50% between 2020 and 2024.",
                "Solar PV: average output in 2024 was 4000 MW.",
                "Coal: average output decreased ~90% between 2020 and 2024.",
                "Combined cycle: average output remained stable, changing ~2% between 2020 and 2024.",
            ]
        );
    }

    #[test]
    fn missing_technologies_are_skipped() {
        let f = frame(
            vec![stamp(2022, 1, 1), stamp(2023, 1, 1)],
            vec![("Nuclear_MW", vec![7_000.0, 7_000.0])],
        );
        assert_eq!(build(&f), Panel::message("Could not derive mix evolution KPIs."));
    }
}
