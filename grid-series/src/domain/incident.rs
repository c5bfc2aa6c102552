use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Wall-clock analysis window around an incident date, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncidentWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl IncidentWindow {
    /// From midnight `days_before` days ahead of `date` up to 23:59 of the
    /// day `days_after` days past it.
    ///
    /// `None` when either bound falls outside the representable date range.
    pub fn around(date: NaiveDate, days_before: u64, days_after: u64) -> Option<Self> {
        let start = date.checked_sub_days(Days::new(days_before))?.and_time(NaiveTime::MIN);
        let end = date.checked_add_days(Days::new(days_after))?.and_hms_opt(23, 59, 0)?;
        Some(Self { start, end })
    }

    pub fn contains(&self, wall: NaiveDateTime) -> bool {
        self.start <= wall && wall <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn default_window_spans_previous_day_through_end_of_incident_day() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 28).unwrap();
        let window = IncidentWindow::around(date, 1, 0).unwrap();

        assert_eq!(window.start.to_string(), "2025-04-27 00:00:00");
        assert_eq!(window.end.to_string(), "2025-04-28 23:59:00");
        assert!(window.contains(window.end));
        assert!(!window.contains(window.end + TimeDelta::minutes(1)));
    }

    #[test]
    fn out_of_range_offsets_are_none() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 28).unwrap();
        assert!(IncidentWindow::around(date, u64::MAX, 0).is_none());
        assert!(IncidentWindow::around(date, 0, 1_000_000_000).is_none());
        assert!(IncidentWindow::around(NaiveDate::MAX, 0, 0).is_some());
    }
}
