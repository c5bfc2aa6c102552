//! Text timestamp parsing shared by the CSV reader and string-typed parquet indices.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use grid_series::IndexZone;

use super::SourceError;

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"];
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedStamp {
    /// No offset in the text: a wall-clock value.
    Naive(NaiveDateTime),
    /// Offset present: the UTC instant and the offset it was written with.
    Offset(NaiveDateTime, FixedOffset),
}

impl ParsedStamp {
    fn from_offset(dt: DateTime<FixedOffset>) -> Self {
        Self::Offset(dt.naive_utc(), *dt.offset())
    }
}

pub fn parse_stamp(s: &str) -> Option<ParsedStamp> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(ParsedStamp::from_offset(dt));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|f| DateTime::parse_from_str(s, f).ok())
    {
        return Some(ParsedStamp::from_offset(dt));
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Some(ParsedStamp::Naive(dt));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| ParsedStamp::Naive(d.and_time(chrono::NaiveTime::MIN)))
}

/// Parse a whole index column.
///
/// All stamps must agree: either all naive (naive index) or all carrying an
/// offset. A single shared offset becomes the index zone; differing offsets
/// (a DST change inside the file) give a UTC index.
pub fn parse_stamps<'a>(
    raw: impl IntoIterator<Item = &'a str>,
) -> Result<(Vec<NaiveDateTime>, IndexZone), SourceError> {
    let mut stamps = Vec::new();
    let mut zone: Option<IndexZone> = None;

    for text in raw {
        let parsed = parse_stamp(text).ok_or_else(|| SourceError::InvalidTimestamp(text.to_string()))?;
        let (stamp, this_zone) = match parsed {
            ParsedStamp::Naive(s) => (s, IndexZone::Naive),
            ParsedStamp::Offset(s, offset) => (s, IndexZone::Fixed(offset)),
        };
        zone = Some(match zone {
            None => this_zone,
            Some(z) if z == this_zone => z,
            Some(IndexZone::Naive) => return Err(mixed(text)),
            Some(_) if this_zone == IndexZone::Naive => return Err(mixed(text)),
            Some(_) => IndexZone::UTC,
        });
        stamps.push(stamp);
    }

    Ok((stamps, zone.unwrap_or(IndexZone::Naive)))
}

fn mixed(text: &str) -> SourceError {
    SourceError::InvalidTimestamp(format!("{text} (mixes naive and offset timestamps)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn east(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn parses_pandas_style_stamps() {
        assert_eq!(
            parse_stamp("2025-04-28 08:45:00"),
            Some(ParsedStamp::Naive(naive("2025-04-28 08:45:00")))
        );
        assert_eq!(
            parse_stamp("2025-04-28T08:45:00"),
            Some(ParsedStamp::Naive(naive("2025-04-28 08:45:00")))
        );
        assert_eq!(
            parse_stamp("2025-04-28 08:45:00+02:00"),
            Some(ParsedStamp::Offset(naive("2025-04-28 06:45:00"), east(2)))
        );
        assert_eq!(
            parse_stamp("2025-04-28"),
            Some(ParsedStamp::Naive(naive("2025-04-28 00:00:00")))
        );
        assert_eq!(parse_stamp("yesterday"), None);
    }

    #[test]
    fn shared_offset_becomes_the_index_zone() {
        let (stamps, zone) =
            parse_stamps(["2025-04-28 08:30:00+02:00", "2025-04-28 08:45:00+02:00"]).unwrap();
        assert_eq!(zone, IndexZone::Fixed(east(2)));
        assert_eq!(stamps, vec![naive("2025-04-28 06:30:00"), naive("2025-04-28 06:45:00")]);
        assert_eq!(zone.wall_clock(stamps[1]), naive("2025-04-28 08:45:00"));
    }

    #[test]
    fn differing_offsets_make_a_utc_index() {
        let (stamps, zone) = parse_stamps([
            "2025-03-30 01:00:00+01:00",
            "2025-03-30 03:00:00+02:00",
            "2025-03-30 04:00:00+02:00",
        ])
        .unwrap();
        assert_eq!(zone, IndexZone::UTC);
        assert_eq!(
            stamps,
            vec![naive("2025-03-30 00:00:00"), naive("2025-03-30 01:00:00"), naive("2025-03-30 02:00:00")]
        );
    }

    #[test]
    fn mixed_stamps_are_rejected() {
        let err = parse_stamps(["2025-04-28 08:45:00", "2025-04-28 09:00:00+02:00"]).unwrap_err();
        assert!(matches!(err, SourceError::InvalidTimestamp(_)));
        let err = parse_stamps(["2025-04-28 08:45:00+02:00", "2025-04-28 09:00:00"]).unwrap_err();
        assert!(matches!(err, SourceError::InvalidTimestamp(_)));
    }
}
