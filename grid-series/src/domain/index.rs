use std::ops::Range;

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use super::FrameError;

/// Timezone of a [`TimeIndex`].
///
/// Stamps of a `Naive` index are wall-clock values. Stamps of a zoned index
/// are UTC instants and are shown in the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexZone {
    Naive,
    Named(Tz),
    Fixed(FixedOffset),
}

impl IndexZone {
    pub const UTC: IndexZone = IndexZone::Named(Tz::UTC);

    /// Parse an IANA name (`Europe/Madrid`, `UTC`) or a fixed offset (`+02:00`).
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Ok(tz) = name.parse::<Tz>() {
            return Some(Self::Named(tz));
        }
        name.parse::<FixedOffset>().ok().map(Self::Fixed)
    }

    /// Reconcile a naive wall-clock target with this zone.
    ///
    /// Returns `None` for wall times skipped by a DST transition. Ambiguous
    /// wall times resolve to the earliest instant.
    pub fn localize(&self, wall: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Self::Naive => Some(wall),
            Self::Named(tz) => earliest_utc(tz.from_local_datetime(&wall)),
            Self::Fixed(offset) => earliest_utc(offset.from_local_datetime(&wall)),
        }
    }

    /// Wall-clock representation of a stamp stored in this zone's frame.
    pub fn wall_clock(&self, stamp: NaiveDateTime) -> NaiveDateTime {
        match self {
            Self::Naive => stamp,
            Self::Named(tz) => tz.from_utc_datetime(&stamp).naive_local(),
            Self::Fixed(offset) => offset.from_utc_datetime(&stamp).naive_local(),
        }
    }
}

fn earliest_utc<T: TimeZone>(local: LocalResult<DateTime<T>>) -> Option<NaiveDateTime> {
    local.earliest().map(|dt| dt.naive_utc())
}

/// Strictly increasing timestamp index.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeIndex {
    stamps: Vec<NaiveDateTime>,
    zone: IndexZone,
}

impl TimeIndex {
    pub fn new(stamps: Vec<NaiveDateTime>, zone: IndexZone) -> Result<Self, FrameError> {
        if let Some(position) = stamps.windows(2).position(|w| w[0] >= w[1]) {
            return Err(FrameError::NotMonotonic {
                position: position + 1,
                stamp: stamps[position + 1],
            });
        }
        Ok(Self { stamps, zone })
    }

    pub fn empty(zone: IndexZone) -> Self {
        Self {
            stamps: Vec::new(),
            zone,
        }
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    pub fn zone(&self) -> IndexZone {
        self.zone
    }

    pub fn stamps(&self) -> &[NaiveDateTime] {
        &self.stamps
    }

    pub fn stamp(&self, position: usize) -> Option<NaiveDateTime> {
        self.stamps.get(position).copied()
    }

    pub fn wall_clock(&self, position: usize) -> Option<NaiveDateTime> {
        self.stamp(position).map(|s| self.zone.wall_clock(s))
    }

    pub fn wall_clocks(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.stamps.iter().map(|s| self.zone.wall_clock(*s))
    }

    pub fn first(&self) -> Option<NaiveDateTime> {
        self.stamps.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDateTime> {
        self.stamps.last().copied()
    }

    /// See [`IndexZone::localize`].
    pub fn localize(&self, wall: NaiveDateTime) -> Option<NaiveDateTime> {
        self.zone.localize(wall)
    }

    /// Exact position of `stamp`.
    pub fn position(&self, stamp: NaiveDateTime) -> Option<usize> {
        self.stamps.binary_search(&stamp).ok()
    }

    /// Position of the last stamp at or before `stamp`.
    pub fn asof(&self, stamp: NaiveDateTime) -> Option<usize> {
        self.stamps.partition_point(|s| *s <= stamp).checked_sub(1)
    }

    /// Whether `stamp` lies within `[first, last]`.
    pub fn spans(&self, stamp: NaiveDateTime) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => first <= stamp && stamp <= last,
            _ => false,
        }
    }

    /// Positions of stamps within `[start, end]`.
    pub fn range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Range<usize> {
        let lo = self.stamps.partition_point(|s| *s < start);
        let hi = self.stamps.partition_point(|s| *s <= end);
        lo..hi.max(lo)
    }

    pub(crate) fn select(&self, positions: &[usize]) -> Self {
        Self {
            stamps: positions.iter().map(|&p| self.stamps[p]).collect(),
            zone: self.zone,
        }
    }
}
