//! Time intervals and sorted, non-overlapping collections of them.
//!
//! Interval-based position properties attach one piece of data (a fixed position,
//! a sub-property) to each interval and answer queries by finding the interval
//! that contains the requested date.

use crate::JulianDate;
use std::cmp::Ordering;
use std::fmt;

/// A span of time between two dates, each end open or closed.
///
/// Intervals default to closed on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeInterval {
    pub start: JulianDate,
    pub stop: JulianDate,
    pub is_start_included: bool,
    pub is_stop_included: bool,
}

impl TimeInterval {
    pub fn new(start: JulianDate, stop: JulianDate) -> Self {
        Self {
            start,
            stop,
            is_start_included: true,
            is_stop_included: true,
        }
    }

    pub fn with_start_included(mut self, included: bool) -> Self {
        self.is_start_included = included;
        self
    }

    pub fn with_stop_included(mut self, included: bool) -> Self {
        self.is_stop_included = included;
        self
    }

    /// `true` when no instant lies in the interval.
    ///
    /// A zero-length interval is non-empty only when both ends are closed.
    /// Intervals with non-finite ends are empty.
    pub fn is_empty(&self) -> bool {
        match self.stop.partial_cmp(&self.start) {
            Some(Ordering::Greater) => false,
            Some(Ordering::Equal) => !(self.is_start_included && self.is_stop_included),
            _ => true,
        }
    }

    pub fn contains(&self, date: &JulianDate) -> bool {
        if self.is_empty() {
            return false;
        }

        let after_start = match date.partial_cmp(&self.start) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.is_start_included,
            _ => false,
        };
        let before_stop = match date.partial_cmp(&self.stop) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => self.is_stop_included,
            _ => false,
        };

        after_start && before_stop
    }

    /// `true` when `self` ends strictly before `other` begins.
    fn precedes(&self, other: &Self) -> bool {
        match self.stop.partial_cmp(&other.start) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => !(self.is_stop_included && other.is_start_included),
            _ => false,
        }
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && !self.precedes(other) && !other.precedes(self)
    }

    /// Part of `self` strictly before `other` starts, if any.
    fn before(&self, other: &Self) -> Option<Self> {
        let piece = Self {
            start: self.start,
            stop: other.start,
            is_start_included: self.is_start_included,
            is_stop_included: !other.is_start_included,
        };
        (!piece.is_empty()).then_some(piece)
    }

    /// Part of `self` strictly after `other` stops, if any.
    fn after(&self, other: &Self) -> Option<Self> {
        let piece = Self {
            start: other.stop,
            stop: self.stop,
            is_start_included: !other.is_stop_included,
            is_stop_included: self.is_stop_included,
        };
        (!piece.is_empty()).then_some(piece)
    }

    fn sort_key_cmp(&self, other: &Self) -> Ordering {
        self.start
            .partial_cmp(&other.start)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.is_start_included.cmp(&self.is_start_included))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.is_start_included { '[' } else { '(' },
            self.start,
            self.stop,
            if self.is_stop_included { ']' } else { ')' }
        )
    }
}

/// Non-overlapping intervals, each carrying a value, kept sorted by start.
#[derive(Debug, Clone)]
pub struct TimeIntervalCollection<T> {
    entries: Vec<(TimeInterval, T)>,
}

impl<T> Default for TimeIntervalCollection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> TimeIntervalCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TimeInterval, &T)> {
        self.entries.iter().map(|(interval, data)| (interval, data))
    }

    /// Start of the earliest interval.
    pub fn start(&self) -> Option<JulianDate> {
        self.entries.first().map(|(interval, _)| interval.start)
    }

    /// Stop of the latest interval.
    pub fn stop(&self) -> Option<JulianDate> {
        self.entries.last().map(|(interval, _)| interval.stop)
    }

    /// Interval containing `date`, with its data.
    pub fn find_interval_containing(&self, date: &JulianDate) -> Option<(&TimeInterval, &T)> {
        let idx = self
            .entries
            .partition_point(|(interval, _)| interval.start <= *date);

        // A closed point interval and an open-start interval can share a start,
        // so the match may sit one slot further back.
        self.entries[..idx]
            .iter()
            .rev()
            .take(2)
            .find(|(interval, _)| interval.contains(date))
            .map(|(interval, data)| (interval, data))
    }

    pub fn find_data_for_interval_containing(&self, date: &JulianDate) -> Option<&T> {
        self.find_interval_containing(date).map(|(_, data)| data)
    }
}

impl<T: Clone> TimeIntervalCollection<T> {
    /// Adds `interval` with `data`, overwriting whatever part of existing
    /// intervals it overlaps. Empty intervals are ignored.
    pub fn add_interval(&mut self, interval: TimeInterval, data: T) {
        if interval.is_empty() {
            return;
        }

        let mut entries = Vec::with_capacity(self.entries.len() + 2);
        for (existing, existing_data) in self.entries.drain(..) {
            if !existing.overlaps(&interval) {
                entries.push((existing, existing_data));
                continue;
            }
            if let Some(left) = existing.before(&interval) {
                entries.push((left, existing_data.clone()));
            }
            if let Some(right) = existing.after(&interval) {
                entries.push((right, existing_data));
            }
        }
        entries.push((interval, data));
        entries.sort_by(|a, b| a.0.sort_key_cmp(&b.0));

        self.entries = entries;
    }
}
