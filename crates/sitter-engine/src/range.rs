//! Half-open `[start, end)` date-range utilities.
//!
//! Every function here treats a range as including its start day and excluding
//! its end day. Two ranges that merely touch (`a.end == b.start`) do NOT overlap,
//! so back-to-back bookings are always allowed.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::day::Day;
use crate::error::{EngineError, Result};

/// Chronological comparison of two days.
pub fn compare(a: Day, b: Day) -> Ordering {
    a.cmp(&b)
}

/// The day `n` days after `day` (negative `n` goes backwards).
pub fn add_days(day: Day, n: i64) -> Day {
    day.add_days(n)
}

/// Number of whole days in `[start, end_exclusive)`, clamped to 0 for inverted input.
pub fn days_between(start: Day, end_exclusive: Day) -> i64 {
    (end_exclusive.date() - start.date()).num_days().max(0)
}

/// `true` iff both bounds are present and `start < end`.
pub fn is_valid_range(start: Option<Day>, end: Option<Day>) -> bool {
    matches!((start, end), (Some(s), Some(e)) if s < e)
}

/// `true` iff `[a_start, a_end)` and `[b_start, b_end)` share at least one day.
pub fn overlaps(a_start: Day, a_end: Day, b_start: Day, b_end: Day) -> bool {
    a_start < b_end && b_start < a_end
}

/// `true` iff `[outer_start, outer_end)` fully contains `[inner_start, inner_end)`.
pub fn covers(outer_start: Day, outer_end: Day, inner_start: Day, inner_end: Day) -> bool {
    outer_start <= inner_start && outer_end >= inner_end
}

/// Every day in `[start, end_exclusive)` in ascending order.
///
/// The returned iterator is `Clone`, so it can be restarted by cloning before use.
pub fn enumerate_days(start: Day, end_exclusive: Day) -> DayIter {
    DayIter {
        next: start,
        end: end_exclusive,
    }
}

/// Ascending iterator over the days of a half-open range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayIter {
    next: Day,
    end: Day,
}

impl Iterator for DayIter {
    type Item = Day;

    fn next(&mut self) -> Option<Day> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next = current.succ();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = days_between(self.next, self.end) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DayIter {}

/// A validated half-open range of days. Construction guarantees `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct DateRange {
    start: Day,
    end: Day,
}

#[derive(Deserialize)]
struct RawRange {
    start: Day,
    end: Day,
}

impl TryFrom<RawRange> for DateRange {
    type Error = EngineError;

    fn try_from(raw: RawRange) -> Result<Self> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Validate and build a range. Zero-length and inverted ranges are rejected.
    pub fn new(start: Day, end: Day) -> Result<Self> {
        if is_valid_range(Some(start), Some(end)) {
            Ok(DateRange { start, end })
        } else {
            Err(EngineError::InvalidRange)
        }
    }

    /// Parse both bounds from text. Blank input is an invalid range, not a parse error.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        if start.trim().is_empty() || end.trim().is_empty() {
            return Err(EngineError::InvalidRange);
        }
        DateRange::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> Day {
        self.start
    }

    pub fn end(&self) -> Day {
        self.end
    }

    /// Number of days (nights) in the range; always at least 1.
    pub fn nights(&self) -> i64 {
        days_between(self.start, self.end)
    }

    pub fn days(&self) -> DayIter {
        enumerate_days(self.start, self.end)
    }

    pub fn contains(&self, day: Day) -> bool {
        self.start <= day && day < self.end
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }

    pub fn covers(&self, other: &DateRange) -> bool {
        covers(self.start, self.end, other.start, other.end)
    }

    /// The days shared by both ranges, or `None` when they do not overlap.
    pub fn intersect(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        DateRange::new(start, end).ok()
    }
}
