//! Calendar days without a time-of-day component.
//!
//! A [`Day`] is canonically written `YYYY-MM-DD`. Because that form is fixed
//! width and zero padded, lexicographic order of the text equals chronological
//! order, and the derived `Ord` on the wrapped date agrees with both.
//!
//! Parsing also accepts an RFC 3339 timestamp (`2025-11-01T00:00:00Z`) and keeps
//! only its date component. Availability records store their bounds that way.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// A calendar day identified only by its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NaiveDate);

impl Day {
    /// Build a day from year/month/day, returning `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Day)
    }

    /// The current local calendar day.
    pub fn today() -> Self {
        Day(Local::now().date_naive())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// The day `n` days after this one (`n` may be negative).
    ///
    /// Month and year boundaries roll over. Saturates at the limits of the
    /// representable calendar instead of failing.
    pub fn add_days(self, n: i64) -> Self {
        let shifted = Duration::try_days(n).and_then(|d| self.0.checked_add_signed(d));
        match shifted {
            Some(date) => Day(date),
            None if n < 0 => Day(NaiveDate::MIN),
            None => Day(NaiveDate::MAX),
        }
    }

    /// The following day.
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// Weekday numbered from Sunday (0) to Saturday (6).
    pub fn weekday_from_sunday(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn day_of_month(self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Day(date)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Day {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidDay(s.to_string());
        let s_trimmed = s.trim();

        // Only the leading YYYY-MM-DD is significant; a trailing time part is dropped.
        let (date_part, rest) = match s_trimmed.get(..10) {
            Some(head) => (head, &s_trimmed[10..]),
            None => return Err(invalid()),
        };
        if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
            return Err(invalid());
        }
        let bytes = date_part.as_bytes();
        if bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Day)
            .map_err(|_| invalid())
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
