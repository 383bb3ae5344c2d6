//! Coverage of requested ranges by a guardian's free capacity.
//!
//! A request is covered only when every one of its days has at least as many
//! free units as pets requested. Absence of conflicting bookings is not enough:
//! the guardian must have opened availability for the whole span.

use tracing::debug;

use crate::daily::DailyMap;
use crate::day::Day;
use crate::error::{EngineError, Result};
use crate::range::DateRange;
use crate::snapshot::GuardianSnapshot;

/// The first day of `requested` with fewer than `pet_count` free units, and its free count.
pub fn first_uncovered_day(
    free: &DailyMap,
    requested: &DateRange,
    pet_count: u32,
) -> Option<(Day, u32)> {
    let needed = pet_count.max(1);
    requested
        .days()
        .map(|day| (day, free.get(day)))
        .find(|(_, available)| *available < needed)
}

/// `true` when every day of `requested` has at least `pet_count` free units.
pub fn has_consecutive_free_days(free: &DailyMap, requested: &DateRange, pet_count: u32) -> bool {
    first_uncovered_day(free, requested, pet_count).is_none()
}

/// Check coverage of `requested` against a fresh aggregation of `snapshot`.
///
/// # Errors
/// Returns `EngineError::InsufficientCoverage` for the first day that lacks room.
pub fn ensure_coverage(
    snapshot: &GuardianSnapshot,
    requested: &DateRange,
    pet_count: u32,
) -> Result<()> {
    let daily = snapshot.daily_availability(requested);
    match first_uncovered_day(&daily.free, requested, pet_count) {
        Some((day, free)) => {
            debug!(guardian = %snapshot.guardian_id, %day, free, "coverage gap");
            Err(EngineError::InsufficientCoverage {
                day,
                free,
                requested: pet_count.max(1),
            })
        }
        None => Ok(()),
    }
}

/// Find the first run of consecutive days at or after `from` with `free >= min_free`.
///
/// Returns the run as a half-open range `[first, last + 1)`. A free day has at
/// least one unit, so `min_free` below 1 is treated as 1.
pub fn next_free_span(free: &DailyMap, from: Day, min_free: u32) -> Option<DateRange> {
    let min_free = min_free.max(1);
    let mut span: Option<(Day, Day)> = None;

    for (day, available) in free.iter().skip_while(|(day, _)| *day < from) {
        let qualifies = available >= min_free;
        match span {
            None if qualifies => span = Some((day, day.succ())),
            None => {}
            Some((start, end)) if qualifies && day == end => span = Some((start, day.succ())),
            Some(_) => break,
        }
    }

    span.and_then(|(start, end)| DateRange::new(start, end).ok())
}

/// Aggregate `horizon_days` from `from` and return the first free span.
pub fn find_next_free_span(
    snapshot: &GuardianSnapshot,
    from: Day,
    horizon_days: u32,
    min_free: u32,
) -> Option<DateRange> {
    let window = DateRange::new(from, from.add_days(i64::from(horizon_days))).ok()?;
    let daily = snapshot.daily_availability(&window);
    next_free_span(&daily.free, from, min_free)
}
