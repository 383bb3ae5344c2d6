//! Per-day capacity, occupancy and free counts for one guardian.
//!
//! Combines the guardian's availability blocks, their closed/open exceptions and
//! the bookings that already hold capacity into three [`DailyMap`]s over a query
//! window. Results are always derived from the inputs passed in; nothing is
//! cached or persisted here, so callers recompute whenever their data changes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::daily::DailyMap;
use crate::day::Day;
use crate::model::{AvailabilityBlock, AvailabilityException, Booking, ExceptionKind};
use crate::range::DateRange;
use crate::recurrence::expand_block;
use crate::snapshot::GuardianSnapshot;

/// Capacity, occupancy and free maps over `[window_start, window_end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAvailability {
    pub capacity: DailyMap,
    pub occupancy: DailyMap,
    /// `max(0, capacity - occupancy)` for every day present in either map.
    pub free: DailyMap,
    pub window_start: Day,
    pub window_end: Day,
}

/// Sum block capacity per day, then apply exceptions.
///
/// `closed` days are forced to zero no matter how many blocks cover them.
/// `open` days get at least one unit when no block provided any, but never
/// lower what a block already set.
pub fn capacity_by_day(
    blocks: &[AvailabilityBlock],
    exceptions: &[AvailabilityException],
    window: &DateRange,
) -> DailyMap {
    let mut capacity = DailyMap::new();
    for block in blocks {
        for day in expand_block(block, window) {
            capacity.add(day, block.capacity);
        }
    }

    let mut closed = BTreeSet::new();
    let mut open = BTreeSet::new();
    for exception in exceptions {
        let Some(clipped) = exception.range().and_then(|r| r.intersect(window)) else {
            continue;
        };
        let target = match exception.kind {
            ExceptionKind::Closed => &mut closed,
            ExceptionKind::Open => &mut open,
        };
        target.extend(clipped.days());
    }

    for (day, value) in capacity.values_mut() {
        if closed.contains(day) {
            *value = 0;
        }
    }
    for day in open {
        if !closed.contains(&day) && capacity.get(day) == 0 {
            capacity.set(day, 1);
        }
    }

    capacity
}

/// Count pets per day for bookings in an occupying status, clipped to the window.
pub fn occupancy_by_day(bookings: &[Booking], window: &DateRange) -> DailyMap {
    let mut occupancy = DailyMap::new();
    for booking in bookings.iter().filter(|b| b.is_occupying()) {
        let Some(clipped) = booking.range().and_then(|r| r.intersect(window)) else {
            continue;
        };
        for day in clipped.days() {
            occupancy.add(day, booking.units());
        }
    }
    occupancy
}

/// Free units per day over the union of days in both maps, floored at zero.
pub fn free_by_day(capacity: &DailyMap, occupancy: &DailyMap) -> DailyMap {
    let days: BTreeSet<Day> = capacity.days().chain(occupancy.days()).collect();
    days.into_iter()
        .map(|day| (day, capacity.get(day).saturating_sub(occupancy.get(day))))
        .collect()
}

/// Compute all three daily maps for one guardian over `window`.
pub fn compute_daily_availability(
    snapshot: &GuardianSnapshot,
    window: &DateRange,
) -> DailyAvailability {
    let capacity = capacity_by_day(&snapshot.blocks, &snapshot.exceptions, window);
    let occupancy = occupancy_by_day(&snapshot.bookings, window);
    let free = free_by_day(&capacity, &occupancy);

    debug!(
        guardian = %snapshot.guardian_id,
        window_start = %window.start(),
        window_end = %window.end(),
        capacity_days = capacity.len(),
        occupied_days = occupancy.len(),
        "computed daily availability"
    );

    DailyAvailability {
        capacity,
        occupancy,
        free,
        window_start: window.start(),
        window_end: window.end(),
    }
}
