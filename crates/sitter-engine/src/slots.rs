//! Rules for a guardian editing their own availability blocks.
//!
//! By default a new or edited block must not overlap any other block of the
//! same guardian. With merging enabled, overlapping and adjacent blocks are
//! folded into one instead and the guardian's whole block list is replaced.

use serde::Serialize;

use crate::day::Day;
use crate::error::{EngineError, Result};
use crate::model::AvailabilityBlock;
use crate::range::DateRange;

/// What the caller should persist for a block create/edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPlan {
    /// Store the candidate range as is.
    Insert(DateRange),
    /// Replace all of the guardian's blocks with these merged ranges.
    Replace(Vec<DateRange>),
}

/// Existing blocks (other than `exclude_id`) that overlap `candidate`.
pub fn overlapping_slots<'a>(
    candidate: &DateRange,
    existing: &'a [AvailabilityBlock],
    exclude_id: Option<&str>,
) -> Vec<&'a AvailabilityBlock> {
    existing
        .iter()
        .filter(|b| Some(b.id.as_str()) != exclude_id)
        .filter(|b| b.range().is_some_and(|r| r.overlaps(candidate)))
        .collect()
}

/// Validate a block's bounds and make sure it does not overlap another block.
///
/// Pass the block's own id as `exclude_id` when editing it.
///
/// # Errors
/// Returns `EngineError::InvalidRange` for empty or inverted bounds, then
/// `EngineError::SlotOverlap` naming the first conflicting block.
pub fn validate_no_overlap(
    start: Day,
    end: Day,
    existing: &[AvailabilityBlock],
    exclude_id: Option<&str>,
) -> Result<DateRange> {
    let candidate = DateRange::new(start, end)?;
    match overlapping_slots(&candidate, existing, exclude_id).first() {
        Some(conflict) => Err(EngineError::SlotOverlap {
            start: conflict.start,
            end: conflict.end,
        }),
        None => Ok(candidate),
    }
}

/// Sort ranges by start and fold overlapping or adjacent ones together.
pub fn merge_slots<I>(ranges: I) -> Vec<DateRange>
where
    I: IntoIterator<Item = DateRange>,
{
    let mut sorted: Vec<DateRange> = ranges.into_iter().collect();
    sorted.sort_by_key(|r| (r.start(), r.end()));

    let mut merged: Vec<DateRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if let Some(last) = merged.last_mut() {
            // `>=` so that [a, b) and [b, c) become [a, c).
            if last.end() >= range.start() {
                let end = last.end().max(range.end());
                if let Ok(joined) = DateRange::new(last.start(), end) {
                    *last = joined;
                }
                continue;
            }
        }
        merged.push(range);
    }
    merged
}

/// Decide how to store a block create/edit.
///
/// # Errors
/// Same as [`validate_no_overlap`] when `merge` is off; only
/// `EngineError::InvalidRange` when it is on.
pub fn plan_slot_change(
    start: Day,
    end: Day,
    existing: &[AvailabilityBlock],
    exclude_id: Option<&str>,
    merge: bool,
) -> Result<SlotPlan> {
    if !merge {
        return validate_no_overlap(start, end, existing, exclude_id).map(SlotPlan::Insert);
    }
    let candidate = DateRange::new(start, end)?;
    let others = existing
        .iter()
        .filter(|b| Some(b.id.as_str()) != exclude_id)
        .filter_map(AvailabilityBlock::range);
    Ok(SlotPlan::Replace(merge_slots(others.chain([candidate]))))
}

/// The first day at or after `as_of` on which some slot is open.
///
/// That is `as_of` itself when a slot contains it, otherwise the earliest slot
/// start after it.
pub fn next_availability<'a, I>(slots: I, as_of: Day) -> Option<Day>
where
    I: IntoIterator<Item = &'a DateRange>,
{
    let mut earliest: Option<Day> = None;
    for slot in slots {
        if slot.contains(as_of) {
            return Some(as_of);
        }
        if slot.start() > as_of {
            earliest = Some(earliest.map_or(slot.start(), |e| e.min(slot.start())));
        }
    }
    earliest
}
