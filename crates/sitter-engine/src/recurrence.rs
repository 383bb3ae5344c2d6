//! Expansion of availability blocks into the days they contribute capacity to.
//!
//! A non-recurring block contributes exactly the days of its own range that fall
//! inside the query window. A recurring block is anchored at its start day and is
//! tested against every day of the window:
//!
//! - `DAILY` -- every day from the anchor onwards
//! - `WEEKLY` -- days whose weekday is in `by_weekday` (the anchor's weekday when empty)
//! - `MONTHLY` -- days sharing the anchor's day of month; shorter months skip it
//!
//! All rules stop after `until` (inclusive) when it is set.

use crate::day::Day;
use crate::model::{AvailabilityBlock, Recurrence, RecurrenceType};
use crate::range::DateRange;

/// The days inside `window` on which `block` provides capacity, ascending.
///
/// Blocks with an empty or inverted range provide nothing.
pub fn expand_block<'a>(
    block: &'a AvailabilityBlock,
    window: &DateRange,
) -> Box<dyn Iterator<Item = Day> + 'a> {
    let Some(own) = block.range() else {
        return Box::new(std::iter::empty());
    };

    match &block.recurrence {
        None => match own.intersect(window) {
            Some(clipped) => Box::new(clipped.days()),
            None => Box::new(std::iter::empty()),
        },
        Some(rule) => {
            let anchor = own.start();
            Box::new(
                window
                    .days()
                    .filter(move |day| occurs_on(rule, anchor, *day)),
            )
        }
    }
}

/// Whether a rule anchored at `anchor` produces `day`.
pub fn occurs_on(rule: &Recurrence, anchor: Day, day: Day) -> bool {
    if day < anchor {
        return false;
    }
    if let Some(until) = rule.until {
        if day > until {
            return false;
        }
    }

    match rule.kind {
        RecurrenceType::Daily => true,
        RecurrenceType::Weekly => {
            let weekday = day.weekday_from_sunday() as i32;
            if rule.by_weekday.is_empty() {
                weekday == anchor.weekday_from_sunday() as i32
            } else {
                rule.by_weekday
                    .iter()
                    .any(|wd| wd.rem_euclid(7) == weekday)
            }
        }
        RecurrenceType::Monthly => day.day_of_month() == anchor.day_of_month(),
    }
}
