//! Detect existing bookings that collide with a requested range.
//!
//! Only bookings in an occupying status (accepted, confirmed, in progress) can
//! collide. Adjacent bookings (one ends the day another starts) are NOT
//! collisions.

use crate::error::{EngineError, Result};
use crate::model::Booking;
use crate::range::DateRange;

/// An occupying booking that overlaps the requested range.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision<'a> {
    pub booking: &'a Booking,
    /// Days shared by the booking and the request.
    pub overlap_days: i64,
}

/// Find every occupying booking that overlaps `requested`.
///
/// Bookings with malformed ranges are ignored.
pub fn find_collisions<'a, I>(bookings: I, requested: &DateRange) -> Vec<Collision<'a>>
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings
        .into_iter()
        .filter(|b| b.is_occupying())
        .filter_map(|booking| {
            let shared = booking.range()?.intersect(requested)?;
            Some(Collision {
                booking,
                overlap_days: shared.nights(),
            })
        })
        .collect()
}

/// `true` when any occupying booking overlaps `requested`.
pub fn has_occupied_collision<'a, I>(bookings: I, requested: &DateRange) -> bool
where
    I: IntoIterator<Item = &'a Booking>,
{
    !find_collisions(bookings, requested).is_empty()
}

/// Reject a request that would double-book the guardian.
///
/// # Errors
/// Returns `EngineError::GuardianCollision` naming the requested range.
pub fn ensure_guardian_free<'a, I>(guardian_bookings: I, requested: &DateRange) -> Result<()>
where
    I: IntoIterator<Item = &'a Booking>,
{
    if has_occupied_collision(guardian_bookings, requested) {
        return Err(EngineError::GuardianCollision {
            start: requested.start(),
            end: requested.end(),
        });
    }
    Ok(())
}

/// Reject a request that overlaps one of the owner's own occupying bookings.
///
/// # Errors
/// Returns `EngineError::OwnerOverlap` naming the requested range.
pub fn ensure_owner_free<'a, I>(owner_bookings: I, requested: &DateRange) -> Result<()>
where
    I: IntoIterator<Item = &'a Booking>,
{
    if has_occupied_collision(owner_bookings, requested) {
        return Err(EngineError::OwnerOverlap {
            start: requested.start(),
            end: requested.end(),
        });
    }
    Ok(())
}
