//! Guards run before a booking request is created or accepted.
//!
//! The checks run in a fixed order and stop at the first failure, so the
//! caller always gets the specific rule that refused the booking:
//!
//! 1. the snapshot belongs to the requested guardian
//! 2. the range is present and `start < end`
//! 3. the start day is not in the past
//! 4. the owner has no occupying booking overlapping the range
//! 5. the guardian has no occupying booking overlapping the range
//! 6. the guardian's free capacity covers every day of the range
//!
//! These are checks against a snapshot. Two requests evaluated against the same
//! snapshot can both pass; nothing here reserves capacity.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::collision::{ensure_guardian_free, ensure_owner_free};
use crate::config::EngineConfig;
use crate::coverage::ensure_coverage;
use crate::day::Day;
use crate::error::{EngineError, Result};
use crate::model::Booking;
use crate::range::DateRange;
use crate::snapshot::GuardianSnapshot;

/// An owner's request to book a guardian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub guardian_id: String,
    pub owner_id: String,
    #[serde(default)]
    pub start: Option<Day>,
    #[serde(default)]
    pub end: Option<Day>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_count: Option<u32>,
}

/// Price breakdown for a request that passed every guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub guardian_id: String,
    pub owner_id: String,
    pub start: Day,
    pub end: Day,
    pub nights: i64,
    pub pet_count: u32,
    pub price_per_night: u64,
    pub total_price: u64,
}

/// Run all request guards and price the stay.
///
/// `owner_bookings` are the requesting owner's bookings across all guardians.
///
/// # Errors
/// Returns the `EngineError` of the first guard that fails.
pub fn check_request<'a, I>(
    request: &BookingRequest,
    guardian: &GuardianSnapshot,
    owner_bookings: I,
    price_per_night: u64,
    today: Day,
    config: &EngineConfig,
) -> Result<Quote>
where
    I: IntoIterator<Item = &'a Booking>,
{
    let outcome = evaluate(request, guardian, owner_bookings, price_per_night, today, config);
    match &outcome {
        Ok(quote) => info!(
            guardian = %request.guardian_id,
            owner = %request.owner_id,
            nights = quote.nights,
            total = quote.total_price,
            "booking request passed"
        ),
        Err(err) => warn!(
            guardian = %request.guardian_id,
            owner = %request.owner_id,
            error = %err,
            "booking request refused"
        ),
    }
    outcome
}

fn evaluate<'a, I>(
    request: &BookingRequest,
    guardian: &GuardianSnapshot,
    owner_bookings: I,
    price_per_night: u64,
    today: Day,
    config: &EngineConfig,
) -> Result<Quote>
where
    I: IntoIterator<Item = &'a Booking>,
{
    ensure_same_guardian(&request.guardian_id, guardian)?;

    let (Some(start), Some(end)) = (request.start, request.end) else {
        return Err(EngineError::InvalidRange);
    };
    let range = DateRange::new(start, end)?;

    if config.reject_past_dates && range.start() < today {
        return Err(EngineError::PastDate(range.start()));
    }

    ensure_owner_free(owner_bookings, &range)?;
    ensure_guardian_free(&guardian.bookings, &range)?;

    let pet_count = request
        .pet_count
        .unwrap_or(config.default_pet_count)
        .max(1);
    ensure_coverage(guardian, &range, pet_count)?;

    let nights = range.nights().max(1);
    Ok(Quote {
        guardian_id: request.guardian_id.clone(),
        owner_id: request.owner_id.clone(),
        start: range.start(),
        end: range.end(),
        nights,
        pet_count,
        price_per_night,
        total_price: price_per_night.saturating_mul(nights as u64),
    })
}

/// Check that a guardian can accept `booking` given their other bookings.
///
/// The booking itself is left out of the snapshot before checking, so it never
/// collides with itself.
///
/// # Errors
/// `EngineError::UnknownGuardian` when the snapshot is another guardian's,
/// then `EngineError::InvalidRange`, `EngineError::GuardianCollision` or
/// `EngineError::InsufficientCoverage`.
pub fn check_acceptance(booking: &Booking, guardian: &GuardianSnapshot) -> Result<()> {
    ensure_same_guardian(&booking.guardian_id, guardian)?;
    let range = booking.range().ok_or(EngineError::InvalidRange)?;

    let others = GuardianSnapshot {
        bookings: guardian
            .bookings
            .iter()
            .filter(|b| b.id != booking.id)
            .cloned()
            .collect(),
        ..guardian.clone()
    };

    ensure_guardian_free(&others.bookings, &range)?;
    ensure_coverage(&others, &range, booking.units())
}

fn ensure_same_guardian(guardian_id: &str, snapshot: &GuardianSnapshot) -> Result<()> {
    if snapshot.guardian_id != guardian_id {
        return Err(EngineError::UnknownGuardian(guardian_id.to_string()));
    }
    Ok(())
}
