//! Records consumed from the availability and booking stores.
//!
//! Field names follow the camelCase JSON of the REST backend. Bounds are kept
//! as raw days rather than [`DateRange`] so that a malformed record can be
//! loaded and then skipped, instead of failing the whole payload.

use serde::{Deserialize, Serialize};

use crate::day::Day;
use crate::range::DateRange;

/// How an availability block repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    #[serde(rename = "type")]
    pub kind: RecurrenceType,
    /// Weekdays for `WEEKLY`, numbered 0 (Sunday) to 6 (Saturday). Values
    /// outside that range wrap modulo 7.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub by_weekday: Vec<i32>,
    /// Last day (inclusive) on which the rule can produce capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<Day>,
}

fn default_capacity() -> u32 {
    1
}

/// A guardian's declaration that they accept bookings during `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityBlock {
    pub id: String,
    pub guardian_id: String,
    pub start: Day,
    pub end: Day,
    /// Pets the guardian can take per day covered by this block.
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl AvailabilityBlock {
    pub fn range(&self) -> Option<DateRange> {
        DateRange::new(self.start, self.end).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExceptionKind {
    /// No capacity at all on these days, whatever the blocks say.
    Closed,
    /// At least one unit of capacity on these days.
    Open,
}

/// An override of the block-derived capacity for `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityException {
    pub id: String,
    pub guardian_id: String,
    pub start: Day,
    pub end: Day,
    #[serde(rename = "type")]
    pub kind: ExceptionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AvailabilityException {
    pub fn range(&self) -> Option<DateRange> {
        DateRange::new(self.start, self.end).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Requested,
    Accepted,
    Confirmed,
    InProgress,
    Completed,
    Rejected,
    Cancelled,
}

impl BookingStatus {
    /// Statuses that consume guardian capacity.
    pub const OCCUPYING: [BookingStatus; 3] = [
        BookingStatus::Accepted,
        BookingStatus::Confirmed,
        BookingStatus::InProgress,
    ];

    pub fn is_occupying(self) -> bool {
        Self::OCCUPYING.contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub owner_id: String,
    pub guardian_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<String>,
    pub start: Day,
    pub end: Day,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_count: Option<u32>,
    #[serde(default)]
    pub deposit_paid: bool,
}

impl Booking {
    pub fn range(&self) -> Option<DateRange> {
        DateRange::new(self.start, self.end).ok()
    }

    /// Capacity units this booking uses per day. Missing or zero counts as one pet.
    pub fn units(&self) -> u32 {
        self.pet_count.unwrap_or(1).max(1)
    }

    pub fn is_occupying(&self) -> bool {
        self.status.is_occupying()
    }
}
