//! In-memory snapshots of the records the engine reads.
//!
//! [`Store`] mirrors the collections of the mock REST backend. A
//! [`GuardianSnapshot`] holds only one guardian's records, which is what every
//! computation in this crate works on.

use serde::{Deserialize, Serialize};

use crate::availability::{compute_daily_availability, DailyAvailability};
use crate::error::{EngineError, Result};
use crate::model::{AvailabilityBlock, AvailabilityException, Booking};
use crate::range::DateRange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianProfile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Nightly price in minor currency units.
    #[serde(default)]
    pub price_per_night: u64,
}

/// The backend data set: guardians, availability blocks, exceptions and bookings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub guardians: Vec<GuardianProfile>,
    #[serde(default)]
    pub availability: Vec<AvailabilityBlock>,
    #[serde(default)]
    pub availability_exceptions: Vec<AvailabilityException>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl Store {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Look up a guardian profile by id.
    ///
    /// # Errors
    /// Returns `EngineError::UnknownGuardian` if no profile has that id.
    pub fn guardian(&self, guardian_id: &str) -> Result<&GuardianProfile> {
        self.guardians
            .iter()
            .find(|g| g.id == guardian_id)
            .ok_or_else(|| EngineError::UnknownGuardian(guardian_id.to_string()))
    }

    /// Copy out every record that belongs to `guardian_id`.
    pub fn snapshot_for(&self, guardian_id: &str) -> GuardianSnapshot {
        GuardianSnapshot {
            guardian_id: guardian_id.to_string(),
            blocks: self
                .availability
                .iter()
                .filter(|b| b.guardian_id == guardian_id)
                .cloned()
                .collect(),
            exceptions: self
                .availability_exceptions
                .iter()
                .filter(|e| e.guardian_id == guardian_id)
                .cloned()
                .collect(),
            bookings: self
                .bookings
                .iter()
                .filter(|b| b.guardian_id == guardian_id)
                .cloned()
                .collect(),
        }
    }

    /// Bookings placed by `owner_id`, across all guardians.
    pub fn bookings_for_owner<'a>(
        &'a self,
        owner_id: &'a str,
    ) -> impl Iterator<Item = &'a Booking> {
        self.bookings.iter().filter(move |b| b.owner_id == owner_id)
    }
}

/// One guardian's blocks, exceptions and bookings at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianSnapshot {
    pub guardian_id: String,
    #[serde(default)]
    pub blocks: Vec<AvailabilityBlock>,
    #[serde(default)]
    pub exceptions: Vec<AvailabilityException>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl GuardianSnapshot {
    pub fn new(guardian_id: impl Into<String>) -> Self {
        GuardianSnapshot {
            guardian_id: guardian_id.into(),
            ..Default::default()
        }
    }

    pub fn daily_availability(&self, window: &DateRange) -> DailyAvailability {
        compute_daily_availability(self, window)
    }
}
