//! # sitter-engine
//!
//! Day-granularity availability and booking guards for a pet-sitting marketplace.
//!
//! Guardians declare availability blocks (optionally recurring) and closed/open
//! exceptions; owners request bookings. The engine turns a snapshot of those
//! records into per-day capacity, occupancy and free counts, and decides whether
//! a requested stay collides with existing bookings or is covered by free capacity.
//!
//! All ranges are half-open `[start, end)` calendar-day ranges. Back-to-back
//! stays (one ending the day the next begins) never overlap.
//!
//! ## Modules
//!
//! - [`day`] — `Day` calendar-day type (`YYYY-MM-DD`)
//! - [`range`] — compare/add/overlap/cover/enumerate over half-open ranges
//! - [`model`] — availability blocks, exceptions, bookings
//! - [`recurrence`] — expand daily/weekly/monthly blocks into days
//! - [`daily`] — per-day counter map
//! - [`availability`] — capacity, occupancy and free maps for a window
//! - [`collision`] — occupying bookings that overlap a request
//! - [`coverage`] — free capacity over a request, next free span
//! - [`slots`] — overlap/merge rules for editing availability blocks
//! - [`booking`] — request and acceptance guards, pricing
//! - [`snapshot`] — backend data set and per-guardian snapshots
//! - [`cache`] — caller-owned per-guardian snapshot cache
//! - [`config`] — engine tunables
//! - [`error`] — Error types

pub mod availability;
pub mod booking;
pub mod cache;
pub mod collision;
pub mod config;
pub mod coverage;
pub mod daily;
pub mod day;
pub mod error;
pub mod model;
pub mod range;
pub mod recurrence;
pub mod slots;
pub mod snapshot;

pub use availability::{compute_daily_availability, DailyAvailability};
pub use booking::{check_acceptance, check_request, BookingRequest, Quote};
pub use cache::SnapshotCache;
pub use collision::{find_collisions, has_occupied_collision};
pub use config::EngineConfig;
pub use coverage::{has_consecutive_free_days, next_free_span};
pub use daily::DailyMap;
pub use day::Day;
pub use error::EngineError;
pub use model::{
    AvailabilityBlock, AvailabilityException, Booking, BookingStatus, ExceptionKind, Recurrence,
    RecurrenceType,
};
pub use range::DateRange;
pub use snapshot::{GuardianProfile, GuardianSnapshot, Store};
