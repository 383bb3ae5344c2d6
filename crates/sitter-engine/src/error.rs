//! Error types for sitter-engine operations.

use thiserror::Error;

use crate::day::Day;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid day: {0:?} (expected YYYY-MM-DD)")]
    InvalidDay(String),

    /// Missing start/end, or `start >= end`.
    #[error("Invalid date range: start and end are required and end must be after start")]
    InvalidRange,

    #[error("Cannot book dates in the past ({0})")]
    PastDate(Day),

    #[error("You already have a booking that overlaps {start} - {end}")]
    OwnerOverlap { start: Day, end: Day },

    #[error("The guardian has bookings that overlap {start} - {end}")]
    GuardianCollision { start: Day, end: Day },

    #[error("The guardian is unavailable on {day} ({free} free, {requested} requested)")]
    InsufficientCoverage { day: Day, free: u32, requested: u32 },

    #[error("Availability block overlaps an existing one from {start} to {end}")]
    SlotOverlap { start: Day, end: Day },

    #[error("Unknown guardian: {0}")]
    UnknownGuardian(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
