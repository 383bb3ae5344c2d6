//! Tests for coverage checks and free-span search.

use sitter_engine::coverage::{ensure_coverage, find_next_free_span, first_uncovered_day};
use sitter_engine::{
    has_consecutive_free_days, next_free_span, AvailabilityBlock, Booking, BookingStatus,
    DailyMap, DateRange, Day, EngineError, GuardianSnapshot,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn day(s: &str) -> Day {
    s.parse().unwrap()
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).unwrap()
}

fn free(entries: &[(&str, u32)]) -> DailyMap {
    entries.iter().map(|(d, v)| (day(d), *v)).collect()
}

/// One block `[2025-11-01, 2025-11-10)` with capacity 1 and one accepted
/// booking `[2025-11-03, 2025-11-05)`.
fn november_guardian() -> GuardianSnapshot {
    GuardianSnapshot {
        guardian_id: "g1".to_string(),
        blocks: vec![AvailabilityBlock {
            id: "a".to_string(),
            guardian_id: "g1".to_string(),
            start: day("2025-11-01"),
            end: day("2025-11-10"),
            capacity: 1,
            recurrence: None,
        }],
        exceptions: vec![],
        bookings: vec![Booking {
            id: "b1".to_string(),
            owner_id: "o1".to_string(),
            guardian_id: "g1".to_string(),
            pet_id: None,
            start: day("2025-11-03"),
            end: day("2025-11-05"),
            status: BookingStatus::Accepted,
            pet_count: None,
            deposit_paid: true,
        }],
    }
}

// ── Coverage against a free map ─────────────────────────────────────────────

#[test]
fn every_day_must_have_enough_free_units() {
    let map = free(&[("2025-11-01", 2), ("2025-11-02", 1), ("2025-11-03", 2)]);

    assert!(has_consecutive_free_days(&map, &range("2025-11-01", "2025-11-04"), 1));
    assert!(!has_consecutive_free_days(&map, &range("2025-11-01", "2025-11-04"), 2));
    assert_eq!(
        first_uncovered_day(&map, &range("2025-11-01", "2025-11-04"), 2),
        Some((day("2025-11-02"), 1))
    );
}

#[test]
fn absent_day_counts_as_zero() {
    let map = free(&[("2025-11-01", 1), ("2025-11-03", 1)]);
    assert_eq!(
        first_uncovered_day(&map, &range("2025-11-01", "2025-11-04"), 1),
        Some((day("2025-11-02"), 0))
    );
}

#[test]
fn zero_pet_count_needs_one_unit() {
    let map = free(&[("2025-11-01", 0)]);
    assert!(!has_consecutive_free_days(&map, &range("2025-11-01", "2025-11-02"), 0));
}

// ── Coverage against a snapshot ─────────────────────────────────────────────

#[test]
fn occupied_day_is_not_covered() {
    let snapshot = november_guardian();
    assert_eq!(
        ensure_coverage(&snapshot, &range("2025-11-03", "2025-11-04"), 1),
        Err(EngineError::InsufficientCoverage {
            day: day("2025-11-03"),
            free: 0,
            requested: 1,
        })
    );
}

#[test]
fn free_days_inside_block_are_covered() {
    let snapshot = november_guardian();
    assert_eq!(ensure_coverage(&snapshot, &range("2025-11-05", "2025-11-07"), 1), Ok(()));
}

#[test]
fn range_running_past_block_is_not_covered() {
    let snapshot = november_guardian();
    let err = ensure_coverage(&snapshot, &range("2025-11-08", "2025-11-12"), 1).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCoverage {
            day: day("2025-11-10"),
            free: 0,
            requested: 1,
        }
    );
}

// ── Next free span ──────────────────────────────────────────────────────────

#[test]
fn next_free_span_returns_first_consecutive_run() {
    let map = free(&[
        ("2025-11-01", 0),
        ("2025-11-02", 1),
        ("2025-11-03", 1),
        ("2025-11-04", 0),
        ("2025-11-05", 1),
    ]);
    let span = next_free_span(&map, day("2025-11-01"), 1).unwrap();
    assert_eq!(span, range("2025-11-02", "2025-11-04"));
}

#[test]
fn next_free_span_stops_at_gap_in_days() {
    let map = free(&[("2025-11-02", 1), ("2025-11-03", 1), ("2025-11-06", 1)]);
    let span = next_free_span(&map, day("2025-11-01"), 1).unwrap();
    assert_eq!(span, range("2025-11-02", "2025-11-04"));
}

#[test]
fn next_free_span_skips_days_before_start() {
    let map = free(&[("2025-11-01", 1), ("2025-11-02", 1), ("2025-11-05", 3)]);
    let span = next_free_span(&map, day("2025-11-03"), 1).unwrap();
    assert_eq!(span, range("2025-11-05", "2025-11-06"));
}

#[test]
fn next_free_span_none_when_nothing_qualifies() {
    let map = free(&[("2025-11-01", 1)]);
    assert!(next_free_span(&map, day("2025-11-01"), 2).is_none());
    assert!(next_free_span(&DailyMap::new(), day("2025-11-01"), 1).is_none());
}

#[test]
fn next_free_span_treats_zero_minimum_as_one() {
    let map = free(&[("2025-11-03", 2), ("2025-11-05", 0), ("2025-11-06", 1)]);
    let span = next_free_span(&map, day("2025-11-01"), 0).unwrap();
    assert_eq!(span, range("2025-11-03", "2025-11-04"));
    assert!(next_free_span(&DailyMap::new(), day("2025-11-01"), 0).is_none());
}

#[test]
fn find_next_free_span_scans_horizon() {
    let snapshot = november_guardian();
    assert_eq!(
        find_next_free_span(&snapshot, day("2025-10-20"), 60, 1),
        Some(range("2025-11-01", "2025-11-03"))
    );
    assert_eq!(
        find_next_free_span(&snapshot, day("2025-11-03"), 60, 1),
        Some(range("2025-11-05", "2025-11-10"))
    );
    assert_eq!(find_next_free_span(&snapshot, day("2025-10-01"), 10, 1), None);
}
