//! Tests for booking collision detection.

use sitter_engine::collision::{ensure_guardian_free, ensure_owner_free, find_collisions};
use sitter_engine::{has_occupied_collision, Booking, BookingStatus, DateRange, Day, EngineError};

fn day(s: &str) -> Day {
    s.parse().unwrap()
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).unwrap()
}

fn booking(id: &str, start: &str, end: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        owner_id: "o1".to_string(),
        guardian_id: "g1".to_string(),
        pet_id: Some("p1".to_string()),
        start: day(start),
        end: day(end),
        status,
        pet_count: None,
        deposit_paid: false,
    }
}

#[test]
fn overlapping_occupying_booking_is_a_collision() {
    let bookings = vec![booking("b1", "2025-10-01", "2025-10-05", BookingStatus::Accepted)];
    let collisions = find_collisions(&bookings, &range("2025-10-04", "2025-10-08"));

    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].booking.id, "b1");
    assert_eq!(collisions[0].overlap_days, 1);
}

#[test]
fn back_to_back_booking_is_not_a_collision() {
    let bookings = vec![booking("b1", "2025-10-01", "2025-10-05", BookingStatus::Confirmed)];
    assert!(!has_occupied_collision(&bookings, &range("2025-10-05", "2025-10-10")));
    assert!(!has_occupied_collision(&bookings, &range("2025-09-28", "2025-10-01")));
}

#[test]
fn non_occupying_statuses_never_collide() {
    let bookings = vec![
        booking("b1", "2025-10-01", "2025-10-05", BookingStatus::Requested),
        booking("b2", "2025-10-01", "2025-10-05", BookingStatus::Rejected),
        booking("b3", "2025-10-01", "2025-10-05", BookingStatus::Cancelled),
        booking("b4", "2025-10-01", "2025-10-05", BookingStatus::Completed),
    ];
    assert!(find_collisions(&bookings, &range("2025-10-02", "2025-10-03")).is_empty());
}

#[test]
fn in_progress_booking_collides() {
    let bookings = vec![booking("b1", "2025-10-01", "2025-10-05", BookingStatus::InProgress)];
    assert!(has_occupied_collision(&bookings, &range("2025-10-02", "2025-10-03")));
}

#[test]
fn all_collisions_are_reported_with_overlap_length() {
    let bookings = vec![
        booking("b1", "2025-10-01", "2025-10-05", BookingStatus::Accepted),
        booking("b2", "2025-10-08", "2025-10-20", BookingStatus::Confirmed),
        booking("b3", "2025-10-25", "2025-10-28", BookingStatus::Confirmed),
    ];
    let collisions = find_collisions(&bookings, &range("2025-10-03", "2025-10-10"));

    assert_eq!(collisions.len(), 2);
    assert_eq!(collisions[0].overlap_days, 2);
    assert_eq!(collisions[1].overlap_days, 2);
}

#[test]
fn malformed_booking_range_is_skipped() {
    let bookings = vec![booking("b1", "2025-10-05", "2025-10-01", BookingStatus::Accepted)];
    assert!(!has_occupied_collision(&bookings, &range("2025-10-01", "2025-10-10")));
}

#[test]
fn empty_booking_list_has_no_collisions() {
    let bookings: Vec<Booking> = Vec::new();
    assert!(find_collisions(&bookings, &range("2025-10-01", "2025-10-02")).is_empty());
}

#[test]
fn guardian_and_owner_guards_report_distinct_errors() {
    let bookings = vec![booking("b1", "2025-10-01", "2025-10-05", BookingStatus::Accepted)];
    let requested = range("2025-10-03", "2025-10-06");

    assert_eq!(
        ensure_guardian_free(&bookings, &requested),
        Err(EngineError::GuardianCollision {
            start: day("2025-10-03"),
            end: day("2025-10-06"),
        })
    );
    assert_eq!(
        ensure_owner_free(&bookings, &requested),
        Err(EngineError::OwnerOverlap {
            start: day("2025-10-03"),
            end: day("2025-10-06"),
        })
    );
    assert_eq!(ensure_guardian_free(&bookings, &range("2025-10-05", "2025-10-06")), Ok(()));
}
