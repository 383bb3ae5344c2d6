//! Property-based tests for half-open range utilities using proptest.
//!
//! These check invariants that must hold for *any* valid days, not just the
//! examples in `range_tests.rs`.

use proptest::prelude::*;
use sitter_engine::range::{add_days, covers, days_between, enumerate_days, overlaps};
use sitter_engine::Day;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A day between 2020-01-01 and roughly 2030.
fn arb_day() -> impl Strategy<Value = Day> {
    (0i64..3650).prop_map(|offset| base().add_days(offset))
}

fn base() -> Day {
    Day::from_ymd(2020, 1, 1).unwrap()
}

/// Three ordered days `a <= b <= c`.
fn arb_ordered_triple() -> impl Strategy<Value = (Day, Day, Day)> {
    (arb_day(), 0i64..400, 0i64..400).prop_map(|(a, x, y)| (a, a.add_days(x), a.add_days(x + y)))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn adjacency_is_not_overlap((a, b, c) in arb_ordered_triple()) {
        prop_assert!(!overlaps(a, b, b, c));
    }

    #[test]
    fn single_day_inside_range_overlaps((a, b, c) in arb_ordered_triple()) {
        prop_assume!(b < c);
        prop_assert!(overlaps(a, c, b, add_days(b, 1)));
    }

    #[test]
    fn overlap_is_symmetric(a in arb_day(), la in 1i64..60, b in arb_day(), lb in 1i64..60) {
        let (ae, be) = (a.add_days(la), b.add_days(lb));
        prop_assert_eq!(overlaps(a, ae, b, be), overlaps(b, be, a, ae));
    }

    #[test]
    fn range_covers_itself(s in arb_day(), len in 1i64..365) {
        let e = add_days(s, len);
        prop_assert!(covers(s, e, s, e));
    }

    #[test]
    fn days_between_same_day_is_zero(d in arb_day()) {
        prop_assert_eq!(days_between(d, d), 0);
    }

    #[test]
    fn days_between_inverts_add_days(d in arb_day(), n in 0i64..2000) {
        prop_assert_eq!(days_between(d, add_days(d, n)), n);
    }

    #[test]
    fn add_days_negative_undoes_positive(d in arb_day(), n in -2000i64..2000) {
        prop_assert_eq!(add_days(add_days(d, n), -n), d);
    }

    #[test]
    fn enumerate_days_length_and_endpoints(start in arb_day(), end in arb_day()) {
        let days: Vec<Day> = enumerate_days(start, end).collect();
        prop_assert_eq!(days.len() as i64, days_between(start, end));
        if let (Some(first), Some(last)) = (days.first(), days.last()) {
            prop_assert_eq!(*first, start);
            prop_assert_eq!(*last, add_days(end, -1));
        } else {
            prop_assert!(start >= end);
        }
    }

    #[test]
    fn enumerate_days_is_strictly_ascending(start in arb_day(), len in 0i64..120) {
        let days: Vec<Day> = enumerate_days(start, add_days(start, len)).collect();
        for pair in days.windows(2) {
            prop_assert_eq!(pair[0].succ(), pair[1]);
        }
    }

    #[test]
    fn text_order_matches_day_order(a in arb_day(), b in arb_day()) {
        prop_assert_eq!(a.to_string().cmp(&b.to_string()), a.cmp(&b));
    }
}
