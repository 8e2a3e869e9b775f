//! Unit tests for the Temporal module
//!
//! Tests cover period ordering, minute truncation and the day-window
//! helpers the reminder rules are built on.

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use core_kernel::temporal::{
    ensure_ordered, is_older_than_days, is_within_next_days, is_within_past_days,
    truncate_to_minute, whole_days_between, TemporalError,
};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

mod ordering {
    use super::*;

    #[test]
    fn test_open_ended_period_is_valid() {
        assert!(ensure_ordered(now(), None).is_ok());
    }

    #[test]
    fn test_end_after_start_is_valid() {
        assert!(ensure_ordered(now(), Some(now() + Duration::days(365))).is_ok());
    }

    #[test]
    fn test_end_equal_to_start_is_rejected() {
        let result = ensure_ordered(now(), Some(now()));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let result = ensure_ordered(now(), Some(now() - Duration::days(1)));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }
}

mod windows {
    use super::*;

    #[test]
    fn test_within_next_days_includes_boundaries() {
        assert!(is_within_next_days(now(), now(), 7));
        assert!(is_within_next_days(now() + Duration::days(7), now(), 7));
        assert!(!is_within_next_days(now() + Duration::days(7) + Duration::seconds(1), now(), 7));
    }

    #[test]
    fn test_within_next_days_excludes_past() {
        assert!(!is_within_next_days(now() - Duration::seconds(1), now(), 7));
    }

    #[test]
    fn test_within_past_days() {
        assert!(is_within_past_days(now() - Duration::days(3), now(), 7));
        assert!(!is_within_past_days(now() - Duration::days(8), now(), 7));
        assert!(!is_within_past_days(now() + Duration::days(1), now(), 7));
    }

    #[test]
    fn test_older_than_is_strict() {
        assert!(!is_older_than_days(now() - Duration::days(7), now(), 7));
        assert!(is_older_than_days(now() - Duration::days(7) - Duration::minutes(1), now(), 7));
    }

    #[test]
    fn test_whole_days_between() {
        assert_eq!(whole_days_between(now(), now() + Duration::days(10)), 10);
        assert_eq!(whole_days_between(now(), now() - Duration::days(2)), -2);
        assert_eq!(whole_days_between(now(), now() + Duration::hours(23)), 0);
    }
}

proptest! {
    #[test]
    fn prop_truncation_is_idempotent_and_not_later(offset_ms in 0i64..10_000_000_000i64) {
        let ts = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() + Duration::milliseconds(offset_ms);
        let truncated = truncate_to_minute(ts);

        prop_assert!(truncated <= ts);
        prop_assert!(ts - truncated < Duration::minutes(1));
        prop_assert_eq!(truncated.second(), 0);
        prop_assert_eq!(truncate_to_minute(truncated), truncated);
    }

    #[test]
    fn prop_next_and_past_windows_are_disjoint_except_now(offset_secs in -2_000_000i64..2_000_000i64) {
        let ts = now() + Duration::seconds(offset_secs);
        let next = is_within_next_days(ts, now(), 7);
        let past = is_within_past_days(ts, now(), 7);

        if offset_secs != 0 {
            prop_assert!(!(next && past));
        }
    }
}
