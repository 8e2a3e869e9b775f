//! Time handling shared by the domain crates
//!
//! Every rule in the system is evaluated against an explicit "now" so that
//! results are reproducible. This module provides:
//! - A `Clock` abstraction with system and fixed implementations
//! - Whole-day arithmetic used by reminder rules ("ends in N days")
//! - Minute truncation for timestamps that must stay stable across reads

use chrono::{DateTime, Duration, DurationRound, Utc};
use thiserror::Error;

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant, for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },
}

/// Checks that an optional end lies strictly after the start
pub fn ensure_ordered(
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
) -> Result<(), TemporalError> {
    match end {
        Some(end) if start >= end => Err(TemporalError::InvalidPeriod {
            start: start.to_string(),
            end: end.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Truncates a timestamp to the start of its minute
pub fn truncate_to_minute(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp
        .duration_trunc(Duration::minutes(1))
        .unwrap_or(timestamp)
}

/// Number of whole days from `from` to `to` (negative when `to` is earlier)
pub fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_days()
}

/// Days left until `target`, counting a started day as a whole one
///
/// `target` 9 days and 23 hours ahead gives 10; zero or negative spans give
/// 0. Backward-looking counts ("N days ago") use [`whole_days_between`].
pub fn days_until(now: DateTime<Utc>, target: DateTime<Utc>) -> i64 {
    let span = target - now;
    if span <= Duration::zero() {
        return 0;
    }
    let days = span.num_days();
    if span > Duration::days(days) {
        days + 1
    } else {
        days
    }
}

/// True when `timestamp` lies in `[now, now + days]`
pub fn is_within_next_days(timestamp: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    timestamp >= now && timestamp - now <= Duration::days(days)
}

/// True when `timestamp` lies in `[now - days, now]`
pub fn is_within_past_days(timestamp: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    timestamp <= now && now - timestamp <= Duration::days(days)
}

/// True when `timestamp` is strictly more than `days` days before `now`
pub fn is_older_than_days(timestamp: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    now - timestamp > Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_truncate_to_minute() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 10, 14, 27, 59).unwrap()
            + Duration::milliseconds(750);
        let truncated = truncate_to_minute(ts);

        assert_eq!(truncated.minute(), 27);
        assert_eq!(truncated.second(), 0);
        assert_eq!(truncated.nanosecond(), 0);
    }

    #[test]
    fn test_whole_days_between_truncates_partial_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let later = now + Duration::days(3) + Duration::hours(20);

        assert_eq!(whole_days_between(now, later), 3);
        assert_eq!(whole_days_between(later, now), -3);
    }

    #[test]
    fn test_days_until_rounds_partial_days_up() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();

        assert_eq!(days_until(now, now + Duration::days(10) - Duration::minutes(1)), 10);
        assert_eq!(days_until(now, now + Duration::days(10)), 10);
        assert_eq!(days_until(now, now + Duration::hours(1)), 1);
        assert_eq!(days_until(now, now), 0);
        assert_eq!(days_until(now, now - Duration::days(2)), 0);
    }

    #[test]
    fn test_fixed_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
