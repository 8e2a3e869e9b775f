//! Tests for core_kernel error types

use chrono::{Duration, TimeZone, Utc};
use core_kernel::error::{CoreError, PreconditionViolation};
use core_kernel::temporal::{ensure_ordered, TemporalError};

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("tenant email is blank");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "tenant email is blank"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_from_temporal_error() {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let temporal_error = ensure_ordered(start, Some(start - Duration::days(1))).unwrap_err();
    let core_error: CoreError = temporal_error.into();

    assert!(matches!(core_error, CoreError::Temporal(TemporalError::InvalidPeriod { .. })));
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}

#[test]
fn test_precondition_violation_display() {
    let violation = PreconditionViolation::new("single_active_lease", "property PRP-1 has 2 active leases");
    let display = violation.to_string();

    assert!(display.contains("single_active_lease"));
    assert!(display.contains("2 active leases"));
}
