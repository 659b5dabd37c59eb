//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::time::time_from_days;
    use pricer_core::types::time::DayCountConvention;
    use pricer_core::types::time::DAYS_PER_YEAR;

    let t = time_from_days(DAYS_PER_YEAR).unwrap();
    assert!((t - 1.0).abs() < 1e-15);

    let dcc = DayCountConvention::Actual360;
    assert_eq!(dcc.name(), "ACT/360");
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::error::TimeError;

    let err: PricingError = TimeError::InvalidDayCount { days: -5.0 }.into();
    assert_eq!(err.kind(), "invalid_input");
}

/// Test that re-exports at `types` level match the submodule paths.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{time_from_days, DayCountConvention, PricingError, TimeError};

    let err: Result<f64, TimeError> = time_from_days(f64::NAN);
    let err: PricingError = err.unwrap_err().into();
    assert!(err.message().contains("Invalid day count"));
    assert_eq!(DayCountConvention::default(), DayCountConvention::Actual365Fixed);
}

#[cfg(feature = "serde")]
#[test]
fn test_day_count_serde_names() {
    use pricer_core::types::DayCountConvention;

    let json = serde_json::to_string(&DayCountConvention::Actual365Fixed).unwrap();
    assert_eq!(json, "\"ACT/365\"");
    let parsed: DayCountConvention = serde_json::from_str("\"ACT/360\"").unwrap();
    assert_eq!(parsed, DayCountConvention::Actual360);
}
