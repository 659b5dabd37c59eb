//! Day-count conventions for converting calendar days into year fractions.
//!
//! Contract inputs frequently arrive as a number of calendar days to expiry
//! (`timeDays`). The pricing formulas work in years, so every conversion goes
//! through a [`DayCountConvention`].

use std::fmt;
use std::str::FromStr;

use super::error::TimeError;

/// Calendar days per year under Actual/365 Fixed.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `Actual365Fixed`: Actual days / 365 (standard for equity derivatives)
/// - `Actual360`: Actual days / 360 (money market instruments)
///
/// # Usage
///
/// ```
/// use pricer_core::types::time::DayCountConvention;
///
/// let yf = DayCountConvention::Actual365Fixed.year_fraction_from_days(73.0).unwrap();
/// assert!((yf - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ACT/365"))]
    Actual365Fixed,

    /// Actual/360: actual_days / 360.0
    #[cfg_attr(feature = "serde", serde(rename = "ACT/360"))]
    Actual360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Actual365Fixed.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::Actual360.name(), "ACT/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual365Fixed => "ACT/365",
            DayCountConvention::Actual360 => "ACT/360",
        }
    }

    /// Number of days making up one year under this convention.
    #[inline]
    pub fn days_per_year(&self) -> f64 {
        match self {
            DayCountConvention::Actual365Fixed => DAYS_PER_YEAR,
            DayCountConvention::Actual360 => 360.0,
        }
    }

    /// Converts a day count into a year fraction.
    ///
    /// # Errors
    /// `TimeError::InvalidDayCount` if `days` is negative, NaN or infinite.
    pub fn year_fraction_from_days(&self, days: f64) -> Result<f64, TimeError> {
        if !days.is_finite() || days < 0.0 {
            return Err(TimeError::InvalidDayCount { days });
        }
        Ok(days / self.days_per_year())
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACT/365" | "ACT/365F" | "ACTUAL/365" => Ok(DayCountConvention::Actual365Fixed),
            "ACT/360" | "ACTUAL/360" => Ok(DayCountConvention::Actual360),
            _ => Err(TimeError::UnknownConvention(s.to_string())),
        }
    }
}

/// Converts calendar days to years using Actual/365 Fixed.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::time_from_days;
///
/// let t = time_from_days(21.0).unwrap();
/// assert!((t - 21.0 / 365.0).abs() < 1e-15);
/// assert!(time_from_days(-1.0).is_err());
/// ```
pub fn time_from_days(days: f64) -> Result<f64, TimeError> {
    DayCountConvention::Actual365Fixed.year_fraction_from_days(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_act_365() {
        assert_eq!(DayCountConvention::default(), DayCountConvention::Actual365Fixed);
    }

    #[test]
    fn test_year_fraction_from_days() {
        let act365 = DayCountConvention::Actual365Fixed;
        assert_relative_eq!(act365.year_fraction_from_days(365.0).unwrap(), 1.0);
        assert_relative_eq!(act365.year_fraction_from_days(0.0).unwrap(), 0.0);

        let act360 = DayCountConvention::Actual360;
        assert_relative_eq!(act360.year_fraction_from_days(180.0).unwrap(), 0.5);
    }

    #[test]
    fn test_invalid_day_counts_rejected() {
        let act365 = DayCountConvention::Actual365Fixed;
        assert!(matches!(
            act365.year_fraction_from_days(-1.0),
            Err(TimeError::InvalidDayCount { .. })
        ));
        assert!(act365.year_fraction_from_days(f64::NAN).is_err());
        assert!(act365.year_fraction_from_days(f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "act/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual365Fixed
        );
        assert_eq!(
            "ACT/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual360
        );
        assert!("30/360".parse::<DayCountConvention>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(format!("{}", DayCountConvention::Actual360), "ACT/360");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_act360_always_longer_than_act365(days in 0.0..10_000.0_f64) {
                let yf365 = DayCountConvention::Actual365Fixed.year_fraction_from_days(days).unwrap();
                let yf360 = DayCountConvention::Actual360.year_fraction_from_days(days).unwrap();
                prop_assert!(yf360 >= yf365);
            }

            #[test]
            fn test_time_from_days_is_linear(days in 0.0..10_000.0_f64) {
                let t = time_from_days(days).unwrap();
                prop_assert!((t * DAYS_PER_YEAR - days).abs() < 1e-9);
            }
        }
    }
}
