//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_cdf_with`: CDF of a normal with arbitrary mean and standard deviation
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is evaluated through the complementary error function from `statrs`.
//! Absolute error stays around 1e-11 in the body of the distribution and the
//! lower tail keeps its relative precision.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1 - erf(-x / √2)) / 2 = erfc(-x / √2) / 2
///
/// # Accuracy
/// Absolute error below 1e-10 for |x| <= 8 (about 1.4e-11 near |x| = 1).
/// Working through `erfc` avoids the cancellation `1 - erf(..)` suffers in the
/// lower tail.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-10);
/// assert!(norm_cdf(-3.0) < 0.01);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Normal cumulative distribution function with explicit mean and standard deviation.
///
/// Φ(x; μ, σ) = (1 - erf((μ - x) / (√2·σ))) / 2
///
/// A non-positive `std_dev` is treated as a point mass at `mean`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::{norm_cdf, norm_cdf_with};
///
/// let shifted = norm_cdf_with(12.0, 10.0, 2.0);
/// assert!((shifted - norm_cdf(1.0)).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_cdf_with(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return if x >= mean { 1.0 } else { 0.0 };
    }
    0.5 * erfc((mean - x) / (SQRT_2 * std_dev))
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-7);
/// assert!((norm_pdf(1.0) - 0.2419707245).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        let test_values = [-8.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 8.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_abs_diff_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-2.0), 0.022750131948179195, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(3.0), 0.9986501019683699, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_cdf_absolute_error_bound() {
        let references = [
            (-5.0, 2.866515718791939e-7),
            (-1.0, 0.15865525393145707),
            (0.5, 0.6914624612740131),
            (1.0, 0.8413447460685429),
            (2.0, 0.9772498680518208),
            (3.0, 0.9986501019683699),
        ];
        let worst = references
            .iter()
            .map(|&(x, expected)| (norm_cdf(x) - expected).abs())
            .fold(0.0_f64, f64::max);
        // well inside the 1e-9 pricing tolerance
        assert!(worst < 1e-10, "worst absolute error {worst:e}");
    }

    #[test]
    fn test_norm_cdf_lower_tail_precision() {
        // Φ(-8) ≈ 6.22e-16; a naive 1 - erf(..) would round this to zero
        let tail = norm_cdf(-8.0);
        assert!(tail > 0.0);
        assert_relative_eq!(tail, 6.220960574271785e-16, max_relative = 1e-8);
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        let cdf_10 = norm_cdf(10.0);
        assert!(cdf_10 > 0.9999999 && cdf_10 <= 1.0);

        let cdf_neg_10 = norm_cdf(-10.0);
        assert!((0.0..1e-7).contains(&cdf_neg_10));
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_cdf_with_matches_standardised() {
        assert_relative_eq!(norm_cdf_with(0.0, 0.0, 1.0), norm_cdf(0.0));
        assert_relative_eq!(norm_cdf_with(5.0, 3.0, 2.0), norm_cdf(1.0), epsilon = 1e-15);
        assert_relative_eq!(norm_cdf_with(-1.0, 1.0, 0.5), norm_cdf(-4.0), epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_with_degenerate_std_dev() {
        assert_eq!(norm_cdf_with(1.0, 1.0, 0.0), 1.0);
        assert_eq!(norm_cdf_with(0.9, 1.0, 0.0), 0.0);
        assert_eq!(norm_cdf_with(2.0, 1.0, -1.0), 1.0);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(1.0), 0.24197072451914337, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(2.0), 0.05399096651318806, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(-3.0), 0.004431848411938008, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-8);
        }
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn test_cdf_within_unit_interval(x in -40.0..40.0_f64) {
                let p = norm_cdf(x);
                prop_assert!((0.0..=1.0).contains(&p));
            }

            #[test]
            fn test_cdf_reflection(x in -8.0..8.0_f64) {
                prop_assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-14);
            }
        }
    }
}
