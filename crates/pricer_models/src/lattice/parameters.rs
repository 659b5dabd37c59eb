//! Per-step lattice parameters shared by every parameterization.

use super::error::LatticeError;

/// Derived per-step inputs of a binomial lattice.
///
/// # Invariants
/// - `0 < up_probability < 1`, `down_probability = 1 - up_probability`
/// - `up_factor > down_factor > 0`
/// - `step_discount_factor = exp(-r · step_length)`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LatticeParameters {
    step_length: f64,
    step_discount_factor: f64,
    up_factor: f64,
    down_factor: f64,
    up_probability: f64,
    down_probability: f64,
}

impl LatticeParameters {
    /// Validates and assembles lattice parameters.
    ///
    /// # Errors
    /// - `LatticeError::DegenerateFactors` unless `up > down > 0` (all finite)
    /// - `LatticeError::ProbabilityOutOfRange` unless `0 < up_probability < 1`
    ///
    /// # Examples
    /// ```
    /// use pricer_models::lattice::LatticeParameters;
    ///
    /// let params = LatticeParameters::new(0.1, 0.99, 1.1, 0.9, 0.55).unwrap();
    /// assert!((params.down_probability() - 0.45).abs() < 1e-15);
    ///
    /// assert!(LatticeParameters::new(0.1, 0.99, 1.1, 0.9, 1.2).is_err());
    /// ```
    pub fn new(
        step_length: f64,
        step_discount_factor: f64,
        up_factor: f64,
        down_factor: f64,
        up_probability: f64,
    ) -> Result<Self, LatticeError> {
        if !(up_factor.is_finite() && down_factor.is_finite())
            || down_factor <= 0.0
            || up_factor <= down_factor
        {
            return Err(LatticeError::DegenerateFactors {
                up: up_factor,
                down: down_factor,
            });
        }
        if !(up_probability > 0.0 && up_probability < 1.0) {
            return Err(LatticeError::ProbabilityOutOfRange {
                probability: up_probability,
            });
        }

        Ok(Self {
            step_length,
            step_discount_factor,
            up_factor,
            down_factor,
            up_probability,
            down_probability: 1.0 - up_probability,
        })
    }

    /// Length of one step in years (`T / steps`).
    #[inline]
    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Per-step discount factor `exp(-r · dt)`.
    #[inline]
    pub fn step_discount_factor(&self) -> f64 {
        self.step_discount_factor
    }

    /// Multiplicative up-move.
    #[inline]
    pub fn up_factor(&self) -> f64 {
        self.up_factor
    }

    /// Multiplicative down-move.
    #[inline]
    pub fn down_factor(&self) -> f64 {
        self.down_factor
    }

    /// Risk-neutral probability of an up-move.
    #[inline]
    pub fn up_probability(&self) -> f64 {
        self.up_probability
    }

    /// Risk-neutral probability of a down-move.
    #[inline]
    pub fn down_probability(&self) -> f64 {
        self.down_probability
    }
}
