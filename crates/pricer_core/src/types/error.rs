//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `TimeError`: Errors from day-count and maturity conversions

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Every domain error in the
/// workspace converts into this type at the crate boundary.
///
/// # Variants
/// - `InvalidInput`: Malformed or out-of-domain contract data
/// - `NumericalInstability`: Computation produced a non-finite value
/// - `ModelFailure`: Model assumptions violated
/// - `UnsupportedInstrument`: Instrument type not supported by model
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("steps must be odd".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: steps must be odd");
/// assert_eq!(err.kind(), "invalid_input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),

    /// Model failed to produce valid result
    ModelFailure(String),

    /// Instrument type not supported
    UnsupportedInstrument(String),
}

impl PricingError {
    /// Stable machine-readable identifier of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::InvalidInput(_) => "invalid_input",
            PricingError::NumericalInstability(_) => "numerical_instability",
            PricingError::ModelFailure(_) => "model_failure",
            PricingError::UnsupportedInstrument(_) => "unsupported_instrument",
        }
    }

    /// The descriptive message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            PricingError::InvalidInput(msg)
            | PricingError::NumericalInstability(msg)
            | PricingError::ModelFailure(msg)
            | PricingError::UnsupportedInstrument(msg) => msg,
        }
    }

    /// Returns whether this error stems from caller-supplied data.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            PricingError::ModelFailure(msg) => write!(f, "Model failure: {}", msg),
            PricingError::UnsupportedInstrument(msg) => {
                write!(f, "Unsupported instrument: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Time conversion errors.
///
/// # Examples
/// ```
/// use pricer_core::types::TimeError;
///
/// let err = TimeError::InvalidDayCount { days: -3.0 };
/// assert_eq!(format!("{}", err), "Invalid day count: -3 days");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// Day count is negative or not finite.
    #[error("Invalid day count: {days} days")]
    InvalidDayCount {
        /// The rejected day count
        days: f64,
    },

    /// Unknown day-count convention name.
    #[error("Unknown day count convention: {0}")]
    UnknownConvention(String),
}

impl From<TimeError> for PricingError {
    fn from(err: TimeError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
