//! Instrument error types.
//!
//! This module provides structured error handling for contract
//! construction and validation.

use pricer_core::types::{PricingError, TimeError};
use thiserror::Error;

/// Instrument-related errors.
///
/// Every variant describes caller-supplied data that cannot be priced, so
/// all of them surface as [`PricingError::InvalidInput`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid underlying price (non-positive).
    #[error("Invalid underlying price: S = {price}")]
    InvalidUnderlying {
        /// The invalid underlying price
        price: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid expiry time (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid lattice step count.
    #[error("Invalid step count: {steps} (must be at least 1)")]
    InvalidSteps {
        /// The rejected step count
        steps: usize,
    },

    /// Option type other than call or put.
    #[error("Unsupported option type: {value}")]
    UnsupportedOptionType {
        /// The rejected option type label
        value: String,
    },

    /// Exercise style other than European or American.
    #[error("Unsupported exercise style: {value}")]
    UnsupportedExerciseStyle {
        /// The rejected exercise style label
        value: String,
    },

    /// Required contract field was never set.
    #[error("Missing required field: {name}")]
    MissingField {
        /// Name of the missing field
        name: &'static str,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },

    /// Day-count conversion failed.
    #[error(transparent)]
    Time(#[from] TimeError),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
