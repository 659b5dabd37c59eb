//! Error types for payoff and strategy aggregation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Strategy construction and evaluation errors.
///
/// # Examples
/// ```
/// use pricer_models::strategies::StrategyError;
///
/// let err = StrategyError::UnknownStrategy { name: "butterfly-spread".to_string() };
/// assert_eq!(err.to_string(), "Unknown strategy: butterfly-spread");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StrategyError {
    /// Option leg strike missing, non-positive or not finite.
    #[error("Invalid strike for {kind} leg: {strike:?}")]
    InvalidStrike {
        /// Leg kind label
        kind: &'static str,
        /// The rejected strike
        strike: Option<f64>,
    },

    /// Stock leg carrying a strike.
    #[error("Stock leg cannot carry a strike")]
    UnexpectedStrike,

    /// Premium or purchase price negative or not finite.
    #[error("Invalid premium: {premium}")]
    InvalidPremium {
        /// The rejected premium
        premium: f64,
    },

    /// Contract or position size non-positive or not finite.
    #[error("Invalid {name}: {value}")]
    InvalidSize {
        /// Which size field
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Underlying price at expiry negative or not finite.
    #[error("Invalid underlying price: U = {price}")]
    InvalidUnderlying {
        /// The rejected price
        price: f64,
    },

    /// Strategy with no legs.
    #[error("Strategy has no legs")]
    EmptyStrategy,

    /// Quote required by a named strategy but absent from the request.
    #[error("Missing required field: {name}")]
    MissingQuote {
        /// Wire name of the missing field
        name: &'static str,
    },

    /// Unrecognised strategy name.
    #[error("Unknown strategy: {name}")]
    UnknownStrategy {
        /// The rejected name
        name: String,
    },
}

impl From<StrategyError> for PricingError {
    fn from(err: StrategyError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
