//! Error types for lattice construction and backward induction.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::analytical::AnalyticalError;
use crate::instruments::InstrumentError;

/// Lattice pricing errors.
///
/// # Variants
/// - `InvalidSteps`: Zero step count
/// - `EvenSteps`: Even step count under a model that needs odd steps
/// - `ProbabilityOutOfRange`: Risk-neutral up probability outside (0, 1)
/// - `InversionSaturated`: Leisen-Reimer inversion rounded to 0 or 1
/// - `DegenerateFactors`: Up/down factors that do not straddle the growth rate
/// - `MalformedTree`: Level lengths that are not triangular
/// - `InvalidStrike`: Non-positive strike passed to backward induction
/// - `NonFinite`: A node value overflowed or became NaN
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeError;
/// use pricer_core::types::PricingError;
///
/// let err: PricingError = LatticeError::EvenSteps { steps: 4 }.into();
/// assert_eq!(err, PricingError::InvalidInput("steps must be odd".to_string()));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Step count of zero.
    #[error("steps must be at least 1, got {steps}")]
    InvalidSteps {
        /// The rejected step count
        steps: usize,
    },

    /// Even step count for a model requiring odd steps.
    #[error("steps must be odd")]
    EvenSteps {
        /// The rejected step count
        steps: usize,
    },

    /// Risk-neutral probability outside the open unit interval.
    #[error("up probability {probability} outside (0, 1)")]
    ProbabilityOutOfRange {
        /// The offending probability
        probability: f64,
    },

    /// Peizer-Pratt inversion rounded to 0 or 1, typically for a contract far
    /// in or out of the money on a coarse grid.
    #[error(
        "Peizer-Pratt inversion saturated: h({z}) = {probability} at {steps} steps; \
         increase steps or use another lattice model"
    )]
    InversionSaturated {
        /// Normal quantile passed to the inversion
        z: f64,
        /// Step count used
        steps: usize,
        /// The saturated probability
        probability: f64,
    },

    /// Up and down factors unusable for a recombining tree.
    #[error("degenerate lattice factors: up = {up}, down = {down}")]
    DegenerateFactors {
        /// Up factor
        up: f64,
        /// Down factor
        down: f64,
    },

    /// Tree levels with the wrong number of nodes.
    #[error("malformed tree: {message}")]
    MalformedTree {
        /// Description of the shape violation
        message: String,
    },

    /// Non-positive strike.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The rejected strike
        strike: f64,
    },

    /// Node value overflowed or became NaN.
    #[error("non-finite value at level {level}, node {node}")]
    NonFinite {
        /// Level index
        level: usize,
        /// Node index within the level
        node: usize,
    },

    /// Contract could not supply a required input.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Closed-form helper rejected its inputs.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::Instrument(inner) => inner.into(),
            LatticeError::Analytical(inner) => inner.into(),
            LatticeError::NonFinite { .. } => PricingError::NumericalInstability(err.to_string()),
            LatticeError::InversionSaturated { .. } => PricingError::ModelFailure(err.to_string()),
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
