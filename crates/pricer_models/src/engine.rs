//! Valuation entry points.
//!
//! Thin, pure functions tying contract validation, parameter derivation, tree
//! construction and backward induction together. Every call builds its own
//! trees and returns them by value; nothing is cached or shared.

use pricer_core::types::PricingError;

use crate::analytical::{AnalyticalError, BlackScholes};
use crate::instruments::ContractSpec;
use crate::lattice::{
    backward_induction, build_underlying_tree, LatticeModel, LatticeParameters, PriceTree,
};

/// Result of a closed-form valuation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClosedFormValuation {
    /// Option price.
    pub price: f64,
}

/// Result of a lattice valuation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LatticeValuation {
    /// Parameterization used.
    pub model: LatticeModel,
    /// Derived per-step parameters.
    pub parameters: LatticeParameters,
    /// Underlying-price tree.
    pub underlying_tree: PriceTree,
    /// Option-value tree, same shape as `underlying_tree`.
    pub option_tree: PriceTree,
    /// Root of `option_tree`.
    pub price: f64,
}

/// Prices a European option with the Black-Scholes formula.
///
/// The contract's dividend yield is honoured; with zero yield this is the
/// plain Black-Scholes price.
///
/// # Errors
/// - `PricingError::InvalidInput` for non-positive volatility or maturity
/// - `PricingError::UnsupportedInstrument` for American exercise
///
/// # Examples
/// ```
/// use pricer_models::engine::price_closed_form;
/// use pricer_models::instruments::{ContractSpec, PayoffType};
///
/// let contract = ContractSpec::builder()
///     .payoff(PayoffType::Call)
///     .underlying_price(100.0)
///     .strike(100.0)
///     .volatility(0.2)
///     .risk_free_rate(0.05)
///     .time_years(1.0)
///     .build()
///     .unwrap();
///
/// let valuation = price_closed_form(&contract).unwrap();
/// assert!((valuation.price - 10.450583572185565).abs() < 1e-9);
/// ```
pub fn price_closed_form(contract: &ContractSpec) -> Result<ClosedFormValuation, PricingError> {
    if contract.exercise().allows_early_exercise() {
        return Err(AnalyticalError::UnsupportedExerciseStyle {
            style: contract.exercise().to_string(),
        }
        .into());
    }

    let model = BlackScholes::new(
        contract.underlying_price(),
        contract.risk_free_rate(),
        contract.volatility(),
    )?
    .with_dividend_yield(contract.dividend_yield())?;

    let price = model.price(
        contract.payoff(),
        contract.strike(),
        contract.time_to_maturity(),
    )?;

    Ok(ClosedFormValuation { price })
}

/// Derives the lattice parameters `model` would use for `contract`.
///
/// # Errors
/// `PricingError::InvalidInput` for missing or even (Leisen-Reimer) steps
/// and for inputs admitting no risk-neutral probability.
pub fn derive_parameters(
    contract: &ContractSpec,
    model: LatticeModel,
) -> Result<LatticeParameters, PricingError> {
    Ok(model.derive_parameters(contract)?)
}

/// Prices an option on a binomial lattice.
///
/// Returns the full underlying and option trees along with the root price.
///
/// # Errors
/// - `PricingError::InvalidInput` for missing, zero or (Leisen-Reimer) even steps
/// - `PricingError::InvalidInput` if the inputs admit no risk-neutral probability
/// - `PricingError::NumericalInstability` if a node overflows
///
/// # Examples
/// ```
/// use pricer_models::engine::price_lattice;
/// use pricer_models::instruments::{ContractSpec, PayoffType};
/// use pricer_models::lattice::LatticeModel;
///
/// let contract = ContractSpec::builder()
///     .payoff(PayoffType::Put)
///     .underlying_price(100.0)
///     .strike(100.0)
///     .volatility(0.2)
///     .risk_free_rate(0.05)
///     .time_years(1.0)
///     .steps(4)
///     .build()
///     .unwrap();
///
/// let valuation = price_lattice(&contract, LatticeModel::JarrowRudd).unwrap();
/// assert_eq!(valuation.option_tree.num_levels(), 5);
/// assert_eq!(valuation.price, valuation.option_tree.root());
///
/// assert!(price_lattice(&contract, LatticeModel::LeisenReimer).is_err());
/// ```
pub fn price_lattice(
    contract: &ContractSpec,
    model: LatticeModel,
) -> Result<LatticeValuation, PricingError> {
    let parameters = model.derive_parameters(contract)?;
    let steps = contract.require_steps()?;

    let underlying_tree = build_underlying_tree(
        contract.underlying_price(),
        parameters.up_factor(),
        parameters.down_factor(),
        steps,
    )?;
    let option_tree = backward_induction(
        &underlying_tree,
        contract.strike(),
        contract.payoff(),
        contract.exercise(),
        &parameters,
    )?;
    let price = option_tree.root();

    Ok(LatticeValuation {
        model,
        parameters,
        underlying_tree,
        option_tree,
        price,
    })
}
