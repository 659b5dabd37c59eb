//! Multi-leg aggregation.

use super::error::StrategyError;
use super::leg::Leg;
use super::payoff::check_underlying;

/// Cash flows of one leg held to expiry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LegOutcome {
    /// The leg evaluated.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub leg: Leg,
    /// Premium paid (negative) or received (positive), scaled.
    pub initial_cash_flow: f64,
    /// Signed terminal value, scaled.
    pub value: f64,
    /// `value + initial_cash_flow`
    pub profit_loss: f64,
}

/// Evaluates one leg with the underlying at `underlying`.
///
/// - `initial_cash_flow = -sign · premium · scale`
/// - `value = sign · terminal_value_per_share · scale`
/// - `profit_loss = value + initial_cash_flow`
///
/// # Errors
/// `StrategyError` if the leg fails validation or `underlying` is invalid.
pub fn evaluate_leg(leg: &Leg, underlying: f64) -> Result<LegOutcome, StrategyError> {
    leg.validate()?;
    check_underlying(underlying)?;

    let sign = leg.direction().sign();
    let scale = leg.scale();
    let initial_cash_flow = -sign * leg.premium() * scale;
    let value = sign * leg.terminal_value_per_share(underlying) * scale;

    Ok(LegOutcome {
        leg: *leg,
        initial_cash_flow,
        value,
        profit_loss: value + initial_cash_flow,
    })
}

/// Per-leg breakdown and totals of a strategy at expiry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StrategyReport {
    /// Strategy name.
    pub strategy: String,
    /// Underlying price at expiry used for the evaluation.
    pub underlying_price: f64,
    /// Outcomes in leg order.
    pub legs: Vec<LegOutcome>,
    /// Sum of initial cash flows.
    pub initial_cash_flow: f64,
    /// Sum of terminal values.
    pub value: f64,
    /// Sum of profit and loss.
    pub profit_loss: f64,
}

/// Evaluates every leg and sums the results.
///
/// # Errors
/// - `StrategyError::EmptyStrategy` if `legs` is empty
/// - any error from [`evaluate_leg`]
///
/// # Examples
/// ```
/// use pricer_models::strategies::{evaluate_strategy, Direction, Leg};
///
/// let legs = [
///     Leg::put(Direction::Long, 100.0, 3.0),
///     Leg::call(Direction::Long, 100.0, 4.0),
/// ];
/// let report = evaluate_strategy("long-straddle", &legs, 115.0).unwrap();
/// assert_eq!(report.initial_cash_flow, -700.0);
/// assert_eq!(report.value, 1500.0);
/// assert_eq!(report.profit_loss, 800.0);
/// ```
pub fn evaluate_strategy(
    name: impl Into<String>,
    legs: &[Leg],
    underlying: f64,
) -> Result<StrategyReport, StrategyError> {
    if legs.is_empty() {
        return Err(StrategyError::EmptyStrategy);
    }

    let outcomes = legs
        .iter()
        .map(|leg| evaluate_leg(leg, underlying))
        .collect::<Result<Vec<_>, _>>()?;

    let initial_cash_flow = outcomes.iter().map(|o| o.initial_cash_flow).sum();
    let value = outcomes.iter().map(|o| o.value).sum();
    let profit_loss = outcomes.iter().map(|o| o.profit_loss).sum();

    Ok(StrategyReport {
        strategy: name.into(),
        underlying_price: underlying,
        legs: outcomes,
        initial_cash_flow,
        value,
        profit_loss,
    })
}
