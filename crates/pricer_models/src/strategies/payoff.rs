//! Single-leg profit and loss at expiry.

use super::error::StrategyError;
use super::leg::Leg;

/// Profit or loss of one leg, per share and in total.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptionPayoff {
    /// `sign · (terminal value per share - premium)`
    pub profit_loss_per_share: f64,
    /// Per-share figure times the leg's scale.
    pub profit_loss_total: f64,
}

/// Computes the profit or loss of a leg if the underlying ends at `underlying`.
///
/// For options the per-share figure is `sign · (max(U - K, 0) - premium)`
/// (calls) or `sign · (max(K - U, 0) - premium)` (puts), with sign +1 long
/// and -1 short. The total multiplies by contract size and position size.
///
/// # Errors
/// `StrategyError` if the leg fails validation or `underlying` is negative
/// or not finite.
///
/// # Examples
/// ```
/// use pricer_models::strategies::{option_payoff, Direction, Leg};
///
/// let leg = Leg::call(Direction::Long, 100.0, 3.0);
/// let pl = option_payoff(&leg, 110.0).unwrap();
/// assert_eq!(pl.profit_loss_per_share, 7.0);
/// assert_eq!(pl.profit_loss_total, 700.0);
/// ```
pub fn option_payoff(leg: &Leg, underlying: f64) -> Result<OptionPayoff, StrategyError> {
    leg.validate()?;
    check_underlying(underlying)?;

    let per_share =
        leg.direction().sign() * (leg.terminal_value_per_share(underlying) - leg.premium());
    Ok(OptionPayoff {
        profit_loss_per_share: per_share,
        profit_loss_total: per_share * leg.scale(),
    })
}

pub(crate) fn check_underlying(underlying: f64) -> Result<(), StrategyError> {
    if !underlying.is_finite() || underlying < 0.0 {
        return Err(StrategyError::InvalidUnderlying { price: underlying });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::Direction;
    use approx::assert_relative_eq;

    #[test]
    fn test_long_call() {
        let leg = Leg::call(Direction::Long, 100.0, 5.0);
        let pl = option_payoff(&leg, 120.0).unwrap();
        assert_eq!(pl.profit_loss_per_share, 15.0);
        assert_eq!(pl.profit_loss_total, 1500.0);

        let pl = option_payoff(&leg, 90.0).unwrap();
        assert_eq!(pl.profit_loss_per_share, -5.0);
    }

    #[test]
    fn test_short_put_mirrors_long_put() {
        let long = Leg::put(Direction::Long, 100.0, 4.0).with_position_size(2.0);
        let short = Leg::put(Direction::Short, 100.0, 4.0).with_position_size(2.0);
        for underlying in [0.0, 80.0, 96.0, 100.0, 130.0] {
            let l = option_payoff(&long, underlying).unwrap();
            let s = option_payoff(&short, underlying).unwrap();
            assert_relative_eq!(l.profit_loss_total, -s.profit_loss_total);
        }
        let s = option_payoff(&short, 80.0).unwrap();
        assert_eq!(s.profit_loss_per_share, -16.0);
        assert_eq!(s.profit_loss_total, -3200.0);
    }

    #[test]
    fn test_custom_contract_size() {
        let leg = Leg::call(Direction::Long, 50.0, 1.0).with_contract_size(10.0);
        let pl = option_payoff(&leg, 55.0).unwrap();
        assert_eq!(pl.profit_loss_total, 40.0);
    }

    #[test]
    fn test_stock_leg() {
        let leg = Leg::stock(Direction::Long, 40.0, 100.0);
        let pl = option_payoff(&leg, 45.0).unwrap();
        assert_eq!(pl.profit_loss_per_share, 5.0);
        assert_eq!(pl.profit_loss_total, 500.0);
    }

    #[test]
    fn test_invalid_underlying() {
        let leg = Leg::call(Direction::Long, 100.0, 5.0);
        assert!(matches!(
            option_payoff(&leg, -1.0),
            Err(StrategyError::InvalidUnderlying { .. })
        ));
        assert!(option_payoff(&leg, f64::NAN).is_err());
    }
}
