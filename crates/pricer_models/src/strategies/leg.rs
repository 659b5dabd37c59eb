//! Position legs.

use std::fmt;

use super::error::StrategyError;
use crate::instruments::PayoffType;

/// Default number of shares one option contract represents.
pub const DEFAULT_CONTRACT_SIZE: f64 = 100.0;

/// Default number of contracts held per leg.
pub const DEFAULT_POSITION_SIZE: f64 = 1.0;

#[cfg(feature = "serde")]
fn default_contract_size() -> f64 {
    DEFAULT_CONTRACT_SIZE
}

#[cfg(feature = "serde")]
fn default_position_size() -> f64 {
    DEFAULT_POSITION_SIZE
}

/// Position direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Bought: pays the premium, receives the terminal value.
    #[default]
    Long,
    /// Sold: receives the premium, owes the terminal value.
    Short,
}

impl Direction {
    /// +1 for long, -1 for short.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => f.write_str("long"),
            Direction::Short => f.write_str("short"),
        }
    }
}

/// What a leg holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegKind {
    /// Call option.
    Call,
    /// Put option.
    Put,
    /// Shares of the underlying.
    Stock,
}

impl LegKind {
    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            LegKind::Call => "call",
            LegKind::Put => "put",
            LegKind::Stock => "stock",
        }
    }

    /// Option payoff type, or `None` for stock.
    #[inline]
    pub fn payoff(&self) -> Option<PayoffType> {
        match self {
            LegKind::Call => Some(PayoffType::Call),
            LegKind::Put => Some(PayoffType::Put),
            LegKind::Stock => None,
        }
    }
}

impl From<PayoffType> for LegKind {
    fn from(payoff: PayoffType) -> Self {
        match payoff {
            PayoffType::Call => LegKind::Call,
            PayoffType::Put => LegKind::Put,
        }
    }
}

/// One leg of a position.
///
/// Option legs scale by `contract_size · position_size`; stock legs by
/// `position_size` alone (the share count), with `premium` as the purchase
/// price per share.
///
/// # Examples
/// ```
/// use pricer_models::strategies::{Direction, Leg};
///
/// let leg = Leg::call(Direction::Short, 105.0, 2.5).with_position_size(3.0);
/// assert_eq!(leg.scale(), 300.0);
///
/// let shares = Leg::stock(Direction::Long, 98.0, 200.0);
/// assert_eq!(shares.scale(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Leg {
    #[cfg_attr(feature = "serde", serde(default))]
    direction: Direction,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: LegKind,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    strike: Option<f64>,
    #[cfg_attr(feature = "serde", serde(alias = "initialPrice"))]
    premium: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_position_size", alias = "size", alias = "count")
    )]
    position_size: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_contract_size"))]
    contract_size: f64,
}

impl Leg {
    /// An option leg with default contract (100) and position (1) sizes.
    pub fn option(direction: Direction, payoff: PayoffType, strike: f64, premium: f64) -> Self {
        Self {
            direction,
            kind: payoff.into(),
            strike: Some(strike),
            premium,
            position_size: DEFAULT_POSITION_SIZE,
            contract_size: DEFAULT_CONTRACT_SIZE,
        }
    }

    /// A call leg.
    pub fn call(direction: Direction, strike: f64, premium: f64) -> Self {
        Self::option(direction, PayoffType::Call, strike, premium)
    }

    /// A put leg.
    pub fn put(direction: Direction, strike: f64, premium: f64) -> Self {
        Self::option(direction, PayoffType::Put, strike, premium)
    }

    /// A stock leg of `shares` shares bought or sold at `price`.
    pub fn stock(direction: Direction, price: f64, shares: f64) -> Self {
        Self {
            direction,
            kind: LegKind::Stock,
            strike: None,
            premium: price,
            position_size: shares,
            contract_size: 1.0,
        }
    }

    /// Sets the number of contracts (or shares, for stock).
    pub fn with_position_size(mut self, position_size: f64) -> Self {
        self.position_size = position_size;
        self
    }

    /// Sets the number of shares per option contract.
    pub fn with_contract_size(mut self, contract_size: f64) -> Self {
        self.contract_size = contract_size;
        self
    }

    /// Returns the direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the leg kind.
    #[inline]
    pub fn kind(&self) -> LegKind {
        self.kind
    }

    /// Returns the strike (None for stock).
    #[inline]
    pub fn strike(&self) -> Option<f64> {
        self.strike
    }

    /// Returns the premium, or purchase price for stock.
    #[inline]
    pub fn premium(&self) -> f64 {
        self.premium
    }

    /// Returns the number of contracts, or shares for stock.
    #[inline]
    pub fn position_size(&self) -> f64 {
        self.position_size
    }

    /// Returns the shares per contract.
    #[inline]
    pub fn contract_size(&self) -> f64 {
        self.contract_size
    }

    /// Number of underlying units the leg's per-share figures are multiplied by.
    #[inline]
    pub fn scale(&self) -> f64 {
        match self.kind {
            LegKind::Stock => self.position_size,
            LegKind::Call | LegKind::Put => self.position_size * self.contract_size,
        }
    }

    /// Per-share value at expiry: intrinsic value for options, the price itself for stock.
    #[inline]
    pub fn terminal_value_per_share(&self, underlying: f64) -> f64 {
        match (self.kind.payoff(), self.strike) {
            (Some(payoff), Some(strike)) => payoff.intrinsic(underlying, strike),
            _ => underlying,
        }
    }

    /// Checks strike, premium and sizes.
    ///
    /// # Errors
    /// - `StrategyError::InvalidStrike` for an option leg without a positive finite strike
    /// - `StrategyError::UnexpectedStrike` for a stock leg with a strike
    /// - `StrategyError::InvalidPremium` for a negative or non-finite premium
    /// - `StrategyError::InvalidSize` for non-positive or non-finite sizes
    pub fn validate(&self) -> Result<(), StrategyError> {
        match self.kind {
            LegKind::Stock => {
                if self.strike.is_some() {
                    return Err(StrategyError::UnexpectedStrike);
                }
            }
            LegKind::Call | LegKind::Put => match self.strike {
                Some(strike) if strike.is_finite() && strike > 0.0 => {}
                strike => {
                    return Err(StrategyError::InvalidStrike {
                        kind: self.kind.as_str(),
                        strike,
                    })
                }
            },
        }
        if !self.premium.is_finite() || self.premium < 0.0 {
            return Err(StrategyError::InvalidPremium {
                premium: self.premium,
            });
        }
        if !self.position_size.is_finite() || self.position_size <= 0.0 {
            return Err(StrategyError::InvalidSize {
                name: "position size",
                value: self.position_size,
            });
        }
        if !self.contract_size.is_finite() || self.contract_size <= 0.0 {
            return Err(StrategyError::InvalidSize {
                name: "contract size",
                value: self.contract_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Long.sign(), 1.0);
        assert_eq!(Direction::Short.sign(), -1.0);
        assert_eq!(Direction::default(), Direction::Long);
    }

    #[test]
    fn test_option_leg_defaults() {
        let leg = Leg::put(Direction::Long, 95.0, 1.2);
        assert_eq!(leg.kind(), LegKind::Put);
        assert_eq!(leg.strike(), Some(95.0));
        assert_eq!(leg.contract_size(), DEFAULT_CONTRACT_SIZE);
        assert_eq!(leg.position_size(), DEFAULT_POSITION_SIZE);
        assert_eq!(leg.scale(), 100.0);
    }

    #[test]
    fn test_scale_ignores_contract_size_for_stock() {
        let leg = Leg::stock(Direction::Long, 50.0, 250.0).with_contract_size(100.0);
        assert_eq!(leg.scale(), 250.0);
    }

    #[test]
    fn test_terminal_value_per_share() {
        assert_eq!(Leg::call(Direction::Long, 100.0, 1.0).terminal_value_per_share(112.0), 12.0);
        assert_eq!(Leg::put(Direction::Long, 100.0, 1.0).terminal_value_per_share(112.0), 0.0);
        assert_eq!(Leg::stock(Direction::Long, 90.0, 1.0).terminal_value_per_share(112.0), 112.0);
    }

    #[test]
    fn test_validate() {
        assert!(Leg::call(Direction::Long, 100.0, 2.0).validate().is_ok());
        assert!(Leg::stock(Direction::Short, 100.0, 10.0).validate().is_ok());

        assert!(matches!(
            Leg::call(Direction::Long, 0.0, 2.0).validate(),
            Err(StrategyError::InvalidStrike { kind: "call", .. })
        ));
        assert!(matches!(
            Leg::put(Direction::Long, 100.0, -1.0).validate(),
            Err(StrategyError::InvalidPremium { .. })
        ));
        assert!(matches!(
            Leg::put(Direction::Long, 100.0, 1.0)
                .with_position_size(0.0)
                .validate(),
            Err(StrategyError::InvalidSize { name: "position size", .. })
        ));
        assert!(matches!(
            Leg::put(Direction::Long, 100.0, 1.0)
                .with_contract_size(f64::NAN)
                .validate(),
            Err(StrategyError::InvalidSize { name: "contract size", .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialise_with_defaults_and_aliases() {
        let leg: Leg =
            serde_json::from_str(r#"{"type":"call","strike":100,"initialPrice":2.5}"#).unwrap();
        assert_eq!(leg, Leg::call(Direction::Long, 100.0, 2.5));

        let leg: Leg = serde_json::from_str(
            r#"{"direction":"short","type":"put","strike":90,"premium":1.0,"size":2,"contractSize":10}"#,
        )
        .unwrap();
        assert_eq!(leg.direction(), Direction::Short);
        assert_eq!(leg.scale(), 20.0);

        let stock: Leg =
            serde_json::from_str(r#"{"type":"stock","premium":40,"positionSize":300}"#).unwrap();
        assert_eq!(stock.strike(), None);
        assert_eq!(stock.scale(), 300.0);
        assert!(stock.validate().is_ok());
    }
}
