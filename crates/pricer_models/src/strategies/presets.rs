//! Named multi-leg strategies assembled from flat quote sets.

use std::fmt;
use std::str::FromStr;

use super::error::StrategyError;
use super::leg::{Direction, Leg, DEFAULT_CONTRACT_SIZE, DEFAULT_POSITION_SIZE};
use super::report::{evaluate_strategy, StrategyReport};
use crate::instruments::PayoffType;

/// Strikes, premiums and sizes a named strategy draws its legs from.
///
/// Each strategy reads only the fields it needs; the rest are ignored.
/// Single-option strategies read `strike_price`/`initial_price`, the rest
/// read the per-side `long_put_*`, `short_put_*`, `long_call_*` and
/// `short_call_*` fields. Stock legs read `stock_initial_price` and
/// `share_size`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct StrategyQuotes {
    /// Strike of a single-option strategy.
    pub strike_price: Option<f64>,
    /// Premium of a single-option strategy.
    pub initial_price: Option<f64>,
    /// Long put strike.
    pub long_put_strike_price: Option<f64>,
    /// Long put premium.
    pub long_put_premium_price: Option<f64>,
    /// Short put strike.
    pub short_put_strike_price: Option<f64>,
    /// Short put premium.
    pub short_put_premium_price: Option<f64>,
    /// Long call strike.
    pub long_call_strike_price: Option<f64>,
    /// Long call premium.
    pub long_call_premium_price: Option<f64>,
    /// Short call strike.
    pub short_call_strike_price: Option<f64>,
    /// Short call premium.
    pub short_call_premium_price: Option<f64>,
    /// Purchase price per share of the stock leg.
    pub stock_initial_price: Option<f64>,
    /// Shares held in the stock leg.
    pub share_size: Option<f64>,
    /// Shares per option contract (default 100).
    pub contract_size: Option<f64>,
    /// Contracts per option leg (default 1).
    #[cfg_attr(
        feature = "serde",
        serde(alias = "positionSizeEachOptionType", alias = "positionSizeEachDirection")
    )]
    pub position_size: Option<f64>,
}

fn require(value: Option<f64>, name: &'static str) -> Result<f64, StrategyError> {
    value.ok_or(StrategyError::MissingQuote { name })
}

impl StrategyQuotes {
    fn sized(&self, leg: Leg) -> Leg {
        leg.with_contract_size(self.contract_size.unwrap_or(DEFAULT_CONTRACT_SIZE))
            .with_position_size(self.position_size.unwrap_or(DEFAULT_POSITION_SIZE))
    }

    fn single(&self, payoff: PayoffType) -> Result<Leg, StrategyError> {
        let strike = require(self.strike_price, "strikePrice")?;
        let premium = require(self.initial_price, "initialPrice")?;
        Ok(self.sized(Leg::option(Direction::Long, payoff, strike, premium)))
    }

    fn side(&self, direction: Direction, payoff: PayoffType) -> Result<Leg, StrategyError> {
        let (strike, premium) = match (direction, payoff) {
            (Direction::Long, PayoffType::Put) => (
                require(self.long_put_strike_price, "longPutStrikePrice")?,
                require(self.long_put_premium_price, "longPutPremiumPrice")?,
            ),
            (Direction::Short, PayoffType::Put) => (
                require(self.short_put_strike_price, "shortPutStrikePrice")?,
                require(self.short_put_premium_price, "shortPutPremiumPrice")?,
            ),
            (Direction::Long, PayoffType::Call) => (
                require(self.long_call_strike_price, "longCallStrikePrice")?,
                require(self.long_call_premium_price, "longCallPremiumPrice")?,
            ),
            (Direction::Short, PayoffType::Call) => (
                require(self.short_call_strike_price, "shortCallStrikePrice")?,
                require(self.short_call_premium_price, "shortCallPremiumPrice")?,
            ),
        };
        Ok(self.sized(Leg::option(direction, payoff, strike, premium)))
    }

    fn stock(&self) -> Result<Leg, StrategyError> {
        Ok(Leg::stock(
            Direction::Long,
            require(self.stock_initial_price, "stockInitialPrice")?,
            require(self.share_size, "shareSize")?,
        ))
    }
}

/// Named strategies.
///
/// # Examples
/// ```
/// use pricer_models::strategies::{StrategyKind, StrategyQuotes};
///
/// let kind: StrategyKind = "bull-call-spread".parse().unwrap();
/// let quotes = StrategyQuotes {
///     long_call_strike_price: Some(100.0),
///     long_call_premium_price: Some(4.0),
///     short_call_strike_price: Some(110.0),
///     short_call_premium_price: Some(1.5),
///     ..Default::default()
/// };
/// let report = kind.evaluate(&quotes, 120.0).unwrap();
/// assert_eq!(report.profit_loss, 750.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrategyKind {
    /// One long call.
    LongCall,
    /// One long put.
    LongPut,
    /// Long put and long call, usually at one strike.
    LongStraddle,
    /// Short put and short call, usually at one strike.
    ShortStraddle,
    /// Long put below a long call.
    LongStrangle,
    /// Short put below a short call.
    ShortStrangle,
    /// Long call below a short call.
    BullCallSpread,
    /// Long put below a short put.
    BullPutSpread,
    /// Short put below a long put.
    BearPutSpread,
    /// Long put < short put < short call < long call.
    IronCondor,
    /// Long put < short put = short call < long call.
    IronButterfly,
    /// Long stock, long put below a short call.
    Collar,
    /// Long stock, short call.
    CoveredCall,
}

impl StrategyKind {
    /// Every named strategy.
    pub const ALL: [StrategyKind; 13] = [
        StrategyKind::LongCall,
        StrategyKind::LongPut,
        StrategyKind::LongStraddle,
        StrategyKind::ShortStraddle,
        StrategyKind::LongStrangle,
        StrategyKind::ShortStrangle,
        StrategyKind::BullCallSpread,
        StrategyKind::BullPutSpread,
        StrategyKind::BearPutSpread,
        StrategyKind::IronCondor,
        StrategyKind::IronButterfly,
        StrategyKind::Collar,
        StrategyKind::CoveredCall,
    ];

    /// Kebab-case name, as used in request paths.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::LongCall => "long-call",
            StrategyKind::LongPut => "long-put",
            StrategyKind::LongStraddle => "long-straddle",
            StrategyKind::ShortStraddle => "short-straddle",
            StrategyKind::LongStrangle => "long-strangle",
            StrategyKind::ShortStrangle => "short-strangle",
            StrategyKind::BullCallSpread => "bull-call-spread",
            StrategyKind::BullPutSpread => "bull-put-spread",
            StrategyKind::BearPutSpread => "bear-put-spread",
            StrategyKind::IronCondor => "iron-condor",
            StrategyKind::IronButterfly => "iron-butterfly",
            StrategyKind::Collar => "collar",
            StrategyKind::CoveredCall => "covered-call",
        }
    }

    /// Builds the strategy's legs from `quotes`.
    ///
    /// Every leg is validated on its own. Strikes are taken as quoted, so a
    /// straddle may mix put and call strikes and a condor's wings may cross.
    ///
    /// # Errors
    /// - `StrategyError::MissingQuote` if a required field is absent
    /// - any leg validation error
    pub fn legs(&self, quotes: &StrategyQuotes) -> Result<Vec<Leg>, StrategyError> {
        use Direction::{Long, Short};
        use PayoffType::{Call, Put};

        let legs = match self {
            StrategyKind::LongCall => vec![quotes.single(Call)?],
            StrategyKind::LongPut => vec![quotes.single(Put)?],
            StrategyKind::LongStraddle => vec![quotes.side(Long, Put)?, quotes.side(Long, Call)?],
            StrategyKind::ShortStraddle => {
                vec![quotes.side(Short, Put)?, quotes.side(Short, Call)?]
            }
            StrategyKind::LongStrangle => vec![quotes.side(Long, Put)?, quotes.side(Long, Call)?],
            StrategyKind::ShortStrangle => {
                vec![quotes.side(Short, Put)?, quotes.side(Short, Call)?]
            }
            StrategyKind::BullCallSpread => {
                vec![quotes.side(Short, Call)?, quotes.side(Long, Call)?]
            }
            StrategyKind::BullPutSpread | StrategyKind::BearPutSpread => {
                vec![quotes.side(Short, Put)?, quotes.side(Long, Put)?]
            }
            StrategyKind::IronCondor | StrategyKind::IronButterfly => vec![
                quotes.side(Long, Put)?,
                quotes.side(Short, Put)?,
                quotes.side(Short, Call)?,
                quotes.side(Long, Call)?,
            ],
            StrategyKind::Collar => vec![
                quotes.stock()?,
                quotes.side(Long, Put)?,
                quotes.side(Short, Call)?,
            ],
            StrategyKind::CoveredCall => vec![quotes.stock()?, quotes.side(Short, Call)?],
        };

        for leg in &legs {
            leg.validate()?;
        }
        Ok(legs)
    }

    /// Builds the legs and evaluates them with the underlying at `underlying`.
    ///
    /// # Errors
    /// Any error from [`StrategyKind::legs`] or [`evaluate_strategy`].
    pub fn evaluate(
        &self,
        quotes: &StrategyQuotes,
        underlying: f64,
    ) -> Result<StrategyReport, StrategyError> {
        evaluate_strategy(self.name(), &self.legs(quotes)?, underlying)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    /// Accepts kebab-case, snake_case and camelCase names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut normalised = String::with_capacity(s.len() + 4);
        for (i, c) in s.trim().chars().enumerate() {
            if c == '_' {
                normalised.push('-');
            } else if c.is_ascii_uppercase() {
                if i > 0 {
                    normalised.push('-');
                }
                normalised.push(c.to_ascii_lowercase());
            } else {
                normalised.push(c);
            }
        }

        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalised)
            .ok_or_else(|| StrategyError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}
