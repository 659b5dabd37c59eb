//! Profit and loss of option positions held to expiry.
//!
//! Pure arithmetic over caller-supplied premiums: single legs, arbitrary
//! ordered leg lists and a set of named strategies (straddles, strangles,
//! spreads, condors, butterflies, collars).

mod error;
mod leg;
mod payoff;
mod presets;
mod report;

pub use error::StrategyError;
pub use leg::{Direction, Leg, LegKind, DEFAULT_CONTRACT_SIZE, DEFAULT_POSITION_SIZE};
pub use payoff::{option_payoff, OptionPayoff};
pub use presets::{StrategyKind, StrategyQuotes};
pub use report::{evaluate_leg, evaluate_strategy, LegOutcome, StrategyReport};
