//! Contract definitions.
//!
//! This module provides the inputs shared by every pricer:
//! - [`PayoffType`]: call or put
//! - [`ExerciseStyle`]: European or American
//! - [`ContractSpec`]: validated, immutable contract terms and market inputs
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{ContractSpec, PayoffType};
//!
//! let contract = ContractSpec::builder()
//!     .payoff(PayoffType::Call)
//!     .underlying_price(100.0)
//!     .strike(100.0)
//!     .volatility(0.2)
//!     .risk_free_rate(0.05)
//!     .time_years(1.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(contract.payoff().intrinsic(110.0, contract.strike()), 10.0);
//! ```

mod contract;
mod error;
mod exercise;
mod payoff;

pub use contract::{ContractSpec, ContractSpecBuilder};
pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use payoff::PayoffType;
