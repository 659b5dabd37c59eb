//! Recombining binomial lattices.
//!
//! This module provides:
//! - [`PriceTree`]: arena-backed triangular tree, read-only once built
//! - [`build_underlying_tree`]: underlying-price tree from up/down factors
//! - [`LatticeModel`]: Cox-Ross-Rubinstein, Jarrow-Rudd and Leisen-Reimer
//!   parameterizations behind a single `derive_parameters`
//! - [`backward_induction`]: model-agnostic European/American rollback
//!
//! ## Design Principles
//!
//! - **Enum-based models** for static dispatch
//! - **Model-agnostic induction**: the rollback only sees [`LatticeParameters`]
//! - **O(n²) time and memory** in the step count; bounding `n` is the caller's concern
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{ContractSpec, PayoffType};
//! use pricer_models::lattice::{backward_induction, build_underlying_tree, LatticeModel};
//!
//! let contract = ContractSpec::builder()
//!     .payoff(PayoffType::Call)
//!     .underlying_price(100.0)
//!     .strike(100.0)
//!     .volatility(0.2)
//!     .risk_free_rate(0.05)
//!     .time_years(1.0)
//!     .steps(101)
//!     .build()
//!     .unwrap();
//!
//! let params = LatticeModel::LeisenReimer.derive_parameters(&contract).unwrap();
//! let tree = build_underlying_tree(100.0, params.up_factor(), params.down_factor(), 101).unwrap();
//! let option = backward_induction(&tree, 100.0, contract.payoff(), contract.exercise(), &params)
//!     .unwrap();
//! assert!((option.root() - 10.4506).abs() < 1e-3);
//! ```

mod error;
mod induction;
mod model;
mod parameters;
mod tree;

pub use error::LatticeError;
pub use induction::backward_induction;
pub use model::{peizer_pratt_inversion, LatticeModel};
pub use parameters::LatticeParameters;
pub use tree::{build_underlying_tree, node_count, PriceTree};
