//! # Pricer Models (L2: Business Logic)
//!
//! Vanilla option valuation and position profit/loss.
//!
//! This crate provides:
//! - Contract definitions (`ContractSpec`, payoff type, exercise style)
//! - Closed-form Black-Scholes pricing and the standard normal distribution
//! - Recombining binomial lattices (Cox-Ross-Rubinstein, Jarrow-Rudd,
//!   Leisen-Reimer) with European and American backward induction
//! - An engine facade returning the price together with the full trees
//! - Payoff and multi-leg strategy aggregation
//!
//! ## Design Principles
//!
//! - **Enum-based models** for static dispatch
//! - **Arena-backed trees** built once and never mutated afterwards
//! - **Builder pattern** for ergonomic API with sensible defaults
//!
//! ## Quick Start
//!
//! ```
//! use pricer_models::engine::{price_closed_form, price_lattice};
//! use pricer_models::instruments::{ContractSpec, ExerciseStyle, PayoffType};
//! use pricer_models::lattice::LatticeModel;
//!
//! let contract = ContractSpec::builder()
//!     .payoff(PayoffType::Call)
//!     .underlying_price(100.0)
//!     .strike(100.0)
//!     .volatility(0.35)
//!     .risk_free_rate(0.02)
//!     .dividend_yield(0.03)
//!     .time_days(21.0)
//!     .steps(7)
//!     .exercise(ExerciseStyle::American)
//!     .build()
//!     .unwrap();
//!
//! let lattice = price_lattice(&contract, LatticeModel::CoxRossRubinstein).unwrap();
//! assert!((lattice.price - 3.4417669).abs() < 1e-6);
//!
//! let european = contract.with_exercise(ExerciseStyle::European);
//! let closed = price_closed_form(&european).unwrap();
//! assert!((closed.price - 3.3147590).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod engine;
pub mod instruments;
pub mod lattice;
pub mod strategies;
