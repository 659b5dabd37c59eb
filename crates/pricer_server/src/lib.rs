//! REST API server for the option valuation engine
//!
//! Exposes closed-form and binomial-lattice valuation, single-leg payoffs and
//! multi-leg strategy profit/loss over JSON.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export pricer dependencies for integration
pub use pricer_core;
pub use pricer_models;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
