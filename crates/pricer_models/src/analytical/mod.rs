//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics with a continuous yield
//! - Standard normal distribution functions
//!
//! ## Design Principles
//!
//! - **Validated construction**: market state is checked once, contract terms per call
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy in both tails

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_cdf_with, norm_pdf};
pub use error::AnalyticalError;
