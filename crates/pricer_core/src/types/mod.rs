//! Core error and time types.
//!
//! This module provides:
//! - `time`: Day-count conventions converting calendar days into year fractions
//! - `error`: Structured error types for pricing and time conversions
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`DayCountConvention`], [`time_from_days`], [`DAYS_PER_YEAR`] from `time`
//! - [`PricingError`], [`TimeError`] from `error`

pub mod error;
pub mod time;

pub use error::{PricingError, TimeError};
pub use time::{time_from_days, DayCountConvention, DAYS_PER_YEAR};
