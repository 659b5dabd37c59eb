//! # pricer_core: Foundation Types for the Option Valuation Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error types: `PricingError`, `TimeError` (`types::error`)
//! - Time conventions: `DayCountConvention`, `time_from_days` (`types::time`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Derived error enums
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{time_from_days, DayCountConvention, PricingError};
//!
//! let t = time_from_days(21.0).unwrap();
//! assert!((t - 21.0 / 365.0).abs() < 1e-15);
//!
//! let yf = DayCountConvention::Actual360.year_fraction_from_days(90.0).unwrap();
//! assert!((yf - 0.25).abs() < 1e-15);
//!
//! let err: PricingError = time_from_days(-1.0).unwrap_err().into();
//! assert!(err.is_invalid_input());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `DayCountConvention`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
