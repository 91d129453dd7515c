//! # Config Crate
//!
//! Centralized configuration constants for the trolley preview pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, ROLLER_SEGMENTS, STANDARD_GRAVITY};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1.0e-11;
//! assert!(value.abs() < EPSILON);
//!
//! // Tessellation counts are named per part family
//! assert!(ROLLER_SEGMENTS >= 3);
//!
//! // Physical defaults are spelled out, not buried in call sites
//! assert!(STANDARD_GRAVITY > 9.8);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit Defaults**: Optional spec fields default through named values
//!   passed into the resolver, never through hidden fallbacks
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
