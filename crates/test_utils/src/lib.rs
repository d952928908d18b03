//! Test Utilities Crate
//!
//! Shared test infrastructure for the rider desk test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built riders, policies, and dates
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Assertion helpers for money and rider lists
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
