//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! property management test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pinned timestamps, names and ids
//! - `builders`: Builder patterns for properties, leases and damages
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
