//! Export layer tests
//!
//! Tests for the flat enumeration API over a parsed schema:
//! - End-to-end parse scenarios
//! - Position normalization
//! - Type-name formatting
//! - Include graph queries
//! - String interning

pub mod tests_includes;
pub mod tests_interning;
pub mod tests_positions;
pub mod tests_scenarios;
pub mod tests_type_names;
