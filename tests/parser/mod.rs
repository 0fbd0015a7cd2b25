//! Parser layer tests
//!
//! Tests for the bundled schema parser:
//! - Error codes for malformed schemas
//! - Error display format
//! - Grammar coverage for accepted schemas

pub mod tests_error_codes;
pub mod tests_error_display;
pub mod tests_grammar;
