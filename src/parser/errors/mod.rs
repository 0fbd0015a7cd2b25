//! Schema error handling module
//!
//! This module provides error handling for the schema parser and resolver:
//! - Categorized error codes for filtering and documentation
//! - flatc-compatible rendering (`file:line: col: error: message`)
//! - Suggestions/hints for common mistakes

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::SchemaError;
