//! Foundation types for the schema introspection layer.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - 0-based line/column positions as exported to callers
//! - [`LineIndex`], [`LineCol`] - byte offset to line/column conversion
//! - [`StringPool`], [`IStr`] - per-handle string interning
//! - [`normalize_path`] - lexical path normalization for include lookups
//!
//! This module has NO dependencies on other crate modules.

mod intern;
mod line_index;
mod paths;
mod position;

pub use intern::{IStr, StringPool};
pub use line_index::{LineCol, LineIndex};
pub use paths::{normalize_path, path_key};
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
