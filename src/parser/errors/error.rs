//! Schema error type
//!
//! Parsing and resolution stop at the first problem, so a failed parse yields
//! exactly one `SchemaError` carrying:
//! - a categorized error code
//! - the file it occurred in (empty for in-memory text)
//! - a 1-based line and 0-based column
//! - an optional hint

use smol_str::SmolStr;
use thiserror::Error;

use super::codes::ErrorCode;
use crate::parser::SourceLoc;

/// The first error encountered while parsing or resolving a schema.
///
/// `Display` renders the flatc diagnostic shape, `file:line: col: error: msg`,
/// leaving out the file prefix for in-memory text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}: {}: error: {}", file_prefix(.file), .line, .col, .message)]
pub struct SchemaError {
    /// Categorized error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// File the error occurred in; empty for in-memory text
    pub file: SmolStr,
    /// 1-based line
    pub line: u32,
    /// 0-based column
    pub col: u32,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

fn file_prefix(file: &SmolStr) -> String {
    if file.is_empty() {
        String::new()
    } else {
        format!("{file}:")
    }
}

impl SchemaError {
    /// Create a new error at a location
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        file: impl Into<SmolStr>,
        loc: SourceLoc,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            file: file.into(),
            line: loc.line,
            col: loc.col,
            hint: None,
        }
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check if this error has a hint
    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Location of the error as reported by the parser
    pub fn location(&self) -> SourceLoc {
        SourceLoc::new(self.line, self.col)
    }

    /// Format the error with its code and hint, for logs
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}
