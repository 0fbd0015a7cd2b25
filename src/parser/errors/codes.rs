//! Error code definitions for schema diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (unexpected tokens, unclosed bodies)
//! - E03xx: Declaration errors (duplicates, enum values, attributes)
//! - E04xx: Type errors (undefined or misplaced types)
//! - E05xx: Include/namespace errors
//! - E06xx: Schema-level errors (root type, file identifier)

use std::fmt;

/// Error codes for schema diagnostics
///
/// Each error code represents a specific category of failure,
/// enabling filtering, documentation, and IDE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors (invalid tokens)
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string literal
    E0102,
    /// Invalid numeric literal
    E0103,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Expected a specific token
    E0201,
    /// Body never closed before end of file
    E0202,
    /// Token not valid at the top level of a schema
    E0203,
    /// Type expression nested too deeply
    E0204,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Name defined more than once
    E0301,
    /// Enum values not in ascending order
    E0302,
    /// Enum value does not fit the underlying type
    E0303,
    /// Enum declared without an underlying integer type
    E0304,
    /// Attribute neither built in nor declared
    E0305,
    /// Attribute value has the wrong shape
    E0306,
    /// Some but not all fields carry an `id`
    E0307,
    /// Default value not valid for the field's type
    E0308,

    // =========================================================================
    // E04xx: Type errors
    // =========================================================================
    /// Referenced type is not defined
    E0401,
    /// Field type not allowed inside a struct
    E0402,
    /// Union member is not a table or struct
    E0403,
    /// Fixed-length array used outside a struct
    E0404,
    /// Nested vector or vector of unions
    E0405,
    /// Struct contains itself
    E0406,
    /// Enum underlying type is not an integer
    E0407,
    /// RPC request or response is not a table
    E0408,
    /// Struct size overflows the addressable range
    E0409,
    /// Struct declared without fields
    E0410,

    // =========================================================================
    // E05xx: Include/namespace errors
    // =========================================================================
    /// Included file could not be found
    E0501,
    /// Included file could not be read
    E0502,
    /// Include directive after other declarations
    E0503,

    // =========================================================================
    // E06xx: Schema-level errors
    // =========================================================================
    /// Root type is not a table
    E0601,
    /// File identifier is not exactly four characters
    E0602,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0307 => "E0307",
            Self::E0308 => "E0308",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0404 => "E0404",
            Self::E0405 => "E0405",
            Self::E0406 => "E0406",
            Self::E0407 => "E0407",
            Self::E0408 => "E0408",
            Self::E0409 => "E0409",
            Self::E0410 => "E0410",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0503 => "E0503",
            Self::E0601 => "E0601",
            Self::E0602 => "E0602",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 => "structural error",
            Self::E0301
            | Self::E0302
            | Self::E0303
            | Self::E0304
            | Self::E0305
            | Self::E0306
            | Self::E0307
            | Self::E0308 => "declaration error",
            Self::E0401
            | Self::E0402
            | Self::E0403
            | Self::E0404
            | Self::E0405
            | Self::E0406
            | Self::E0407
            | Self::E0408
            | Self::E0409
            | Self::E0410 => "type error",
            Self::E0501 | Self::E0502 | Self::E0503 => "include error",
            Self::E0601 | Self::E0602 => "schema error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0103 => "invalid numeric literal",
            Self::E0201 => "unexpected token",
            Self::E0202 => "unclosed body",
            Self::E0203 => "unexpected top-level token",
            Self::E0204 => "nesting too deep",
            Self::E0301 => "duplicate definition",
            Self::E0302 => "enum values out of order",
            Self::E0303 => "enum value out of range",
            Self::E0304 => "missing underlying enum type",
            Self::E0305 => "undeclared attribute",
            Self::E0306 => "invalid attribute value",
            Self::E0307 => "incomplete field ids",
            Self::E0308 => "invalid default value",
            Self::E0401 => "undefined type",
            Self::E0402 => "invalid struct field type",
            Self::E0403 => "invalid union member",
            Self::E0404 => "fixed array outside struct",
            Self::E0405 => "unsupported vector element",
            Self::E0406 => "recursive struct",
            Self::E0407 => "invalid underlying enum type",
            Self::E0408 => "invalid rpc type",
            Self::E0409 => "struct too large",
            Self::E0410 => "empty struct",
            Self::E0501 => "include not found",
            Self::E0502 => "include not readable",
            Self::E0503 => "misplaced include",
            Self::E0601 => "invalid root type",
            Self::E0602 => "invalid file identifier",
        }
    }

    /// Check if this error comes from tokenizing or grammar rather than
    /// from resolving declarations
    pub fn is_syntactic(&self) -> bool {
        matches!(
            self,
            Self::E0101
                | Self::E0102
                | Self::E0103
                | Self::E0201
                | Self::E0202
                | Self::E0203
                | Self::E0204
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
