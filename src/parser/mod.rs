//! Logos-based recursive descent parser for FlatBuffers schemas
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → SchemaFile (unresolved items, names still paths)
//!     ↓
//! schema::resolve → Schema (resolved definitions)
//! ```
//!
//! Parsing stops at the first error, which is returned as a [`SchemaError`].

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod errors;
mod lexer;
mod location;
mod syntax_kind;

pub use ast::SchemaFile;
pub use errors::{ErrorCode, SchemaError};
pub use lexer::{Lexer, Token, tokenize};
pub use location::{SourceLoc, SourceSpan};
pub use parser::parse_file;
pub use syntax_kind::SyntaxKind;
