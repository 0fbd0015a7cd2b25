//! # fbs-introspect
//!
//! Schema introspection for FlatBuffers IDL: parse a `.fbs` schema (with its
//! includes) and enumerate its declarations through a flat, index-based API
//! that is also exported over a C ABI.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ffi       → extern "C" surface over SchemaHandle
//!   ↓
//! export    → SchemaHandle, count/get enumerators, type-name formatting
//!   ↓
//! schema    → Resolved model, include loading, struct layout
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, SchemaError
//!   ↓
//! base      → Primitives (Position/Span, LineIndex, StringPool)
//! ```
//!
//! ## Example
//!
//! ```
//! use fbs_introspect::{ParseOptions, SchemaHandle};
//!
//! let handle = SchemaHandle::parse("table T { x:int; }", &ParseOptions::default());
//! assert!(handle.is_success());
//! assert_eq!(handle.get_struct(0).name, "T");
//! assert_eq!(handle.get_field(0, 0).type_name, "int");
//! handle.destroy();
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → schema → export → ffi)
// ============================================================================

/// Foundation types: positions, line index, string interning
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, error codes
pub mod parser;

/// Resolved schema model, include loading and layout
pub mod schema;

/// Flat enumeration API over a resolved schema
pub mod export;

/// C ABI: opaque schema pointer and `#[repr(C)]` records
pub mod ffi;

// Re-export foundation types
pub use base::{IStr, LineCol, LineIndex, Position, Span, StringPool, TextRange, TextSize};

// Re-export parser errors
pub use parser::{ErrorCode, SchemaError};

// Re-export the schema model entry points
pub use schema::{FbsParser, ParseOptions, Schema, SchemaParser, TypeRef};

// Re-export the export API
pub use export::{
    AttributeInfo, Diagnostic, EnumInfo, EnumValueInfo, FieldInfo, MethodInfo, RootTypeInfo,
    RpcTypeInfo, SchemaHandle, ServiceInfo, StructInfo, format_base_type, format_type,
    is_union_discriminator,
};
