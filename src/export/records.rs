//! Flat records handed out by [`SchemaHandle`](super::SchemaHandle).
//!
//! Every record borrows its text from the handle that produced it and is
//! `Copy`. `Default` is the empty sentinel returned for out-of-range or
//! suppressed slots: empty strings, zero numbers, `false` flags.

use crate::base::{IStr, Position, Span, StringPool};
use crate::parser::{ErrorCode, SourceLoc, SourceSpan};
use crate::schema::Namespace;

/// A table or struct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructInfo<'a> {
    pub name: &'a str,
    pub qualified_name: &'a str,
    /// `None` in the root namespace
    pub namespace: Option<&'a str>,
    pub file: &'a str,
    pub doc: &'a str,
    pub position: Position,
    pub is_table: bool,
    pub is_struct: bool,
    pub is_predeclared: bool,
    pub bytesize: usize,
    pub minalign: usize,
    /// Includes suppressed union type fields
    pub field_count: usize,
}

/// A field of a table or struct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldInfo<'a> {
    pub name: &'a str,
    /// Full type, e.g. `[game.Weapon]` or `[ubyte:4]`
    pub type_name: &'a str,
    /// Element type of a vector or array, otherwise the type itself
    pub base_type_name: &'a str,
    pub namespace: Option<&'a str>,
    pub file: &'a str,
    pub doc: &'a str,
    pub position: Position,
    pub type_span: Span,
    /// Type expression as written
    pub type_source: &'a str,
    pub deprecated: bool,
    pub required: bool,
    pub key: bool,
    pub id: Option<u16>,
    pub default_value: Option<&'a str>,
    /// Byte offset inside a fixed struct
    pub offset: usize,
}

/// An enum or union
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumInfo<'a> {
    pub name: &'a str,
    pub qualified_name: &'a str,
    pub namespace: Option<&'a str>,
    pub file: &'a str,
    pub doc: &'a str,
    pub position: Position,
    pub is_union: bool,
    pub underlying_type: &'a str,
    pub value_count: usize,
}

/// A value of an enum, or a member of a union
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumValueInfo<'a> {
    /// For union members, the fully qualified name of the member type
    pub name: &'a str,
    /// The identifier as declared
    pub label: &'a str,
    pub namespace: Option<&'a str>,
    pub file: &'a str,
    pub doc: &'a str,
    pub value: i64,
    pub position: Position,
    pub type_span: Span,
    pub type_source: &'a str,
}

/// An `rpc_service`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceInfo<'a> {
    pub name: &'a str,
    pub qualified_name: &'a str,
    pub namespace: Option<&'a str>,
    pub file: &'a str,
    pub doc: &'a str,
    pub position: Position,
    pub method_count: usize,
}

/// Request or response type of a method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RpcTypeInfo<'a> {
    pub name: &'a str,
    pub span: Span,
    pub source: &'a str,
}

/// A method of an `rpc_service`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodInfo<'a> {
    pub name: &'a str,
    pub namespace: Option<&'a str>,
    pub file: &'a str,
    pub doc: &'a str,
    pub position: Position,
    pub request: RpcTypeInfo<'a>,
    pub response: RpcTypeInfo<'a>,
    /// `streaming` attribute value, if any
    pub streaming: Option<&'a str>,
}

/// A user-declared attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeInfo<'a> {
    pub name: &'a str,
    pub doc: &'a str,
    pub known: bool,
}

/// The `root_type` of the root file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootTypeInfo<'a> {
    pub name: &'a str,
    pub file: &'a str,
    pub span: Span,
    pub source: &'a str,
}

/// Why a parse failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    pub code: ErrorCode,
    pub file: &'a str,
    pub position: Position,
    pub message: &'a str,
    pub hint: Option<&'a str>,
}

/// Parser location to exported position
pub(crate) fn position(loc: SourceLoc) -> Position {
    Position::from_one_based(loc.line, loc.col)
}

pub(crate) fn span(span: SourceSpan) -> Span {
    Span::new(position(span.start), position(span.end))
}

/// Interned text every declaration record starts with
#[derive(Debug, Clone)]
pub(super) struct Header {
    pub name: IStr,
    pub qualified_name: IStr,
    pub namespace: Option<IStr>,
    pub file: IStr,
    pub doc: IStr,
    pub position: Position,
}

impl Header {
    pub fn render(
        pool: &mut StringPool,
        name: &str,
        namespace: &Namespace,
        file: &str,
        doc: &[String],
        loc: SourceLoc,
    ) -> Self {
        Self {
            name: pool.intern(name),
            qualified_name: pool.intern_string(namespace.qualify(name)),
            namespace: namespace.dotted().map(|ns| pool.intern_string(ns)),
            file: pool.intern(file),
            doc: pool.intern_doc(doc),
            position: position(loc),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}
