//! Unresolved syntax tree for one schema file
//!
//! The parser produces these nodes; names inside them are still plain paths.
//! Turning paths into definitions happens in `schema::resolve`.

use smol_str::SmolStr;

use super::location::{SourceLoc, SourceSpan};

/// One parsed file, in source order.
#[derive(Debug, Clone, Default)]
pub struct SchemaFile {
    /// Include-graph key of the file; empty for in-memory text
    pub path: SmolStr,
    pub items: Vec<Item>,
}

impl SchemaFile {
    /// Include directives of this file, in source order
    pub fn includes(&self) -> impl Iterator<Item = &IncludeDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Include(include) => Some(include),
            _ => None,
        })
    }
}

/// A top-level schema item
#[derive(Debug, Clone)]
pub enum Item {
    Include(IncludeDecl),
    Namespace(NamespaceDecl),
    Attribute(AttributeDecl),
    Struct(StructDecl),
    Enum(EnumDecl),
    Service(ServiceDecl),
    RootType(TypeExpr),
    FileIdentifier(StringLit),
    FileExtension(StringLit),
}

/// An identifier together with where it was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub text: SmolStr,
    pub loc: SourceLoc,
}

/// A string literal with escapes already processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLit {
    pub value: String,
    pub loc: SourceLoc,
}

/// `include "path";`
#[derive(Debug, Clone)]
pub struct IncludeDecl {
    pub path: String,
    pub loc: SourceLoc,
}

/// `namespace a.b;` (no components resets to the root namespace)
#[derive(Debug, Clone)]
pub struct NamespaceDecl {
    pub components: Vec<SmolStr>,
    pub loc: SourceLoc,
}

/// `attribute "name";`
#[derive(Debug, Clone)]
pub struct AttributeDecl {
    pub name: Name,
    pub doc: Vec<String>,
}

/// `table` or `struct` declaration
#[derive(Debug, Clone)]
pub struct StructDecl {
    pub name: Name,
    pub is_table: bool,
    pub doc: Vec<String>,
    pub attributes: Vec<AttributeUse>,
    pub fields: Vec<FieldDecl>,
}

/// `name: type = default (attrs);`
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: Name,
    pub ty: TypeExpr,
    pub default: Option<Literal>,
    pub attributes: Vec<AttributeUse>,
    pub doc: Vec<String>,
}

/// `enum` or `union` declaration
#[derive(Debug, Clone)]
pub struct EnumDecl {
    pub name: Name,
    pub is_union: bool,
    pub underlying: Option<TypeExpr>,
    pub doc: Vec<String>,
    pub attributes: Vec<AttributeUse>,
    pub values: Vec<EnumValueDecl>,
}

/// One enum value, or one union member
#[derive(Debug, Clone)]
pub struct EnumValueDecl {
    pub name: Name,
    pub value: Option<Literal>,
    /// Type carried by a union member
    pub member: Option<TypeExpr>,
    pub doc: Vec<String>,
}

/// `rpc_service Name { ... }`
#[derive(Debug, Clone)]
pub struct ServiceDecl {
    pub name: Name,
    pub doc: Vec<String>,
    pub attributes: Vec<AttributeUse>,
    pub methods: Vec<MethodDecl>,
}

/// `Method(Request):Response (attrs);`
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: Name,
    pub request: TypeExpr,
    pub response: TypeExpr,
    pub attributes: Vec<AttributeUse>,
    pub doc: Vec<String>,
}

/// `name` or `name: value` inside an attribute list
#[derive(Debug, Clone)]
pub struct AttributeUse {
    pub name: Name,
    pub value: Option<Literal>,
}

/// A type expression exactly as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    pub kind: TypeExprKind,
    pub span: SourceSpan,
    /// Verbatim source text of the expression
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExprKind {
    /// Possibly qualified name: `int`, `Vec3`, `game.Monster`
    Named(Vec<SmolStr>),
    /// `[T]`
    Vector(Box<TypeExpr>),
    /// `[T:N]`
    Array(Box<TypeExpr>, u32),
}

impl TypeExpr {
    /// The dotted path of a named type; `None` for vectors and arrays
    pub fn path(&self) -> Option<&[SmolStr]> {
        match &self.kind {
            TypeExprKind::Named(path) => Some(path),
            _ => None,
        }
    }
}

/// A constant in a default value or attribute argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    /// Source text, including any leading sign
    pub text: String,
    pub loc: SourceLoc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Integer,
    Float,
    Bool,
    Ident,
    String,
}

impl Literal {
    /// Integer value, accepting decimal and `0x` hex with an optional sign
    pub fn as_integer(&self) -> Option<i128> {
        if self.kind != LiteralKind::Integer {
            return None;
        }
        let (negative, digits) = match self.text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, self.text.strip_prefix('+').unwrap_or(&self.text)),
        };
        let magnitude = match digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            Some(hex) => i128::from_str_radix(hex, 16).ok()?,
            None => digits.parse::<i128>().ok()?,
        };
        Some(if negative { -magnitude } else { magnitude })
    }
}
