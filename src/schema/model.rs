//! Resolved schema model.
//!
//! This is what a [`SchemaParser`](super::SchemaParser) hands to the export
//! layer: ordered definitions with every type reference already resolved to an
//! index. Declaration order is preserved everywhere and is the index contract
//! callers rely on.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;

use crate::parser::{SourceLoc, SourceSpan};

/// Index of a struct or table in [`Schema::structs`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StructId(pub usize);

/// Index of an enum or union in [`Schema::enums`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumId(pub usize);

/// Built-in scalar types plus `string`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Bool,
    Byte,
    UByte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    String,
}

impl BaseType {
    /// Canonical schema keyword
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::UByte => "ubyte",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
        }
    }

    /// Look up a primitive by keyword, including the sized aliases
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "bool" => Self::Bool,
            "byte" | "int8" => Self::Byte,
            "ubyte" | "uint8" => Self::UByte,
            "short" | "int16" => Self::Short,
            "ushort" | "uint16" => Self::UShort,
            "int" | "int32" => Self::Int,
            "uint" | "uint32" => Self::UInt,
            "long" | "int64" => Self::Long,
            "ulong" | "uint64" => Self::ULong,
            "float" | "float32" => Self::Float,
            "double" | "float64" => Self::Double,
            "string" => Self::String,
            _ => return None,
        };
        Some(ty)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::UByte
                | Self::Short
                | Self::UShort
                | Self::Int
                | Self::UInt
                | Self::Long
                | Self::ULong
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Everything but `string`
    pub fn is_scalar(self) -> bool {
        self != Self::String
    }

    /// Inline size in bytes; `string` is stored as a 4-byte offset
    pub fn size(self) -> usize {
        match self {
            Self::Bool | Self::Byte | Self::UByte => 1,
            Self::Short | Self::UShort => 2,
            Self::Int | Self::UInt | Self::Float | Self::String => 4,
            Self::Long | Self::ULong | Self::Double => 8,
        }
    }

    /// Inclusive value range of an integer type
    pub fn integer_range(self) -> Option<(i128, i128)> {
        let range = match self {
            Self::Byte => (i8::MIN.into(), i8::MAX.into()),
            Self::UByte => (0, u8::MAX.into()),
            Self::Short => (i16::MIN.into(), i16::MAX.into()),
            Self::UShort => (0, u16::MAX.into()),
            Self::Int => (i32::MIN.into(), i32::MAX.into()),
            Self::UInt => (0, u32::MAX.into()),
            Self::Long => (i64::MIN.into(), i64::MAX.into()),
            Self::ULong => (0, u64::MAX.into()),
            _ => return None,
        };
        Some(range)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A resolved type reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Primitive(BaseType),
    Struct(StructId),
    /// An enum or union, carrying its underlying integer type
    Enum { def: EnumId, repr: BaseType },
    Vector(Box<TypeRef>),
    Array(Box<TypeRef>, u16),
}

impl TypeRef {
    /// Element type of a vector or array, or the type itself
    pub fn element(&self) -> &TypeRef {
        match self {
            Self::Vector(inner) | Self::Array(inner, _) => inner,
            other => other,
        }
    }

    pub fn enum_id(&self) -> Option<EnumId> {
        match self {
            Self::Enum { def, .. } => Some(*def),
            _ => None,
        }
    }
}

/// A dot-separated namespace path; empty means the root namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Namespace {
    components: Vec<SmolStr>,
}

impl Namespace {
    pub fn new(components: Vec<SmolStr>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[SmolStr] {
        &self.components
    }

    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Dot-joined form, `None` for the root namespace
    pub fn dotted(&self) -> Option<String> {
        (!self.is_root()).then(|| self.components.join("."))
    }

    /// Fully qualified name of `name` declared in this namespace
    pub fn qualify(&self, name: &str) -> String {
        match self.dotted() {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.to_string(),
        }
    }
}

impl From<Vec<&str>> for Namespace {
    fn from(components: Vec<&str>) -> Self {
        Self::new(components.into_iter().map(SmolStr::new).collect())
    }
}

/// Attribute uses on a declaration, in source order; `None` for a bare flag
pub type Attributes = IndexMap<SmolStr, Option<SmolStr>>;

/// A table or fixed-size struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructDef {
    pub name: SmolStr,
    pub namespace: Namespace,
    /// Declaring file; empty for in-memory text
    pub file: SmolStr,
    pub doc: Vec<String>,
    pub loc: SourceLoc,
    pub is_table: bool,
    /// Referenced before being defined
    pub is_predeclared: bool,
    pub bytesize: usize,
    pub minalign: usize,
    pub fields: Vec<FieldDef>,
    pub attributes: Attributes,
}

impl StructDef {
    pub fn is_struct(&self) -> bool {
        !self.is_table
    }

    pub fn qualified_name(&self) -> String {
        self.namespace.qualify(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: SmolStr,
    pub ty: TypeRef,
    pub doc: Vec<String>,
    pub loc: SourceLoc,
    pub type_span: SourceSpan,
    /// Type expression exactly as written
    pub type_source: SmolStr,
    pub deprecated: bool,
    pub required: bool,
    pub key: bool,
    pub id: Option<u16>,
    pub default: Option<SmolStr>,
    /// Byte offset inside a fixed struct; 0 for table fields
    pub offset: usize,
    pub attributes: Attributes,
}

impl FieldDef {
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: Vec::new(),
            loc: SourceLoc::default(),
            type_span: SourceSpan::default(),
            type_source: SmolStr::default(),
            deprecated: false,
            required: false,
            key: false,
            id: None,
            default: None,
            offset: 0,
            attributes: Attributes::default(),
        }
    }
}

/// An enum or union
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub name: SmolStr,
    pub namespace: Namespace,
    pub file: SmolStr,
    pub doc: Vec<String>,
    pub loc: SourceLoc,
    pub underlying: BaseType,
    pub is_union: bool,
    pub values: Vec<EnumVal>,
    pub attributes: Attributes,
}

impl Default for EnumDef {
    fn default() -> Self {
        Self {
            name: SmolStr::default(),
            namespace: Namespace::default(),
            file: SmolStr::default(),
            doc: Vec::new(),
            loc: SourceLoc::default(),
            underlying: BaseType::Int,
            is_union: false,
            values: Vec::new(),
            attributes: Attributes::default(),
        }
    }
}

impl EnumDef {
    pub fn qualified_name(&self) -> String {
        self.namespace.qualify(&self.name)
    }

    pub fn value_by_name(&self, name: &str) -> Option<&EnumVal> {
        self.values.iter().find(|v| v.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumVal {
    /// Declared name; for unions the member alias or the written type path
    pub name: SmolStr,
    pub doc: Vec<String>,
    pub value: i64,
    pub loc: SourceLoc,
    /// Member type of a union value
    pub union_type: Option<StructId>,
    pub type_span: SourceSpan,
    pub type_source: SmolStr,
}

/// An `rpc_service` declaration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDef {
    pub name: SmolStr,
    pub namespace: Namespace,
    pub file: SmolStr,
    pub doc: Vec<String>,
    pub loc: SourceLoc,
    pub methods: Vec<RpcMethod>,
    pub attributes: Attributes,
}

impl ServiceDef {
    pub fn qualified_name(&self) -> String {
        self.namespace.qualify(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RpcMethod {
    pub name: SmolStr,
    pub doc: Vec<String>,
    pub loc: SourceLoc,
    pub request: RpcType,
    pub response: RpcType,
    pub attributes: Attributes,
}

impl RpcMethod {
    /// Value of the `streaming` attribute (`client`, `server`, `bidi`)
    pub fn streaming(&self) -> Option<&str> {
        self.attributes
            .get("streaming")
            .and_then(|value| value.as_deref())
    }
}

/// Request or response table of an RPC method
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpcType {
    pub ty: StructId,
    pub span: SourceSpan,
    pub source: SmolStr,
}

/// The table named by `root_type`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootType {
    pub ty: StructId,
    pub file: SmolStr,
    pub span: SourceSpan,
    pub source: SmolStr,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeEntry {
    /// Built into the schema language rather than declared by the user
    pub known: bool,
    pub doc: Vec<String>,
}

/// Every attribute name the schema may use, built-ins first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeRegistry {
    entries: IndexMap<SmolStr, AttributeEntry>,
}

impl AttributeRegistry {
    /// Registry holding only the built-in attributes
    pub fn with_builtins() -> Self {
        let mut registry = Self::default();
        for name in super::attributes::BUILTIN_ATTRIBUTES {
            registry.entries.insert(
                SmolStr::new(name),
                AttributeEntry {
                    known: true,
                    doc: Vec::new(),
                },
            );
        }
        registry
    }

    /// Record a user declaration. Re-declaring keeps the first position and
    /// replaces the documentation; built-ins stay built-in.
    pub fn declare(&mut self, name: impl Into<SmolStr>, doc: Vec<String>) {
        let entry = self.entries.entry(name.into()).or_default();
        if !entry.known {
            entry.doc = doc;
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|entry| entry.known)
    }

    pub fn get(&self, name: &str) -> Option<&AttributeEntry> {
        self.entries.get(name)
    }

    /// User-declared attributes in declaration order
    pub fn user_defined(&self) -> impl Iterator<Item = (&SmolStr, &AttributeEntry)> {
        self.entries.iter().filter(|(_, entry)| !entry.known)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &AttributeEntry)> {
        self.entries.iter()
    }
}

/// Direct include edges, keyed by normalized including-file path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeGraph {
    files: IndexMap<SmolStr, IndexSet<SmolStr>>,
}

impl IncludeGraph {
    pub fn record(&mut self, from: impl Into<SmolStr>, to: impl Into<SmolStr>) {
        self.files.entry(from.into()).or_default().insert(to.into());
    }

    /// Direct includes of `file` in first-recorded order
    pub fn direct(&self, file: &str) -> Option<&IndexSet<SmolStr>> {
        self.files.get(file)
    }

    /// Every edge of every including file, grouped by including file
    pub fn edges(&self) -> impl Iterator<Item = (&SmolStr, &SmolStr)> {
        self.files
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
    }

    pub fn edge_count(&self) -> usize {
        self.files.values().map(IndexSet::len).sum()
    }

    pub fn including_files(&self) -> impl Iterator<Item = &SmolStr> {
        self.files.keys()
    }
}

/// A fully resolved schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub structs: Vec<StructDef>,
    pub enums: Vec<EnumDef>,
    pub services: Vec<ServiceDef>,
    pub attributes: AttributeRegistry,
    pub includes: IncludeGraph,
    /// Include-graph key of the file that was parsed as the root
    pub root_file: SmolStr,
    pub root_type: Option<RootType>,
    pub file_identifier: Option<SmolStr>,
    pub file_extension: Option<SmolStr>,
}

impl Schema {
    /// An empty schema that knows the built-in attributes
    pub fn new() -> Self {
        Self {
            attributes: AttributeRegistry::with_builtins(),
            ..Self::default()
        }
    }

    pub fn struct_def(&self, id: StructId) -> Option<&StructDef> {
        self.structs.get(id.0)
    }

    pub fn enum_def(&self, id: EnumId) -> Option<&EnumDef> {
        self.enums.get(id.0)
    }

    /// Whether `ty` refers to an enum marked as a union
    pub fn is_union(&self, ty: &TypeRef) -> bool {
        ty.enum_id()
            .and_then(|id| self.enum_def(id))
            .is_some_and(|def| def.is_union)
    }
}
