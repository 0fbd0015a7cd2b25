//! `#[repr(C)]` mirrors of the export records.
//!
//! Text fields point into the owning [`FbsSchema`]'s C string cache and stay
//! valid until the schema is destroyed. Optional text is null when absent.
//! `Default` is the all-zero sentinel: null text, zero numbers.

use std::ffi::c_char;
use std::ptr;

use super::FbsSchema;
use crate::base::{Position, Span};
use crate::export::{
    AttributeInfo, EnumInfo, EnumValueInfo, FieldInfo, MethodInfo, RpcTypeInfo, ServiceInfo,
    StructInfo,
};

/// 0-based line and column
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FbsPosition {
    pub line: u32,
    pub column: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FbsRange {
    pub start: FbsPosition,
    pub end: FbsPosition,
}

impl From<Position> for FbsPosition {
    fn from(position: Position) -> Self {
        Self {
            line: position.line,
            column: position.column,
        }
    }
}

impl From<Span> for FbsRange {
    fn from(span: Span) -> Self {
        Self {
            start: span.start.into(),
            end: span.end.into(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FbsStructInfo {
    pub name: *const c_char,
    pub qualified_name: *const c_char,
    /// Null in the root namespace
    pub namespace: *const c_char,
    pub file: *const c_char,
    pub doc: *const c_char,
    pub position: FbsPosition,
    pub is_table: bool,
    pub is_struct: bool,
    pub is_predeclared: bool,
    pub bytesize: usize,
    pub minalign: usize,
    pub field_count: i32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FbsFieldInfo {
    pub name: *const c_char,
    pub type_name: *const c_char,
    pub base_type_name: *const c_char,
    pub namespace: *const c_char,
    pub file: *const c_char,
    pub doc: *const c_char,
    pub position: FbsPosition,
    pub type_range: FbsRange,
    pub type_source: *const c_char,
    pub deprecated: bool,
    pub required: bool,
    pub key: bool,
    pub has_id: bool,
    pub id: u16,
    /// Null when the field has no default
    pub default_value: *const c_char,
    pub offset: usize,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FbsEnumInfo {
    pub name: *const c_char,
    pub qualified_name: *const c_char,
    pub namespace: *const c_char,
    pub file: *const c_char,
    pub doc: *const c_char,
    pub position: FbsPosition,
    pub is_union: bool,
    pub underlying_type: *const c_char,
    pub value_count: i32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FbsEnumValueInfo {
    pub name: *const c_char,
    pub label: *const c_char,
    pub namespace: *const c_char,
    pub file: *const c_char,
    pub doc: *const c_char,
    pub value: i64,
    pub position: FbsPosition,
    pub type_range: FbsRange,
    pub type_source: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FbsServiceInfo {
    pub name: *const c_char,
    pub qualified_name: *const c_char,
    pub namespace: *const c_char,
    pub file: *const c_char,
    pub doc: *const c_char,
    pub position: FbsPosition,
    pub method_count: i32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FbsRpcType {
    pub name: *const c_char,
    pub range: FbsRange,
    pub source: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FbsMethodInfo {
    pub name: *const c_char,
    pub namespace: *const c_char,
    pub file: *const c_char,
    pub doc: *const c_char,
    pub position: FbsPosition,
    pub request: FbsRpcType,
    pub response: FbsRpcType,
    /// Null when the method is not streaming
    pub streaming: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FbsAttributeInfo {
    pub name: *const c_char,
    pub doc: *const c_char,
}

impl Default for FbsStructInfo {
    fn default() -> Self {
        Self {
            name: ptr::null(),
            qualified_name: ptr::null(),
            namespace: ptr::null(),
            file: ptr::null(),
            doc: ptr::null(),
            position: FbsPosition::default(),
            is_table: false,
            is_struct: false,
            is_predeclared: false,
            bytesize: 0,
            minalign: 0,
            field_count: 0,
        }
    }
}

impl Default for FbsFieldInfo {
    fn default() -> Self {
        Self {
            name: ptr::null(),
            type_name: ptr::null(),
            base_type_name: ptr::null(),
            namespace: ptr::null(),
            file: ptr::null(),
            doc: ptr::null(),
            position: FbsPosition::default(),
            type_range: FbsRange::default(),
            type_source: ptr::null(),
            deprecated: false,
            required: false,
            key: false,
            has_id: false,
            id: 0,
            default_value: ptr::null(),
            offset: 0,
        }
    }
}

impl Default for FbsEnumInfo {
    fn default() -> Self {
        Self {
            name: ptr::null(),
            qualified_name: ptr::null(),
            namespace: ptr::null(),
            file: ptr::null(),
            doc: ptr::null(),
            position: FbsPosition::default(),
            is_union: false,
            underlying_type: ptr::null(),
            value_count: 0,
        }
    }
}

impl Default for FbsEnumValueInfo {
    fn default() -> Self {
        Self {
            name: ptr::null(),
            label: ptr::null(),
            namespace: ptr::null(),
            file: ptr::null(),
            doc: ptr::null(),
            value: 0,
            position: FbsPosition::default(),
            type_range: FbsRange::default(),
            type_source: ptr::null(),
        }
    }
}

impl Default for FbsServiceInfo {
    fn default() -> Self {
        Self {
            name: ptr::null(),
            qualified_name: ptr::null(),
            namespace: ptr::null(),
            file: ptr::null(),
            doc: ptr::null(),
            position: FbsPosition::default(),
            method_count: 0,
        }
    }
}

impl Default for FbsRpcType {
    fn default() -> Self {
        Self {
            name: ptr::null(),
            range: FbsRange::default(),
            source: ptr::null(),
        }
    }
}

impl Default for FbsMethodInfo {
    fn default() -> Self {
        Self {
            name: ptr::null(),
            namespace: ptr::null(),
            file: ptr::null(),
            doc: ptr::null(),
            position: FbsPosition::default(),
            request: FbsRpcType::default(),
            response: FbsRpcType::default(),
            streaming: ptr::null(),
        }
    }
}

impl Default for FbsAttributeInfo {
    fn default() -> Self {
        Self {
            name: ptr::null(),
            doc: ptr::null(),
        }
    }
}

// =============================================================================
// Conversions from the borrowed export records
// =============================================================================

pub(super) fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl FbsStructInfo {
    pub(super) fn new(schema: &FbsSchema, info: StructInfo<'_>) -> Self {
        Self {
            name: schema.c_str(info.name),
            qualified_name: schema.c_str(info.qualified_name),
            namespace: schema.c_opt(info.namespace),
            file: schema.c_str(info.file),
            doc: schema.c_str(info.doc),
            position: info.position.into(),
            is_table: info.is_table,
            is_struct: info.is_struct,
            is_predeclared: info.is_predeclared,
            bytesize: info.bytesize,
            minalign: info.minalign,
            field_count: count(info.field_count),
        }
    }
}

impl FbsFieldInfo {
    pub(super) fn new(schema: &FbsSchema, info: FieldInfo<'_>) -> Self {
        Self {
            name: schema.c_str(info.name),
            type_name: schema.c_str(info.type_name),
            base_type_name: schema.c_str(info.base_type_name),
            namespace: schema.c_opt(info.namespace),
            file: schema.c_str(info.file),
            doc: schema.c_str(info.doc),
            position: info.position.into(),
            type_range: info.type_span.into(),
            type_source: schema.c_str(info.type_source),
            deprecated: info.deprecated,
            required: info.required,
            key: info.key,
            has_id: info.id.is_some(),
            id: info.id.unwrap_or_default(),
            default_value: schema.c_opt(info.default_value),
            offset: info.offset,
        }
    }
}

impl FbsEnumInfo {
    pub(super) fn new(schema: &FbsSchema, info: EnumInfo<'_>) -> Self {
        Self {
            name: schema.c_str(info.name),
            qualified_name: schema.c_str(info.qualified_name),
            namespace: schema.c_opt(info.namespace),
            file: schema.c_str(info.file),
            doc: schema.c_str(info.doc),
            position: info.position.into(),
            is_union: info.is_union,
            underlying_type: schema.c_str(info.underlying_type),
            value_count: count(info.value_count),
        }
    }
}

impl FbsEnumValueInfo {
    pub(super) fn new(schema: &FbsSchema, info: EnumValueInfo<'_>) -> Self {
        Self {
            name: schema.c_str(info.name),
            label: schema.c_str(info.label),
            namespace: schema.c_opt(info.namespace),
            file: schema.c_str(info.file),
            doc: schema.c_str(info.doc),
            value: info.value,
            position: info.position.into(),
            type_range: info.type_span.into(),
            type_source: schema.c_str(info.type_source),
        }
    }
}

impl FbsServiceInfo {
    pub(super) fn new(schema: &FbsSchema, info: ServiceInfo<'_>) -> Self {
        Self {
            name: schema.c_str(info.name),
            qualified_name: schema.c_str(info.qualified_name),
            namespace: schema.c_opt(info.namespace),
            file: schema.c_str(info.file),
            doc: schema.c_str(info.doc),
            position: info.position.into(),
            method_count: count(info.method_count),
        }
    }
}

impl FbsRpcType {
    fn new(schema: &FbsSchema, info: RpcTypeInfo<'_>) -> Self {
        Self {
            name: schema.c_str(info.name),
            range: info.span.into(),
            source: schema.c_str(info.source),
        }
    }
}

impl FbsMethodInfo {
    pub(super) fn new(schema: &FbsSchema, info: MethodInfo<'_>) -> Self {
        Self {
            name: schema.c_str(info.name),
            namespace: schema.c_opt(info.namespace),
            file: schema.c_str(info.file),
            doc: schema.c_str(info.doc),
            position: info.position.into(),
            request: FbsRpcType::new(schema, info.request),
            response: FbsRpcType::new(schema, info.response),
            streaming: schema.c_opt(info.streaming),
        }
    }
}

impl FbsAttributeInfo {
    pub(super) fn new(schema: &FbsSchema, info: AttributeInfo<'_>) -> Self {
        Self {
            name: schema.c_str(info.name),
            doc: schema.c_str(info.doc),
        }
    }
}
