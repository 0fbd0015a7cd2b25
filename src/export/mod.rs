//! Flat, index-based view of a resolved schema.
//!
//! A [`SchemaHandle`] owns one parse outcome. Declarations are enumerated
//! with `*_count` / `get_*` pairs: `get_*` never panics and returns the
//! record's `Default` sentinel when the index is out of range, while the
//! matching `*_info` method returns `None` instead.
//!
//! Positions in every record are 0-based.

mod attributes;
mod enums;
mod filter;
mod format;
mod handle;
mod includes;
mod records;
mod services;
mod structs;

pub use filter::is_union_discriminator;
pub use format::{format_base_type, format_type};
pub use handle::SchemaHandle;
pub use records::{
    AttributeInfo, Diagnostic, EnumInfo, EnumValueInfo, FieldInfo, MethodInfo, RootTypeInfo,
    RpcTypeInfo, ServiceInfo, StructInfo,
};
