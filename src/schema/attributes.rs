//! Attributes the schema language understands without a declaration.

/// Built-in attribute names, in the order flatc registers them
pub const BUILTIN_ATTRIBUTES: &[&str] = &[
    "deprecated",
    "required",
    "key",
    "shared",
    "hash",
    "id",
    "force_align",
    "bit_flags",
    "original_order",
    "nested_flatbuffer",
    "csharp_partial",
    "streaming",
    "idempotent",
    "cpp_type",
    "cpp_ptr_type",
    "cpp_ptr_type_get",
    "cpp_str_type",
    "cpp_str_flex_ctor",
    "native_inline",
    "native_custom_alloc",
    "native_type",
    "native_type_pack_name",
    "native_default",
    "flexbuffer",
    "private",
];

/// Check if `name` is a built-in attribute
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_ATTRIBUTES.contains(&name)
}
