//! `extern "C"` entry points.

use std::borrow::Cow;
use std::ffi::{CStr, c_char};
use std::ptr;

use tracing::{debug, instrument, warn};

use super::FbsSchema;
use super::records::{
    FbsAttributeInfo, FbsEnumInfo, FbsEnumValueInfo, FbsFieldInfo, FbsMethodInfo,
    FbsServiceInfo, FbsStructInfo, count,
};
use crate::export::SchemaHandle;
use crate::schema::ParseOptions;

static EMPTY: &[u8] = b"\0";

fn empty() -> *const c_char {
    EMPTY.as_ptr().cast()
}

fn to_index(i: i32) -> Option<usize> {
    usize::try_from(i).ok()
}

/// Borrow the schema behind `schema`, logging null handles.
///
/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
unsafe fn schema_ref<'a>(schema: *const FbsSchema, caller: &str) -> Option<&'a FbsSchema> {
    let schema = unsafe { schema.as_ref() };
    if schema.is_none() {
        warn!(caller, "null schema handle");
    }
    schema
}

/// # Safety
/// `text` must be null or a valid NUL-terminated string.
unsafe fn read_str<'a>(text: *const c_char) -> Option<Cow<'a, str>> {
    if text.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(text) }.to_string_lossy())
}

/// Reads an include-graph file argument; null names the root file.
unsafe fn read_file<'a>(schema: &'a FbsSchema, file: *const c_char) -> Cow<'a, str> {
    unsafe { read_str(file) }.unwrap_or(Cow::Borrowed(schema.handle().root_file()))
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Parse a schema. Always returns a handle; check [`fbs_schema_is_success`].
///
/// A null `text` parses as the empty schema. `filename` may be null for
/// in-memory text.
///
/// # Safety
/// `text` and `filename` must be null or valid NUL-terminated strings.
/// `include_paths` must be null or point to `include_path_count` such
/// strings.
#[unsafe(no_mangle)]
#[instrument(skip_all)]
pub unsafe extern "C" fn fbs_schema_parse(
    text: *const c_char,
    filename: *const c_char,
    include_paths: *const *const c_char,
    include_path_count: i32,
) -> *mut FbsSchema {
    let text = unsafe { read_str(text) }.unwrap_or_default();
    let mut options = ParseOptions::new();
    if let Some(filename) = unsafe { read_str(filename) } {
        options = options.with_filename(filename.into_owned());
    }
    if !include_paths.is_null() {
        let len = to_index(include_path_count).unwrap_or(0);
        let paths = unsafe { std::slice::from_raw_parts(include_paths, len) };
        for &path in paths {
            if let Some(path) = unsafe { read_str(path) } {
                options = options.with_include_path(path.into_owned());
            }
        }
    }

    let handle = SchemaHandle::parse(&text, &options);
    debug!(success = handle.is_success(), "schema parsed over C ABI");
    Box::into_raw(Box::new(FbsSchema::new(handle)))
}

/// Release a schema. Null is ignored.
///
/// # Safety
/// `schema` must be null or a pointer from [`fbs_schema_parse`] that has
/// not been destroyed yet.
#[unsafe(no_mangle)]
#[instrument(skip_all)]
pub unsafe extern "C" fn fbs_schema_destroy(schema: *mut FbsSchema) {
    if schema.is_null() {
        return;
    }
    let schema = unsafe { Box::from_raw(schema) };
    schema.into_handle().destroy();
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_schema_is_success(schema: *const FbsSchema) -> bool {
    unsafe { schema_ref(schema, "fbs_schema_is_success") }
        .is_some_and(|schema| schema.handle().is_success())
}

/// The parse error, or `""` after success or for a null schema.
///
/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_schema_error(schema: *const FbsSchema) -> *const c_char {
    match unsafe { schema_ref(schema, "fbs_schema_error") } {
        Some(schema) => schema.c_str(schema.handle().error()),
        None => empty(),
    }
}

/// Qualified name of the root type, or null when none was declared.
///
/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_schema_root_type(schema: *const FbsSchema) -> *const c_char {
    unsafe { schema_ref(schema, "fbs_schema_root_type") }.map_or(ptr::null(), |schema| {
        schema.c_opt(schema.handle().root_type().map(|root| root.name))
    })
}

// =============================================================================
// Structs and fields
// =============================================================================

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_struct_count(schema: *const FbsSchema) -> i32 {
    unsafe { schema_ref(schema, "fbs_struct_count") }
        .map_or(0, |schema| count(schema.handle().struct_count()))
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_get_struct(schema: *const FbsSchema, index: i32) -> FbsStructInfo {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_get_struct") }) else {
        return FbsStructInfo::default();
    };
    to_index(index)
        .and_then(|i| schema.handle().struct_info(i))
        .map_or_else(FbsStructInfo::default, |info| {
            FbsStructInfo::new(schema, info)
        })
}

/// Field slots of a struct, including hidden union discriminator slots.
///
/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_field_count(schema: *const FbsSchema, struct_index: i32) -> i32 {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_field_count") }) else {
        return 0;
    };
    to_index(struct_index).map_or(0, |s| count(schema.handle().field_count(s)))
}

/// A field, or a zeroed record for a hidden slot or bad index.
///
/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_get_field(
    schema: *const FbsSchema,
    struct_index: i32,
    field_index: i32,
) -> FbsFieldInfo {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_get_field") }) else {
        return FbsFieldInfo::default();
    };
    to_index(struct_index)
        .zip(to_index(field_index))
        .and_then(|(s, f)| schema.handle().field_info(s, f))
        .map_or_else(FbsFieldInfo::default, |info| FbsFieldInfo::new(schema, info))
}

// =============================================================================
// Enums and values
// =============================================================================

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_enum_count(schema: *const FbsSchema) -> i32 {
    unsafe { schema_ref(schema, "fbs_enum_count") }
        .map_or(0, |schema| count(schema.handle().enum_count()))
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_get_enum(schema: *const FbsSchema, index: i32) -> FbsEnumInfo {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_get_enum") }) else {
        return FbsEnumInfo::default();
    };
    to_index(index)
        .and_then(|i| schema.handle().enum_info(i))
        .map_or_else(FbsEnumInfo::default, |info| FbsEnumInfo::new(schema, info))
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_enum_value_count(schema: *const FbsSchema, enum_index: i32) -> i32 {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_enum_value_count") }) else {
        return 0;
    };
    to_index(enum_index).map_or(0, |e| count(schema.handle().enum_value_count(e)))
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_get_enum_value(
    schema: *const FbsSchema,
    enum_index: i32,
    value_index: i32,
) -> FbsEnumValueInfo {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_get_enum_value") }) else {
        return FbsEnumValueInfo::default();
    };
    to_index(enum_index)
        .zip(to_index(value_index))
        .and_then(|(e, v)| schema.handle().enum_value_info(e, v))
        .map_or_else(FbsEnumValueInfo::default, |info| {
            FbsEnumValueInfo::new(schema, info)
        })
}

// =============================================================================
// Services and methods
// =============================================================================

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_service_count(schema: *const FbsSchema) -> i32 {
    unsafe { schema_ref(schema, "fbs_service_count") }
        .map_or(0, |schema| count(schema.handle().service_count()))
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_get_service(schema: *const FbsSchema, index: i32) -> FbsServiceInfo {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_get_service") }) else {
        return FbsServiceInfo::default();
    };
    to_index(index)
        .and_then(|i| schema.handle().service_info(i))
        .map_or_else(FbsServiceInfo::default, |info| {
            FbsServiceInfo::new(schema, info)
        })
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_method_count(schema: *const FbsSchema, service_index: i32) -> i32 {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_method_count") }) else {
        return 0;
    };
    to_index(service_index).map_or(0, |s| count(schema.handle().method_count(s)))
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_get_method(
    schema: *const FbsSchema,
    service_index: i32,
    method_index: i32,
) -> FbsMethodInfo {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_get_method") }) else {
        return FbsMethodInfo::default();
    };
    to_index(service_index)
        .zip(to_index(method_index))
        .and_then(|(s, m)| schema.handle().method_info(s, m))
        .map_or_else(FbsMethodInfo::default, |info| FbsMethodInfo::new(schema, info))
}

// =============================================================================
// Attributes
// =============================================================================

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_user_attribute_count(schema: *const FbsSchema) -> i32 {
    unsafe { schema_ref(schema, "fbs_user_attribute_count") }
        .map_or(0, |schema| count(schema.handle().user_attribute_count()))
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_get_user_attribute(
    schema: *const FbsSchema,
    index: i32,
) -> FbsAttributeInfo {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_get_user_attribute") }) else {
        return FbsAttributeInfo::default();
    };
    to_index(index)
        .and_then(|i| schema.handle().user_attribute_info(i))
        .map_or_else(FbsAttributeInfo::default, |info| {
            FbsAttributeInfo::new(schema, info)
        })
}

/// Documentation of a declared attribute; `""` when absent.
///
/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`];
/// `name` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_attribute_documentation(
    schema: *const FbsSchema,
    name: *const c_char,
) -> *const c_char {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_attribute_documentation") }) else {
        return empty();
    };
    match unsafe { read_str(name) } {
        Some(name) => schema.c_str(schema.handle().attribute_documentation(&name)),
        None => empty(),
    }
}

// =============================================================================
// Includes
// =============================================================================

/// Direct includes of `file`. A null `file` names the root file.
///
/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`];
/// `file` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_include_count(schema: *const FbsSchema, file: *const c_char) -> i32 {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_include_count") }) else {
        return 0;
    };
    let file = unsafe { read_file(schema, file) };
    count(schema.handle().include_count(&file))
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`];
/// `file` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_get_include(
    schema: *const FbsSchema,
    file: *const c_char,
    index: i32,
) -> *const c_char {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_get_include") }) else {
        return empty();
    };
    let file = unsafe { read_file(schema, file) };
    match to_index(index) {
        Some(i) => schema.c_str(schema.handle().get_include(&file, i)),
        None => empty(),
    }
}

/// Number of files that include at least one other file.
///
/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_including_file_count(schema: *const FbsSchema) -> i32 {
    unsafe { schema_ref(schema, "fbs_including_file_count") }
        .map_or(0, |schema| count(schema.handle().including_file_count()))
}

/// The `index`-th including file; pair with [`fbs_include_count`] to walk the graph.
///
/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_get_including_file(schema: *const FbsSchema, index: i32) -> *const c_char {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_get_including_file") }) else {
        return empty();
    };
    match to_index(index) {
        Some(i) => schema.c_str(schema.handle().get_including_file(i)),
        None => empty(),
    }
}

/// Size of the flattened include multiset.
///
/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_all_include_count(schema: *const FbsSchema) -> i32 {
    unsafe { schema_ref(schema, "fbs_all_include_count") }
        .map_or(0, |schema| count(schema.handle().all_include_count()))
}

/// # Safety
/// `schema` must be null or a live pointer from [`fbs_schema_parse`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fbs_get_all_include(schema: *const FbsSchema, index: i32) -> *const c_char {
    let Some(schema) = (unsafe { schema_ref(schema, "fbs_get_all_include") }) else {
        return empty();
    };
    match to_index(index) {
        Some(i) => schema.c_str(schema.handle().get_all_include(i)),
        None => empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn text(ptr: *const c_char) -> String {
        assert!(!ptr.is_null());
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }

    fn parse(source: &str) -> *mut FbsSchema {
        let source = CString::new(source).unwrap();
        unsafe { fbs_schema_parse(source.as_ptr(), ptr::null(), ptr::null(), 0) }
    }

    #[test]
    fn test_parse_table_over_c_abi() {
        let schema = parse("namespace a.b;\ntable T { x:int; }");
        unsafe {
            assert!(fbs_schema_is_success(schema));
            assert_eq!(text(fbs_schema_error(schema)), "");
            assert_eq!(fbs_struct_count(schema), 1);
            let info = fbs_get_struct(schema, 0);
            assert_eq!(text(info.name), "T");
            assert_eq!(text(info.qualified_name), "a.b.T");
            assert_eq!(text(info.namespace), "a.b");
            assert!(info.is_table);
            assert_eq!(info.field_count, 1);
            assert_eq!(info.position.line, 1);

            let field = fbs_get_field(schema, 0, 0);
            assert_eq!(text(field.name), "x");
            assert_eq!(text(field.type_name), "int");
            assert!(field.default_value.is_null());
            fbs_schema_destroy(schema);
        }
    }

    #[test]
    fn test_failed_parse_reports_error() {
        let schema = parse("table T { x:int;");
        unsafe {
            assert!(!fbs_schema_is_success(schema));
            assert!(!text(fbs_schema_error(schema)).is_empty());
            assert_eq!(fbs_struct_count(schema), 0);
            assert_eq!(fbs_enum_count(schema), 0);
            fbs_schema_destroy(schema);
        }
    }

    #[test]
    fn test_null_handle_yields_zero_values() {
        let null = ptr::null::<FbsSchema>();
        unsafe {
            assert!(!fbs_schema_is_success(null));
            assert_eq!(text(fbs_schema_error(null)), "");
            assert_eq!(fbs_struct_count(null), 0);
            assert_eq!(fbs_field_count(null, 0), 0);
            assert!(fbs_get_struct(null, 0).name.is_null());
            assert!(fbs_schema_root_type(null).is_null());
            assert_eq!(fbs_all_include_count(null), 0);
            assert_eq!(fbs_including_file_count(null), 0);
            assert_eq!(text(fbs_get_including_file(null, 0)), "");
            fbs_schema_destroy(ptr::null_mut());
        }
    }

    #[test]
    fn test_bad_indices_yield_sentinels() {
        let schema = parse("table T { x:int; }");
        unsafe {
            assert!(fbs_get_struct(schema, -1).name.is_null());
            assert!(fbs_get_struct(schema, 1).name.is_null());
            assert!(fbs_get_field(schema, 0, 5).name.is_null());
            assert_eq!(fbs_field_count(schema, -3), 0);
            assert_eq!(text(fbs_get_all_include(schema, -1)), "");
            fbs_schema_destroy(schema);
        }
    }

    #[test]
    fn test_union_discriminator_slot_is_zeroed() {
        let schema = parse("table A {} table B {} union U { A, B } table T { u:U; }");
        unsafe {
            let t = (0..fbs_struct_count(schema))
                .find(|&i| text(fbs_get_struct(schema, i).name) == "T")
                .unwrap();
            assert_eq!(fbs_field_count(schema, t), 2);
            assert!(fbs_get_field(schema, t, 0).name.is_null());
            assert_eq!(text(fbs_get_field(schema, t, 1).name), "u");

            assert_eq!(fbs_enum_count(schema), 1);
            let u = fbs_get_enum(schema, 0);
            assert!(u.is_union);
            assert_eq!(text(fbs_get_enum_value(schema, 0, 0).name), "A");
            fbs_schema_destroy(schema);
        }
    }

    #[test]
    fn test_attribute_documentation_over_c_abi() {
        let schema = parse("/// marks hot paths\nattribute \"hot\";\ntable T (hot) { x:int; }");
        let name = CString::new("hot").unwrap();
        let missing = CString::new("cold").unwrap();
        unsafe {
            assert_eq!(fbs_user_attribute_count(schema), 1);
            assert_eq!(text(fbs_get_user_attribute(schema, 0).name), "hot");
            assert_eq!(
                text(fbs_attribute_documentation(schema, name.as_ptr())),
                " marks hot paths"
            );
            assert_eq!(text(fbs_attribute_documentation(schema, missing.as_ptr())), "");
            fbs_schema_destroy(schema);
        }
    }

    #[test]
    fn test_service_over_c_abi() {
        let schema = parse(
            "table Req {} table Resp {}\nrpc_service Svc { Call(Req):Resp (streaming: \"server\"); }",
        );
        unsafe {
            assert_eq!(fbs_service_count(schema), 1);
            assert_eq!(fbs_method_count(schema, 0), 1);
            let method = fbs_get_method(schema, 0, 0);
            assert_eq!(text(method.name), "Call");
            assert_eq!(text(method.request.name), "Req");
            assert_eq!(text(method.response.name), "Resp");
            assert_eq!(text(method.streaming), "server");
            fbs_schema_destroy(schema);
        }
    }
}
