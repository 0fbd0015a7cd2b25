//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod schema_fixtures;

use fbs_introspect::{ParseOptions, SchemaHandle};

/// Parse in-memory text with default options.
pub fn parse(text: &str) -> SchemaHandle {
    SchemaHandle::parse(text, &ParseOptions::default())
}

/// Parse text that must succeed.
pub fn parse_ok(text: &str) -> SchemaHandle {
    let handle = parse(text);
    assert!(handle.is_success(), "Parse failed: {}", handle.error());
    handle
}

/// Index of the struct or table named `name`.
pub fn struct_index(handle: &SchemaHandle, name: &str) -> usize {
    (0..handle.struct_count())
        .find(|&i| handle.get_struct(i).name == name)
        .unwrap_or_else(|| panic!("no struct named {name}"))
}

/// Index of the enum or union named `name`.
pub fn enum_index(handle: &SchemaHandle, name: &str) -> usize {
    (0..handle.enum_count())
        .find(|&i| handle.get_enum(i).name == name)
        .unwrap_or_else(|| panic!("no enum named {name}"))
}

/// Route `tracing` output to the test writer; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
