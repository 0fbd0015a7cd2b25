//! Include graph queries against files on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use fbs_introspect::{ErrorCode, ParseOptions, SchemaHandle};
use tempfile::TempDir;

use crate::helpers::init_tracing;

fn write(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

fn key(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

#[test]
fn test_direct_and_flattened_includes() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.fbs", "include \"b.fbs\";\ntable A { b: B; }");
    write(dir.path(), "b.fbs", "table B {}");

    let root = "include \"a.fbs\";\ninclude \"b.fbs\";\ntable Root { a: A; }";
    let options = ParseOptions::new().with_include_path(dir.path());
    let handle = SchemaHandle::parse(root, &options);
    assert!(handle.is_success(), "{}", handle.error());

    let a = key(dir.path(), "a.fbs");
    let b = key(dir.path(), "b.fbs");

    assert_eq!(handle.include_count(""), 2);
    let direct: Vec<_> = handle.includes("").collect();
    assert_eq!(direct, [a.as_str(), b.as_str()]);

    assert_eq!(handle.include_count(&a), 1);
    assert_eq!(handle.get_include(&a, 0), b);
    assert_eq!(handle.include_count(&b), 0);

    assert_eq!(handle.all_include_count(), 3);
    let all: Vec<_> = (0..3).map(|i| handle.get_all_include(i)).collect();
    assert_eq!(all.iter().filter(|&&f| f == b).count(), 2);
    assert_eq!(handle.get_all_include(3), "");

    // B is parsed once even though two files include it
    assert_eq!(handle.struct_count(), 3);
    let b_struct = (0..handle.struct_count())
        .map(|i| handle.get_struct(i))
        .find(|s| s.name == "B")
        .unwrap();
    assert_eq!(b_struct.file, b);
}

#[test]
fn test_include_graph_rebuilds_from_including_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.fbs", "include \"b.fbs\";\ntable A { b: B; }");
    write(dir.path(), "b.fbs", "table B {}");

    let root = "include \"a.fbs\";\ninclude \"b.fbs\";\ntable Root { a: A; }";
    let options = ParseOptions::new().with_include_path(dir.path());
    let handle = SchemaHandle::parse(root, &options);
    assert!(handle.is_success(), "{}", handle.error());

    let graph: BTreeMap<&str, Vec<&str>> = (0..handle.including_file_count())
        .map(|i| handle.get_including_file(i))
        .map(|file| (file, handle.includes(file).collect()))
        .collect();

    let a = key(dir.path(), "a.fbs");
    let b = key(dir.path(), "b.fbs");
    let expected = BTreeMap::from([
        ("", vec![a.as_str(), b.as_str()]),
        (a.as_str(), vec![b.as_str()]),
    ]);
    assert_eq!(graph, expected);
    assert_eq!(handle.root_file(), "");
    assert_eq!(handle.get_including_file(2), "");
}

#[test]
fn test_includes_resolve_next_to_the_root_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "common.fbs", "namespace common;\nstruct Id { v: ulong; }");
    let root_path = dir.path().join("root.fbs");

    let options = ParseOptions::new().with_filename(&root_path);
    let handle = SchemaHandle::parse(
        "include \"common.fbs\";\ntable T { id: common.Id; }",
        &options,
    );
    assert!(handle.is_success(), "{}", handle.error());

    let root = root_path.to_string_lossy().into_owned();
    assert_eq!(handle.include_count(&root), 1);
    assert_eq!(handle.include_count(""), 0);
    assert_eq!(handle.get_include(&root, 0), key(dir.path(), "common.fbs"));
    assert_eq!(handle.root_file(), root);
    assert_eq!(handle.get_including_file(0), root);
}

#[test]
fn test_unknown_file_has_no_includes() {
    let handle = SchemaHandle::parse("table T {}", &ParseOptions::default());
    assert_eq!(handle.include_count("nowhere.fbs"), 0);
    assert_eq!(handle.get_include("nowhere.fbs", 0), "");
    assert_eq!(handle.all_include_count(), 0);
}

#[test]
fn test_missing_include_fails() {
    let handle = SchemaHandle::parse("include \"absent.fbs\";", &ParseOptions::default());
    assert!(!handle.is_success());
    assert_eq!(handle.diagnostic().map(|d| d.code), Some(ErrorCode::E0501));
    assert!(handle.error().contains("absent.fbs"));
}
