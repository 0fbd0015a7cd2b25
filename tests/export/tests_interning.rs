//! Exported text is interned per handle.

use crate::helpers::{parse_ok, struct_index};

#[test]
fn test_equal_text_shares_one_allocation() {
    let handle = parse_ok("table T {}\ntable U { t: T; again: T; }");
    let t = handle.get_struct(struct_index(&handle, "T"));
    let u = struct_index(&handle, "U");

    assert_eq!(t.name.as_ptr(), t.qualified_name.as_ptr());
    assert_eq!(handle.get_field(u, 0).type_name.as_ptr(), t.name.as_ptr());
    assert_eq!(
        handle.get_field(u, 0).type_name.as_ptr(),
        handle.get_field(u, 1).type_name.as_ptr()
    );
}

#[test]
fn test_repeated_queries_return_the_same_text() {
    let handle = parse_ok("namespace a.b;\ntable T { x: int; }");
    let first = handle.get_struct(0).qualified_name;
    let second = handle.get_struct(0).qualified_name;
    assert_eq!(first.as_ptr(), second.as_ptr());
    assert_eq!(first, "a.b.T");

    let interned = handle.interned_len();
    let _ = handle.get_field(0, 0);
    assert_eq!(handle.interned_len(), interned);
}

#[test]
fn test_handles_do_not_share_pools() {
    let one = parse_ok("table T {}");
    let two = parse_ok("table T {}");
    assert_eq!(one.get_struct(0).name, two.get_struct(0).name);
    assert_ne!(one.get_struct(0).name.as_ptr(), two.get_struct(0).name.as_ptr());
}
