//! Source positions in exported records are 0-based.

use fbs_introspect::{Position, Span};
use rstest::rstest;

use crate::helpers::{parse, parse_ok};

#[test]
fn test_column_fixture() {
    let handle = parse_ok("table T { x:int; }");
    assert_eq!(handle.get_struct(0).position, Position::new(0, 6));

    let x = handle.get_field(0, 0);
    assert_eq!(x.position, Position::new(0, 10));
    assert_eq!(x.type_span, Span::from_coords(0, 12, 0, 15));
    assert_eq!(x.type_source, "int");
}

#[test]
fn test_tenth_line_is_line_nine() {
    let text = format!("{}table T {{ x:int; }}", "\n".repeat(9));
    let handle = parse_ok(&text);
    assert_eq!(handle.get_struct(0).position.line, 9);
    assert_eq!(handle.get_field(0, 0).position.line, 9);
}

#[rstest]
#[case("table T {}", 0, 6)]
#[case("struct  S { a: int; }", 0, 8)]
#[case("\n\n  table Deep {}", 2, 8)]
fn test_struct_positions(#[case] text: &str, #[case] line: u32, #[case] column: u32) {
    let handle = parse_ok(text);
    assert_eq!(handle.get_struct(0).position, Position::new(line, column));
}

#[test]
fn test_enum_value_and_method_positions() {
    let handle = parse_ok(
        "enum E : int {\n  A,\n  B\n}\ntable Req {}\nrpc_service S {\n  Call(Req):Req;\n}",
    );
    assert_eq!(handle.get_enum(0).position, Position::new(0, 5));
    assert_eq!(handle.get_enum_value(0, 0).position, Position::new(1, 2));
    assert_eq!(handle.get_enum_value(0, 1).position, Position::new(2, 2));
    assert_eq!(handle.get_service(0).position, Position::new(5, 12));

    let call = handle.get_method(0, 0);
    assert_eq!(call.position, Position::new(6, 2));
    assert_eq!(call.request.span, Span::from_coords(6, 7, 6, 10));
    assert_eq!(call.response.source, "Req");
}

#[test]
fn test_error_keeps_parser_coordinates() {
    let handle = parse("table T {\n  m: Missing;\n}");
    assert!(!handle.is_success());
    let diagnostic = handle.diagnostic().expect("diagnostic");
    // exported positions are 0-based; the rendered message keeps 1-based lines
    assert_eq!(diagnostic.position, Position::new(1, 5));
    assert!(handle.error().starts_with("2: 5: error:"));
}
