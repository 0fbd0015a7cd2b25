//! Every failure carries a categorized error code.

use fbs_introspect::{ErrorCode, FbsParser, ParseOptions, SchemaParser};
use rstest::rstest;

fn error_code(text: &str) -> ErrorCode {
    match FbsParser::new().parse(text, &ParseOptions::default()) {
        Ok(_) => panic!("Parse unexpectedly succeeded: {text}"),
        Err(err) => err.code,
    }
}

// ============================================================================
// Lexical and structural errors
// ============================================================================

#[rstest]
#[case("table T { s: string = \"open; }", ErrorCode::E0102)]
#[case("table T { x:int; }\n$", ErrorCode::E0101)]
#[case("table T { x:int;", ErrorCode::E0202)]
#[case("table T { x int; }", ErrorCode::E0201)]
#[case("42", ErrorCode::E0203)]
#[case("table T {}\ninclude \"a.fbs\";", ErrorCode::E0503)]
fn test_syntax_errors(#[case] text: &str, #[case] code: ErrorCode) {
    assert_eq!(error_code(text), code, "for {text:?}");
}

#[rstest]
#[case(65)]
#[case(50_000)]
fn test_deep_type_nesting_fails_cleanly(#[case] depth: usize) {
    let text = format!(
        "table T {{ x: {}int{}; }}",
        "[".repeat(depth),
        "]".repeat(depth)
    );
    assert_eq!(error_code(&text), ErrorCode::E0204);
}

// ============================================================================
// Declaration errors
// ============================================================================

#[rstest]
#[case("table T {}\nstruct T {}", ErrorCode::E0301)]
#[case("enum E : int { A = 2, B = 1 }", ErrorCode::E0302)]
#[case("enum E : byte { A = 200 }", ErrorCode::E0303)]
#[case("enum E { A }", ErrorCode::E0304)]
#[case("table T (priority) {}", ErrorCode::E0305)]
#[case("table T { a: int (id: 0); b: int; }", ErrorCode::E0307)]
#[case("table T { s: string = 1; }", ErrorCode::E0308)]
fn test_declaration_errors(#[case] text: &str, #[case] code: ErrorCode) {
    assert_eq!(error_code(text), code, "for {text:?}");
}

// ============================================================================
// Type errors
// ============================================================================

#[rstest]
#[case("table T { m: Missing; }", ErrorCode::E0401)]
#[case("struct S { s: string; }", ErrorCode::E0402)]
#[case("enum E : int { A }\nunion U { E }", ErrorCode::E0403)]
#[case("table T { a: [int:4]; }", ErrorCode::E0404)]
#[case("table T { a: [[int]]; }", ErrorCode::E0405)]
#[case("enum E : float { A }", ErrorCode::E0407)]
#[case("struct S { a: int; }\nrpc_service Svc { Call(S):S; }", ErrorCode::E0408)]
#[case("struct Empty {}", ErrorCode::E0410)]
#[case(
    "struct A { a: [double:65535]; }\nstruct B { b: [A:65535]; }\nstruct C { c: [B:65535]; }\nstruct D { d: [C:65535]; }",
    ErrorCode::E0409
)]
fn test_type_errors(#[case] text: &str, #[case] code: ErrorCode) {
    assert_eq!(error_code(text), code, "for {text:?}");
}

// ============================================================================
// Schema-level errors
// ============================================================================

#[rstest]
#[case("include \"absent.fbs\";", ErrorCode::E0501)]
#[case("struct S { a: int; }\nroot_type S;", ErrorCode::E0601)]
#[case("file_identifier \"TOOLONG\";", ErrorCode::E0602)]
fn test_schema_errors(#[case] text: &str, #[case] code: ErrorCode) {
    assert_eq!(error_code(text), code, "for {text:?}");
}
