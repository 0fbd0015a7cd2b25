//! Parser Tests - accepted schema forms

use fbs_introspect::{FbsParser, ParseOptions, SchemaParser};
use rstest::rstest;

fn parses_schema(input: &str) -> bool {
    FbsParser::new()
        .parse(input, &ParseOptions::default())
        .is_ok()
}

// ============================================================================
// Tables and structs
// ============================================================================

#[rstest]
#[case("table T {}")]
#[case("table T { a: int; b: string; }")]
#[case("table T { a: int = 5; b: float = 1.5; c: bool = true; }")]
#[case("table T { a: short = -5 (deprecated); }")]
#[case("table T { a: int (id: 1); b: int (id: 0); }")]
#[case("table T { hex: uint = 0xFF; }")]
#[case("struct S { a: int; b: byte; }")]
#[case("struct S (force_align: 8) { a: int; }")]
#[case("struct S { a: [int:3]; }")]
fn test_tables_and_structs(#[case] input: &str) {
    assert!(parses_schema(input), "Failed to parse: {}", input);
}

// ============================================================================
// Enums and unions
// ============================================================================

#[rstest]
#[case("enum E : byte { A, B, C }")]
#[case("enum E : ubyte { A = 1, B = 2, }")]
#[case("enum E : uint (bit_flags) { A, B, C }")]
#[case("table A {} table B {} union U { A, B }")]
#[case("table A {} union U { Alias: A }")]
#[case("namespace m; table Image {} namespace n; union U { m.Image }")]
fn test_enums_and_unions(#[case] input: &str) {
    assert!(parses_schema(input), "Failed to parse: {}", input);
}

// ============================================================================
// Top-level declarations
// ============================================================================

#[rstest]
#[case("namespace a.b.c;")]
#[case("attribute \"priority\";")]
#[case("attribute priority;")]
#[case("table M {} root_type M;")]
#[case("file_identifier \"ABCD\";")]
#[case("file_extension \"bin\";")]
#[case("native_include \"x.h\";")]
#[case("// comment\n/* block */\ntable T {}")]
#[case("table Req {} rpc_service S { Get(Req):Req; }")]
fn test_top_level(#[case] input: &str) {
    assert!(parses_schema(input), "Failed to parse: {}", input);
}
