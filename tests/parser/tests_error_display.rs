//! Tests for error display format

use fbs_introspect::{FbsParser, ParseOptions, SchemaError, SchemaParser};

fn parse_error(text: &str, options: &ParseOptions) -> SchemaError {
    FbsParser::new()
        .parse(text, options)
        .expect_err("parse should fail")
}

#[test]
fn test_in_memory_error_has_no_file_prefix() {
    let err = parse_error("table T { x:int;", &ParseOptions::default());
    assert_eq!(
        err.to_string(),
        "1: 16: error: expecting: } instead got: end of file"
    );
}

#[test]
fn test_named_file_error_has_file_prefix() {
    let options = ParseOptions::new().with_filename("schemas/monster.fbs");
    let err = parse_error("table T {}\nstruct T {}", &options);
    assert_eq!(
        err.to_string(),
        "schemas/monster.fbs:2: 7: error: datatype already exists: T"
    );
}

#[test]
fn test_undeclared_attribute_has_hint() {
    let err = parse_error("table T (priority) {}", &ParseOptions::default());
    assert!(err.has_hint());
    assert!(err.message.contains("priority"));
}
