//! Canonical type-name rendering.

use fbs_introspect::schema::{BaseType, EnumDef, EnumId, Namespace, StructId};
use fbs_introspect::{Schema, TypeRef, format_base_type, format_type};
use rstest::rstest;

use crate::helpers::{parse_ok, struct_index};

fn schema_with_enum() -> (Schema, TypeRef) {
    let mut schema = Schema::new();
    schema.enums.push(EnumDef {
        name: "E".into(),
        namespace: Namespace::from(vec!["a", "b"]),
        underlying: BaseType::Int,
        ..EnumDef::default()
    });
    let e = TypeRef::Enum {
        def: EnumId(0),
        repr: BaseType::Int,
    };
    (schema, e)
}

#[test]
fn test_vector_of_enum_array() {
    let (schema, e) = schema_with_enum();
    let ty = TypeRef::Vector(Box::new(TypeRef::Array(Box::new(e), 4)));
    assert_eq!(format_type(&schema, &ty), "[[a.b.E:4]]");
    assert_eq!(format_base_type(&schema, &ty), "[a.b.E:4]");
}

#[test]
fn test_dangling_references_fall_back_to_keywords() {
    let schema = Schema::new();
    let e = TypeRef::Enum {
        def: EnumId(3),
        repr: BaseType::UShort,
    };
    assert_eq!(format_type(&schema, &e), "ushort");
    assert_eq!(format_type(&schema, &TypeRef::Struct(StructId(7))), "struct");
}

#[rstest]
#[case("a: bool;", "bool", "bool")]
#[case("a: int8;", "byte", "byte")]
#[case("a: float64;", "double", "double")]
#[case("a: string;", "string", "string")]
#[case("a: [string];", "[string]", "string")]
#[case("a: [ubyte];", "[ubyte]", "ubyte")]
#[case("a: ns.Inner;", "ns.Inner", "ns.Inner")]
#[case("a: [Inner];", "[ns.Inner]", "ns.Inner")]
fn test_table_field_type_names(
    #[case] field: &str,
    #[case] type_name: &str,
    #[case] base_type_name: &str,
) {
    let text = format!("namespace ns;\ntable Inner {{}}\ntable T {{ {field} }}");
    let handle = parse_ok(&text);
    let t = struct_index(&handle, "T");
    let info = handle.get_field(t, 0);
    assert_eq!(info.type_name, type_name);
    assert_eq!(info.base_type_name, base_type_name);
}

#[test]
fn test_struct_array_field() {
    let handle = parse_ok("namespace a.b;\nenum E : int { X }\nstruct S { e: [E:4]; }");
    let field = handle.get_field(0, 0);
    assert_eq!(field.type_name, "[a.b.E:4]");
    assert_eq!(field.base_type_name, "a.b.E");
    assert_eq!(field.type_source, "[E:4]");
}
