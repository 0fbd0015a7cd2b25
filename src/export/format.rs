//! Canonical text for resolved type references.

use std::fmt::Write;

use crate::schema::{Schema, TypeRef};

/// Render `ty` as schema text.
///
/// Named types are fully qualified, vectors become `[T]` and fixed arrays
/// `[T:N]`. A reference to a definition the schema does not hold falls back
/// to a bare keyword: the underlying type for enums, `struct` otherwise.
pub fn format_type(schema: &Schema, ty: &TypeRef) -> String {
    let mut out = String::new();
    write_type(schema, ty, &mut out);
    out
}

/// Render the element type of a vector or array, or `ty` itself.
///
/// Unwraps exactly one level: `[[int]]` gives `[int]`.
pub fn format_base_type(schema: &Schema, ty: &TypeRef) -> String {
    format_type(schema, ty.element())
}

fn write_type(schema: &Schema, ty: &TypeRef, out: &mut String) {
    match ty {
        TypeRef::Primitive(base) => out.push_str(base.keyword()),
        TypeRef::Struct(id) => match schema.struct_def(*id) {
            Some(def) => out.push_str(&def.qualified_name()),
            None => out.push_str("struct"),
        },
        TypeRef::Enum { def, repr } => match schema.enum_def(*def) {
            Some(def) => out.push_str(&def.qualified_name()),
            None => out.push_str(repr.keyword()),
        },
        TypeRef::Vector(element) => {
            out.push('[');
            write_type(schema, element, out);
            out.push(']');
        }
        TypeRef::Array(element, length) => {
            out.push('[');
            write_type(schema, element, out);
            let _ = write!(out, ":{length}]");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BaseType, EnumDef, EnumId, Namespace, StructDef, StructId};

    fn schema() -> Schema {
        let mut schema = Schema::new();
        schema.enums.push(EnumDef {
            name: "E".into(),
            namespace: Namespace::from(vec!["a", "b"]),
            underlying: BaseType::Short,
            ..EnumDef::default()
        });
        schema.structs.push(StructDef {
            name: "Monster".into(),
            is_table: true,
            ..StructDef::default()
        });
        schema
    }

    fn enum_e() -> TypeRef {
        TypeRef::Enum {
            def: EnumId(0),
            repr: BaseType::Short,
        }
    }

    #[test]
    fn test_vector_of_array_of_enum() {
        let ty = TypeRef::Vector(Box::new(TypeRef::Array(Box::new(enum_e()), 4)));
        assert_eq!(format_type(&schema(), &ty), "[[a.b.E:4]]");
    }

    #[test]
    fn test_base_type_unwraps_one_level() {
        let schema = schema();
        let nested = TypeRef::Vector(Box::new(TypeRef::Vector(Box::new(TypeRef::Primitive(
            BaseType::Int,
        )))));
        assert_eq!(format_base_type(&schema, &nested), "[int]");
        let monsters = TypeRef::Vector(Box::new(TypeRef::Struct(StructId(0))));
        assert_eq!(format_base_type(&schema, &monsters), "Monster");
        assert_eq!(format_base_type(&schema, &TypeRef::Primitive(BaseType::String)), "string");
    }

    #[test]
    fn test_dangling_references_fall_back_to_keywords() {
        let schema = schema();
        let ty = TypeRef::Enum {
            def: EnumId(9),
            repr: BaseType::UByte,
        };
        assert_eq!(format_type(&schema, &ty), "ubyte");
        assert_eq!(format_type(&schema, &TypeRef::Struct(StructId(9))), "struct");
    }
}
