//! Hiding of compiler-generated union type fields.
//!
//! Every union field `u` comes with a hidden `u_type` field holding the
//! member tag. Those fields stay in the index space (so field indices match
//! declaration order) but are never presented.

use crate::schema::{FieldDef, Schema};

const DISCRIMINATOR_SUFFIX: &str = "_type";

/// Check if `field` is the hidden type field of a union field
pub fn is_union_discriminator(schema: &Schema, field: &FieldDef) -> bool {
    field.name.ends_with(DISCRIMINATOR_SUFFIX) && schema.is_union(&field.ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BaseType, EnumDef, EnumId, TypeRef};

    fn schema() -> Schema {
        let mut schema = Schema::new();
        schema.enums.push(EnumDef {
            name: "U".into(),
            is_union: true,
            underlying: BaseType::UByte,
            ..EnumDef::default()
        });
        schema.enums.push(EnumDef {
            name: "Color".into(),
            underlying: BaseType::Int,
            ..EnumDef::default()
        });
        schema
    }

    fn enum_ref(index: usize, repr: BaseType) -> TypeRef {
        TypeRef::Enum {
            def: EnumId(index),
            repr,
        }
    }

    #[test]
    fn test_union_type_field_is_hidden() {
        let field = FieldDef::new("u_type", enum_ref(0, BaseType::UByte));
        assert!(is_union_discriminator(&schema(), &field));
    }

    #[test]
    fn test_plain_enum_type_field_is_kept() {
        let field = FieldDef::new("color_type", enum_ref(1, BaseType::Int));
        assert!(!is_union_discriminator(&schema(), &field));
    }

    #[test]
    fn test_union_field_without_suffix_is_kept() {
        let field = FieldDef::new("u", enum_ref(0, BaseType::UByte));
        assert!(!is_union_discriminator(&schema(), &field));
        let scalar = FieldDef::new("kind_type", TypeRef::Primitive(BaseType::UByte));
        assert!(!is_union_discriminator(&schema(), &scalar));
    }
}
