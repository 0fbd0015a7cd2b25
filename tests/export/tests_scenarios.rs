//! End-to-end scenarios through `SchemaHandle`.

use crate::helpers::schema_fixtures::{MONSTER, SINGLE_TABLE, UNION_FIELD, UNTERMINATED_BODY};
use crate::helpers::{enum_index, init_tracing, parse, parse_ok, struct_index};

// ============================================================================
// Single table
// ============================================================================

#[test]
fn test_single_table() {
    init_tracing();
    let handle = parse_ok(SINGLE_TABLE);

    assert_eq!(handle.struct_count(), 1);
    let t = handle.get_struct(0);
    assert_eq!(t.name, "T");
    assert_eq!(t.qualified_name, "T");
    assert_eq!(t.namespace, None);
    assert!(t.is_table);
    assert!(!t.is_struct);
    assert_eq!(t.field_count, 1);

    let x = handle.get_field(0, 0);
    assert_eq!(x.name, "x");
    assert_eq!(x.type_name, "int");
    assert_eq!(x.base_type_name, "int");
    assert_eq!(x.default_value, None);

    assert_eq!(handle.enum_count(), 0);
    assert_eq!(handle.service_count(), 0);
    assert_eq!(handle.error(), "");
    handle.destroy();
}

// ============================================================================
// Unions and the synthetic discriminator
// ============================================================================

#[test]
fn test_union_field_hides_discriminator() {
    let handle = parse_ok(UNION_FIELD);

    let u = enum_index(&handle, "U");
    let info = handle.get_enum(u);
    assert!(info.is_union);
    assert_eq!(info.value_count, 2);
    assert_eq!(handle.get_enum_value(u, 0).name, "A");
    assert_eq!(handle.get_enum_value(u, 1).name, "B");

    let t = struct_index(&handle, "T");
    assert_eq!(handle.field_count(t), 2);
    assert_eq!(handle.get_field(t, 0), Default::default());
    assert!(handle.field_info(t, 0).is_none());

    let field = handle.get_field(t, 1);
    assert_eq!(field.name, "u");
    assert_eq!(field.type_name, "U");

    let visible: Vec<_> = handle.fields(t).map(|f| f.name).collect();
    assert_eq!(visible, ["u"]);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unterminated_body_fails() {
    let handle = parse(UNTERMINATED_BODY);
    assert!(!handle.is_success());
    assert!(!handle.error().is_empty());
    assert!(handle.error().contains("end of file"));
    assert_eq!(handle.struct_count(), 0);
    assert_eq!(handle.enum_count(), 0);
    assert_eq!(handle.all_include_count(), 0);
    assert!(handle.root_type().is_none());
}

#[test]
fn test_empty_schema_succeeds() {
    let handle = parse_ok("");
    assert_eq!(handle.struct_count(), 0);
    assert_eq!(handle.get_struct(0), Default::default());
}

// ============================================================================
// A realistic schema
// ============================================================================

#[test]
fn test_monster_schema() {
    let handle = parse_ok(MONSTER);

    let monster = handle.get_struct(struct_index(&handle, "Monster"));
    assert_eq!(monster.qualified_name, "game.sample.Monster");
    assert_eq!(monster.namespace, Some("game.sample"));
    assert_eq!(monster.doc, " The main character");

    let vec3 = handle.get_struct(struct_index(&handle, "Vec3"));
    assert!(vec3.is_struct);
    assert_eq!(vec3.bytesize, 12);
    assert_eq!(vec3.minalign, 4);

    let color = handle.get_enum(enum_index(&handle, "Color"));
    assert_eq!(color.underlying_type, "byte");
    assert_eq!(color.doc, " An RGB color");
    let values: Vec<_> = (0..color.value_count)
        .map(|i| {
            let v = handle.get_enum_value(enum_index(&handle, "Color"), i);
            (v.name, v.value)
        })
        .collect();
    assert_eq!(values, [("Red", 1), ("Green", 2), ("Blue", 8)]);

    let root = handle.root_type().expect("root type");
    assert_eq!(root.name, "game.sample.Monster");
    assert_eq!(root.source, "Monster");
    assert_eq!(handle.file_identifier(), Some("MONS"));
    assert_eq!(handle.file_extension(), Some("mon"));
}

#[test]
fn test_monster_fields() {
    let handle = parse_ok(MONSTER);
    let m = struct_index(&handle, "Monster");

    let fields: Vec<_> = handle.fields(m).map(|f| (f.name, f.type_name)).collect();
    assert_eq!(
        fields,
        [
            ("pos", "game.sample.Vec3"),
            ("mana", "short"),
            ("hp", "short"),
            ("name", "string"),
            ("inventory", "[ubyte]"),
            ("color", "game.sample.Color"),
            ("weapons", "[game.sample.Weapon]"),
            ("equipped", "game.sample.Equipment"),
            ("path", "[game.sample.Vec3]"),
        ]
    );

    let name = handle.fields(m).find(|f| f.name == "name").unwrap();
    assert!(name.required);
    let color = handle.fields(m).find(|f| f.name == "color").unwrap();
    assert_eq!(color.default_value, Some("Blue"));
    let weapons = handle.fields(m).find(|f| f.name == "weapons").unwrap();
    assert_eq!(weapons.base_type_name, "game.sample.Weapon");
}

#[test]
fn test_union_value_labels() {
    let handle = parse_ok(MONSTER);
    let e = enum_index(&handle, "Equipment");
    let weapon = handle.get_enum_value(e, 0);
    assert_eq!(weapon.name, "game.sample.Weapon");
    assert_eq!(weapon.label, "Weapon");
    assert_eq!(weapon.value, 1);
    assert_eq!(handle.get_enum_value(e, 1), Default::default());
}
