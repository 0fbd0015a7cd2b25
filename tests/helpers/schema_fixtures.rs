//! Common schema fixtures for tests.

pub const SINGLE_TABLE: &str = "table T { x:int; }";

pub const UNION_FIELD: &str = r#"
table A {}
table B {}
union U { A, B }
table T { u:U; }
"#;

pub const UNTERMINATED_BODY: &str = "table T { x:int;";

pub const MONSTER: &str = r#"
namespace game.sample;

/// An RGB color
enum Color : byte { Red = 1, Green, Blue = 8 }

struct Vec3 {
  x: float;
  y: float;
  z: float;
}

table Weapon {
  name: string;
  damage: short;
}

union Equipment { Weapon }

/// The main character
table Monster {
  pos: Vec3;
  mana: short = 150;
  hp: short = 100;
  name: string (required);
  inventory: [ubyte];
  color: Color = Blue;
  weapons: [Weapon];
  equipped: Equipment;
  path: [Vec3];
}

root_type Monster;
file_identifier "MONS";
file_extension "mon";
"#;
