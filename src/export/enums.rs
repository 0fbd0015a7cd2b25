//! Enum, union and enum value enumeration.

use super::handle::SchemaHandle;
use super::records::{EnumInfo, EnumValueInfo, Header, position, span};
use crate::base::{IStr, Position, Span, StringPool};
use crate::schema::{EnumDef, EnumVal, Schema};

#[derive(Debug)]
pub(super) struct RenderedEnum {
    header: Header,
    is_union: bool,
    underlying_type: IStr,
    values: Vec<RenderedValue>,
}

#[derive(Debug)]
struct RenderedValue {
    name: IStr,
    label: IStr,
    doc: IStr,
    value: i64,
    position: Position,
    type_span: Span,
    type_source: IStr,
}

impl RenderedEnum {
    pub(super) fn render(schema: &Schema, def: &EnumDef, pool: &mut StringPool) -> Self {
        Self {
            header: Header::render(pool, &def.name, &def.namespace, &def.file, &def.doc, def.loc),
            is_union: def.is_union,
            underlying_type: pool.intern(def.underlying.keyword()),
            values: def
                .values
                .iter()
                .map(|value| RenderedValue::render(schema, value, pool))
                .collect(),
        }
    }

    fn info(&self) -> EnumInfo<'_> {
        EnumInfo {
            name: &self.header.name,
            qualified_name: &self.header.qualified_name,
            namespace: self.header.namespace(),
            file: &self.header.file,
            doc: &self.header.doc,
            position: self.header.position,
            is_union: self.is_union,
            underlying_type: &self.underlying_type,
            value_count: self.values.len(),
        }
    }
}

impl RenderedValue {
    /// Union members are exported under the name of the type they carry.
    fn render(schema: &Schema, def: &EnumVal, pool: &mut StringPool) -> Self {
        let label = pool.intern(&def.name);
        let name = match def.union_type.and_then(|id| schema.struct_def(id)) {
            Some(member) => pool.intern_string(member.qualified_name()),
            None => label.clone(),
        };
        Self {
            name,
            label,
            doc: pool.intern_doc(&def.doc),
            value: def.value,
            position: position(def.loc),
            type_span: span(def.type_span),
            type_source: pool.intern(&def.type_source),
        }
    }

    fn info<'a>(&'a self, owner: &'a Header) -> EnumValueInfo<'a> {
        EnumValueInfo {
            name: &self.name,
            label: &self.label,
            namespace: owner.namespace(),
            file: &owner.file,
            doc: &self.doc,
            value: self.value,
            position: self.position,
            type_span: self.type_span,
            type_source: &self.type_source,
        }
    }
}

impl SchemaHandle {
    /// Number of enums and unions, in declaration order across all files
    pub fn enum_count(&self) -> usize {
        self.exports().enums.len()
    }

    /// The enum at `index`, or the empty sentinel when out of range
    pub fn get_enum(&self, index: usize) -> EnumInfo<'_> {
        self.enum_info(index).unwrap_or_default()
    }

    pub fn enum_info(&self, index: usize) -> Option<EnumInfo<'_>> {
        self.exports().enums.get(index).map(RenderedEnum::info)
    }

    /// Number of values of an enum; 0 when `enum_index` is out of range
    pub fn enum_value_count(&self, enum_index: usize) -> usize {
        self.exports()
            .enums
            .get(enum_index)
            .map_or(0, |e| e.values.len())
    }

    pub fn get_enum_value(&self, enum_index: usize, index: usize) -> EnumValueInfo<'_> {
        self.enum_value_info(enum_index, index).unwrap_or_default()
    }

    pub fn enum_value_info(&self, enum_index: usize, index: usize) -> Option<EnumValueInfo<'_>> {
        let def = self.exports().enums.get(enum_index)?;
        def.values.get(index).map(|value| value.info(&def.header))
    }
}
