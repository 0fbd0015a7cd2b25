//! Struct, table and field enumeration.

use super::filter::is_union_discriminator;
use super::format::{format_base_type, format_type};
use super::handle::SchemaHandle;
use super::records::{FieldInfo, Header, StructInfo, position, span};
use crate::base::{IStr, Position, Span, StringPool};
use crate::schema::{FieldDef, Schema, StructDef};

#[derive(Debug)]
pub(super) struct RenderedStruct {
    header: Header,
    is_table: bool,
    is_predeclared: bool,
    bytesize: usize,
    minalign: usize,
    /// One slot per field; `None` where a union type field is hidden
    fields: Vec<Option<RenderedField>>,
}

#[derive(Debug)]
struct RenderedField {
    name: IStr,
    type_name: IStr,
    base_type_name: IStr,
    doc: IStr,
    position: Position,
    type_span: Span,
    type_source: IStr,
    deprecated: bool,
    required: bool,
    key: bool,
    id: Option<u16>,
    default_value: Option<IStr>,
    offset: usize,
}

impl RenderedStruct {
    pub(super) fn render(schema: &Schema, def: &StructDef, pool: &mut StringPool) -> Self {
        let header = Header::render(pool, &def.name, &def.namespace, &def.file, &def.doc, def.loc);
        let fields = def
            .fields
            .iter()
            .map(|field| {
                (!is_union_discriminator(schema, field))
                    .then(|| RenderedField::render(schema, field, pool))
            })
            .collect();
        Self {
            header,
            is_table: def.is_table,
            is_predeclared: def.is_predeclared,
            bytesize: def.bytesize,
            minalign: def.minalign,
            fields,
        }
    }

    fn info(&self) -> StructInfo<'_> {
        StructInfo {
            name: &self.header.name,
            qualified_name: &self.header.qualified_name,
            namespace: self.header.namespace(),
            file: &self.header.file,
            doc: &self.header.doc,
            position: self.header.position,
            is_table: self.is_table,
            is_struct: !self.is_table,
            is_predeclared: self.is_predeclared,
            bytesize: self.bytesize,
            minalign: self.minalign,
            field_count: self.fields.len(),
        }
    }

    fn field(&self, index: usize) -> Option<FieldInfo<'_>> {
        let field = self.fields.get(index)?.as_ref()?;
        Some(field.info(&self.header))
    }
}

impl RenderedField {
    fn render(schema: &Schema, def: &FieldDef, pool: &mut StringPool) -> Self {
        Self {
            name: pool.intern(&def.name),
            type_name: pool.intern_string(format_type(schema, &def.ty)),
            base_type_name: pool.intern_string(format_base_type(schema, &def.ty)),
            doc: pool.intern_doc(&def.doc),
            position: position(def.loc),
            type_span: span(def.type_span),
            type_source: pool.intern(&def.type_source),
            deprecated: def.deprecated,
            required: def.required,
            key: def.key,
            id: def.id,
            default_value: def.default.as_deref().map(|value| pool.intern(value)),
            offset: def.offset,
        }
    }

    fn info<'a>(&'a self, owner: &'a Header) -> FieldInfo<'a> {
        FieldInfo {
            name: &self.name,
            type_name: &self.type_name,
            base_type_name: &self.base_type_name,
            namespace: owner.namespace(),
            file: &owner.file,
            doc: &self.doc,
            position: self.position,
            type_span: self.type_span,
            type_source: &self.type_source,
            deprecated: self.deprecated,
            required: self.required,
            key: self.key,
            id: self.id,
            default_value: self.default_value.as_deref(),
            offset: self.offset,
        }
    }
}

impl SchemaHandle {
    /// Number of tables and structs, in declaration order across all files
    pub fn struct_count(&self) -> usize {
        self.exports().structs.len()
    }

    /// The struct at `index`, or the empty sentinel when out of range
    pub fn get_struct(&self, index: usize) -> StructInfo<'_> {
        self.struct_info(index).unwrap_or_default()
    }

    pub fn struct_info(&self, index: usize) -> Option<StructInfo<'_>> {
        self.exports().structs.get(index).map(RenderedStruct::info)
    }

    /// Number of field slots of a struct, hidden union type fields included.
    ///
    /// 0 when `struct_index` is out of range.
    pub fn field_count(&self, struct_index: usize) -> usize {
        self.exports()
            .structs
            .get(struct_index)
            .map_or(0, |s| s.fields.len())
    }

    /// The field at `index`.
    ///
    /// Hidden union type fields keep their slot and come back as the empty
    /// sentinel, so later indices still match declaration order.
    pub fn get_field(&self, struct_index: usize, index: usize) -> FieldInfo<'_> {
        self.field_info(struct_index, index).unwrap_or_default()
    }

    /// Like [`get_field`](Self::get_field), with `None` for out-of-range and
    /// hidden slots.
    pub fn field_info(&self, struct_index: usize, index: usize) -> Option<FieldInfo<'_>> {
        self.exports().structs.get(struct_index)?.field(index)
    }

    /// Visible fields of a struct, hidden slots skipped
    pub fn fields(&self, struct_index: usize) -> impl Iterator<Item = FieldInfo<'_>> + '_ {
        self.exports()
            .structs
            .get(struct_index)
            .into_iter()
            .flat_map(|s| {
                s.fields
                    .iter()
                    .flatten()
                    .map(move |field| field.info(&s.header))
            })
    }
}
