//! Byte size and alignment of fixed structs.
//!
//! Fields are laid out in declaration order, each padded to its own
//! alignment; the struct is then padded to its largest alignment, or to
//! `force_align` when given. Tables are not laid out inline and report
//! size 0, alignment 1.

use tracing::trace;

use super::model::{Schema, StructId, TypeRef};
use crate::parser::{ErrorCode, SchemaError};

/// Largest alignment `force_align` may request
const MAX_FORCE_ALIGN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    InProgress,
    Done,
}

/// Fill in `bytesize`, `minalign` and field offsets for every struct.
pub fn compute_layouts(schema: &mut Schema) -> Result<(), SchemaError> {
    let mut visits = vec![Visit::Pending; schema.structs.len()];
    for index in 0..schema.structs.len() {
        layout_struct(schema, StructId(index), &mut visits)?;
    }
    Ok(())
}

fn layout_struct(
    schema: &mut Schema,
    id: StructId,
    visits: &mut [Visit],
) -> Result<(usize, usize), SchemaError> {
    let def = &schema.structs[id.0];
    match visits[id.0] {
        Visit::Done => return Ok((def.bytesize, def.minalign)),
        Visit::InProgress => {
            return Err(SchemaError::new(
                ErrorCode::E0406,
                format!("struct contains itself: {}", def.qualified_name()),
                def.file.clone(),
                def.loc,
            ));
        }
        Visit::Pending => {}
    }
    if def.is_table {
        let def = &mut schema.structs[id.0];
        def.bytesize = 0;
        def.minalign = 1;
        visits[id.0] = Visit::Done;
        return Ok((0, 1));
    }

    if def.fields.is_empty() {
        return Err(SchemaError::new(
            ErrorCode::E0410,
            format!("size 0 structs not allowed: {}", def.qualified_name()),
            def.file.clone(),
            def.loc,
        ));
    }

    visits[id.0] = Visit::InProgress;
    let field_types: Vec<TypeRef> = def.fields.iter().map(|f| f.ty.clone()).collect();
    let mut offsets = Vec::with_capacity(field_types.len());
    let mut offset = 0usize;
    let mut minalign = 1usize;
    for ty in &field_types {
        let (size, align) = type_layout(schema, id, ty, visits)?;
        let start = pad_to(offset, align).ok_or_else(|| too_large(schema, id))?;
        offsets.push(start);
        offset = start.checked_add(size).ok_or_else(|| too_large(schema, id))?;
        minalign = minalign.max(align);
    }

    let def = &schema.structs[id.0];
    if let Some(value) = def.attributes.get("force_align") {
        let forced = value.as_deref().and_then(|v| v.parse::<usize>().ok());
        match forced {
            Some(align) if align.is_power_of_two() && align >= minalign && align <= MAX_FORCE_ALIGN => {
                minalign = align;
            }
            _ => {
                return Err(SchemaError::new(
                    ErrorCode::E0306,
                    format!(
                        "force_align must be a power of two integer ranging from the struct's natural alignment ({minalign}) to {MAX_FORCE_ALIGN}"
                    ),
                    def.file.clone(),
                    def.loc,
                ));
            }
        }
    }

    let bytesize = pad_to(offset, minalign).ok_or_else(|| too_large(schema, id))?;
    let def = &mut schema.structs[id.0];
    for (field, offset) in def.fields.iter_mut().zip(offsets) {
        field.offset = offset;
    }
    def.bytesize = bytesize;
    def.minalign = minalign;
    visits[id.0] = Visit::Done;
    trace!(name = %def.name, bytesize, minalign, "struct layout");
    Ok((bytesize, minalign))
}

fn too_large(schema: &Schema, id: StructId) -> SchemaError {
    let def = &schema.structs[id.0];
    SchemaError::new(
        ErrorCode::E0409,
        format!("struct size too large: {}", def.qualified_name()),
        def.file.clone(),
        def.loc,
    )
}

/// Inline size and alignment of a field type within struct `owner`
fn type_layout(
    schema: &mut Schema,
    owner: StructId,
    ty: &TypeRef,
    visits: &mut [Visit],
) -> Result<(usize, usize), SchemaError> {
    match ty {
        TypeRef::Primitive(base) => Ok((base.size(), base.size())),
        TypeRef::Enum { repr, .. } => Ok((repr.size(), repr.size())),
        TypeRef::Struct(id) => {
            if schema.structs.get(id.0).is_some_and(|s| s.is_table) {
                Ok((4, 4))
            } else {
                layout_struct(schema, *id, visits)
            }
        }
        TypeRef::Array(element, length) => {
            let (size, align) = type_layout(schema, owner, element, visits)?;
            let total = size
                .checked_mul(usize::from(*length))
                .ok_or_else(|| too_large(schema, owner))?;
            Ok((total, align))
        }
        TypeRef::Vector(_) => Ok((4, 4)),
    }
}

/// `offset` rounded up to a multiple of `align`; `None` on overflow
fn pad_to(offset: usize, align: usize) -> Option<usize> {
    offset.div_ceil(align).checked_mul(align)
}
