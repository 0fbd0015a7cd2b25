//! Name resolution and semantic checks.
//!
//! Turns parsed files into a [`Schema`] in two passes:
//!
//! 1. **Declare** - every table, struct, enum, union, service and attribute is
//!    registered under its qualified name, so declaration order never matters.
//! 2. **Resolve** - enums first (their underlying types feed field types),
//!    then fields, struct layout, services and the root type.
//!
//! Type names are looked up from the innermost enclosing namespace outward.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::layout::compute_layouts;
use super::model::*;
use crate::parser::ast::{
    AttributeUse, EnumDecl, Item, Literal, LiteralKind, ServiceDecl, StructDecl, TypeExpr,
    TypeExprKind,
};
use crate::parser::{ErrorCode, SchemaError, SchemaFile, SourceLoc};

type RResult<T> = Result<T, SchemaError>;

/// Something a type name can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeSymbol {
    Struct(StructId),
    Enum(EnumId),
}

/// A declaration waiting for the resolve pass
struct Pending<'a, D> {
    decl: &'a D,
    namespace: Namespace,
    file: SmolStr,
}

/// Resolve parsed files (dependency order, root last) into a schema.
///
/// `root` is the key of the root file: only its `root_type`,
/// `file_identifier` and `file_extension` are recorded.
pub fn resolve(files: &[SchemaFile], root: &str, includes: IncludeGraph) -> RResult<Schema> {
    let mut resolver = Resolver::new();
    resolver.schema.includes = includes;
    resolver.schema.root_file = SmolStr::new(root);
    for file in files {
        resolver.declare_file(file, root)?;
    }
    resolver.resolve_enums()?;
    resolver.resolve_structs()?;
    compute_layouts(&mut resolver.schema)?;
    resolver.resolve_services()?;
    resolver.resolve_root()?;

    debug!(
        structs = resolver.schema.structs.len(),
        enums = resolver.schema.enums.len(),
        services = resolver.schema.services.len(),
        "schema resolved"
    );
    Ok(resolver.schema)
}

struct Resolver<'a> {
    schema: Schema,
    types: FxHashMap<String, TypeSymbol>,
    service_names: FxHashMap<String, usize>,
    structs: Vec<Pending<'a, StructDecl>>,
    enums: Vec<Pending<'a, EnumDecl>>,
    services: Vec<Pending<'a, ServiceDecl>>,
    root_type: Option<Pending<'a, TypeExpr>>,
    file_identifier: Option<(&'a str, SourceLoc, SmolStr)>,
}

impl<'a> Resolver<'a> {
    fn new() -> Self {
        Self {
            schema: Schema::new(),
            types: FxHashMap::default(),
            service_names: FxHashMap::default(),
            structs: Vec::new(),
            enums: Vec::new(),
            services: Vec::new(),
            root_type: None,
            file_identifier: None,
        }
    }

    // =========================================================================
    // Pass 1: declare
    // =========================================================================

    fn declare_file(&mut self, file: &'a SchemaFile, root: &str) -> RResult<()> {
        let is_root = file.path == root;
        let mut namespace = Namespace::default();

        for item in &file.items {
            match item {
                Item::Include(_) => {}
                Item::Namespace(decl) => namespace = Namespace::new(decl.components.clone()),
                Item::Attribute(decl) => {
                    self.schema
                        .attributes
                        .declare(decl.name.text.clone(), decl.doc.clone());
                }
                Item::Struct(decl) => {
                    let qualified = namespace.qualify(&decl.name.text);
                    let id = StructId(self.schema.structs.len());
                    self.declare_type(qualified, TypeSymbol::Struct(id), &file.path, decl.name.loc)?;
                    self.schema.structs.push(StructDef {
                        name: decl.name.text.clone(),
                        namespace: namespace.clone(),
                        file: file.path.clone(),
                        doc: decl.doc.clone(),
                        loc: decl.name.loc,
                        is_table: decl.is_table,
                        minalign: 1,
                        ..StructDef::default()
                    });
                    self.structs.push(Pending {
                        decl,
                        namespace: namespace.clone(),
                        file: file.path.clone(),
                    });
                }
                Item::Enum(decl) => {
                    let qualified = namespace.qualify(&decl.name.text);
                    let id = EnumId(self.schema.enums.len());
                    self.declare_type(qualified, TypeSymbol::Enum(id), &file.path, decl.name.loc)?;
                    self.schema.enums.push(EnumDef {
                        name: decl.name.text.clone(),
                        namespace: namespace.clone(),
                        file: file.path.clone(),
                        doc: decl.doc.clone(),
                        loc: decl.name.loc,
                        is_union: decl.is_union,
                        underlying: BaseType::UByte,
                        ..EnumDef::default()
                    });
                    self.enums.push(Pending {
                        decl,
                        namespace: namespace.clone(),
                        file: file.path.clone(),
                    });
                }
                Item::Service(decl) => {
                    let qualified = namespace.qualify(&decl.name.text);
                    if self.service_names.contains_key(&qualified) {
                        return Err(error(
                            ErrorCode::E0301,
                            format!("service already exists: {qualified}"),
                            &file.path,
                            decl.name.loc,
                        ));
                    }
                    self.service_names.insert(qualified, self.schema.services.len());
                    self.schema.services.push(ServiceDef {
                        name: decl.name.text.clone(),
                        namespace: namespace.clone(),
                        file: file.path.clone(),
                        doc: decl.doc.clone(),
                        loc: decl.name.loc,
                        ..ServiceDef::default()
                    });
                    self.services.push(Pending {
                        decl,
                        namespace: namespace.clone(),
                        file: file.path.clone(),
                    });
                }
                Item::RootType(ty) if is_root => {
                    self.root_type = Some(Pending {
                        decl: ty,
                        namespace: namespace.clone(),
                        file: file.path.clone(),
                    });
                }
                Item::FileIdentifier(value) if is_root => {
                    self.file_identifier = Some((value.value.as_str(), value.loc, file.path.clone()));
                }
                Item::FileExtension(value) if is_root => {
                    let extension = value.value.trim_start_matches('.');
                    self.schema.file_extension = Some(SmolStr::new(extension));
                }
                Item::RootType(_) | Item::FileIdentifier(_) | Item::FileExtension(_) => {}
            }
        }
        Ok(())
    }

    fn declare_type(
        &mut self,
        qualified: String,
        symbol: TypeSymbol,
        file: &SmolStr,
        loc: SourceLoc,
    ) -> RResult<()> {
        if self.types.contains_key(&qualified) {
            return Err(error(
                ErrorCode::E0301,
                format!("datatype already exists: {qualified}"),
                file,
                loc,
            ));
        }
        trace!(name = %qualified, "declared type");
        self.types.insert(qualified, symbol);
        Ok(())
    }

    // =========================================================================
    // Pass 2: resolve
    // =========================================================================

    fn resolve_enums(&mut self) -> RResult<()> {
        for index in 0..self.enums.len() {
            let Pending {
                decl,
                ref namespace,
                ref file,
            } = self.enums[index];
            let attributes = self.check_attributes(&decl.attributes, file)?;
            let underlying = self.underlying_type(decl, file)?;
            let bit_flags = attributes.contains_key("bit_flags");

            let mut values: Vec<EnumVal> = Vec::with_capacity(decl.values.len());
            let mut next: i128 = if decl.is_union { 1 } else { 0 };
            let mut previous: Option<i128> = None;
            for value in &decl.values {
                if values.iter().any(|v| v.name == value.name.text) {
                    return Err(error(
                        ErrorCode::E0301,
                        format!("enum value already exists: {}", value.name.text),
                        file,
                        value.name.loc,
                    ));
                }

                let ordinal = match &value.value {
                    Some(literal) => literal.as_integer().ok_or_else(|| {
                        error(
                            ErrorCode::E0303,
                            format!("enum value out of range: {}", literal.text),
                            file,
                            literal.loc,
                        )
                    })?,
                    None => next,
                };
                if previous.is_some_and(|prev| ordinal <= prev) {
                    return Err(error(
                        ErrorCode::E0302,
                        "enum values must be specified in ascending order",
                        file,
                        value.name.loc,
                    ));
                }

                let actual = if bit_flags {
                    let bits = (underlying.size() * 8) as i128;
                    if !(0..bits).contains(&ordinal) {
                        return Err(error(
                            ErrorCode::E0303,
                            format!("bit flag out of range of underlying type: {ordinal}"),
                            file,
                            value.name.loc,
                        ));
                    }
                    1i128 << ordinal
                } else {
                    ordinal
                };
                if let Some((min, max)) = underlying.integer_range() {
                    if !(min..=max).contains(&actual) {
                        return Err(error(
                            ErrorCode::E0303,
                            format!("enum value does not fit [\"{min}\"; \"{max}\"]"),
                            file,
                            value.name.loc,
                        ));
                    }
                }

                let mut resolved = EnumVal {
                    name: value.name.text.clone(),
                    doc: value.doc.clone(),
                    value: actual as i64,
                    loc: value.name.loc,
                    ..EnumVal::default()
                };
                if let Some(member) = &value.member {
                    resolved.union_type = Some(self.union_member(member, namespace, file)?);
                    resolved.type_span = member.span;
                    resolved.type_source = SmolStr::new(&member.source);
                }
                values.push(resolved);
                previous = Some(ordinal);
                next = ordinal + 1;
            }

            let def = &mut self.schema.enums[index];
            def.underlying = underlying;
            def.values = values;
            def.attributes = attributes;
        }
        Ok(())
    }

    fn underlying_type(&self, decl: &EnumDecl, file: &SmolStr) -> RResult<BaseType> {
        if decl.is_union {
            return Ok(BaseType::UByte);
        }
        let Some(expr) = &decl.underlying else {
            return Err(error(
                ErrorCode::E0304,
                "must specify the underlying integer type for an enum",
                file,
                decl.name.loc,
            )
            .with_hint(format!("write `enum {} : int {{ ... }}`", decl.name.text)));
        };
        match expr.path() {
            Some([name]) => match BaseType::from_name(name) {
                Some(base) if base.is_integer() => Ok(base),
                _ => Err(error(
                    ErrorCode::E0407,
                    format!("underlying enum type must be integral: {}", expr.source),
                    file,
                    expr.span.start,
                )),
            },
            _ => Err(error(
                ErrorCode::E0407,
                format!("underlying enum type must be integral: {}", expr.source),
                file,
                expr.span.start,
            )),
        }
    }

    fn union_member(
        &self,
        member: &TypeExpr,
        namespace: &Namespace,
        file: &SmolStr,
    ) -> RResult<StructId> {
        match self.resolve_type(member, namespace, file)? {
            TypeRef::Struct(id) => Ok(id),
            _ => Err(error(
                ErrorCode::E0403,
                format!("type referenced by union must be a table or struct: {}", member.source),
                file,
                member.span.start,
            )),
        }
    }

    fn resolve_structs(&mut self) -> RResult<()> {
        for index in 0..self.structs.len() {
            let Pending {
                decl,
                ref namespace,
                ref file,
            } = self.structs[index];
            let attributes = self.check_attributes(&decl.attributes, file)?;

            let mut fields: Vec<FieldDef> = Vec::with_capacity(decl.fields.len());
            let mut explicit_ids = 0usize;
            for field in &decl.fields {
                let ty = self.resolve_type(&field.ty, namespace, file)?;
                self.check_placement(decl, &field.ty, &ty, file)?;

                let field_attributes = self.check_attributes(&field.attributes, file)?;
                let id = field_id(&field.attributes, file)?;
                if id.is_some() {
                    explicit_ids += 1;
                }

                let mut def = FieldDef::new(field.name.text.clone(), ty);
                def.doc = field.doc.clone();
                def.loc = field.name.loc;
                def.type_span = field.ty.span;
                def.type_source = SmolStr::new(&field.ty.source);
                def.deprecated = field_attributes.contains_key("deprecated");
                def.required = field_attributes.contains_key("required");
                def.key = field_attributes.contains_key("key");
                def.id = id;
                def.default = match &field.default {
                    Some(literal) => Some(self.check_default(&def.ty, literal, &def.name, file)?),
                    None => None,
                };
                def.attributes = field_attributes;

                if self.schema.is_union(&def.ty) {
                    let discriminator = self.discriminator_field(&def, file)?;
                    push_field(&mut fields, discriminator, file)?;
                }
                push_field(&mut fields, def, file)?;
            }

            if explicit_ids > 0 {
                check_ids(decl, &fields, explicit_ids, file)?;
            }

            let def = &mut self.schema.structs[index];
            def.fields = fields;
            def.attributes = attributes;
        }
        Ok(())
    }

    /// The hidden `<name>_type` field that stores which union member is set
    fn discriminator_field(&self, union_field: &FieldDef, file: &SmolStr) -> RResult<FieldDef> {
        let id = match union_field.id {
            Some(0) => {
                return Err(error(
                    ErrorCode::E0306,
                    format!(
                        "union field {} needs an id of at least 1 to leave room for its type field",
                        union_field.name
                    ),
                    file,
                    union_field.loc,
                ));
            }
            Some(id) => Some(id - 1),
            None => None,
        };
        let mut field = FieldDef::new(
            format!("{}_type", union_field.name),
            union_field.ty.clone(),
        );
        field.loc = union_field.loc;
        field.type_span = union_field.type_span;
        field.type_source = union_field.type_source.clone();
        field.deprecated = union_field.deprecated;
        field.id = id;
        Ok(field)
    }

    fn check_placement(
        &self,
        owner: &StructDecl,
        expr: &TypeExpr,
        ty: &TypeRef,
        file: &SmolStr,
    ) -> RResult<()> {
        if owner.is_table {
            if matches!(ty, TypeRef::Array(..)) {
                return Err(error(
                    ErrorCode::E0404,
                    "fixed-length array in table must be wrapped in struct",
                    file,
                    expr.span.start,
                ));
            }
            return Ok(());
        }
        if !self.fits_in_struct(ty) {
            return Err(error(
                ErrorCode::E0402,
                format!(
                    "structs may contain only scalar or struct fields: {}",
                    expr.source
                ),
                file,
                expr.span.start,
            ));
        }
        Ok(())
    }

    fn fits_in_struct(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Primitive(base) => base.is_scalar(),
            TypeRef::Enum { def, .. } => self.schema.enum_def(*def).is_some_and(|e| !e.is_union),
            TypeRef::Struct(id) => self.schema.struct_def(*id).is_some_and(StructDef::is_struct),
            TypeRef::Array(element, _) => self.fits_in_struct(element),
            TypeRef::Vector(_) => false,
        }
    }

    fn check_default(
        &self,
        ty: &TypeRef,
        literal: &Literal,
        field: &str,
        file: &SmolStr,
    ) -> RResult<SmolStr> {
        let is_null = literal.kind == LiteralKind::Ident && literal.text == "null";
        let valid = match ty {
            TypeRef::Primitive(BaseType::Bool) => {
                matches!(literal.kind, LiteralKind::Bool)
                    || matches!(literal.text.as_str(), "0" | "1")
                    || is_null
            }
            TypeRef::Primitive(base) if base.is_integer() => {
                literal.kind == LiteralKind::Integer || is_null
            }
            TypeRef::Primitive(base) if base.is_float() => match literal.kind {
                LiteralKind::Integer | LiteralKind::Float => true,
                LiteralKind::Ident => {
                    let word = literal.text.trim_start_matches(['+', '-']);
                    matches!(word, "nan" | "inf" | "infinity") || is_null
                }
                _ => false,
            },
            TypeRef::Enum { def, .. } => {
                let Some(def) = self.schema.enum_def(*def).filter(|e| !e.is_union) else {
                    return Err(default_error(literal, field, file));
                };
                match literal.kind {
                    LiteralKind::Integer => true,
                    LiteralKind::Ident => def.value_by_name(&literal.text).is_some() || is_null,
                    _ => false,
                }
            }
            _ => {
                return Err(error(
                    ErrorCode::E0308,
                    format!("default values are only supported for scalar and enum fields: {field}"),
                    file,
                    literal.loc,
                ));
            }
        };
        if !valid {
            return Err(default_error(literal, field, file));
        }
        Ok(SmolStr::new(&literal.text))
    }

    fn resolve_services(&mut self) -> RResult<()> {
        for index in 0..self.services.len() {
            let Pending {
                decl,
                ref namespace,
                ref file,
            } = self.services[index];
            let attributes = self.check_attributes(&decl.attributes, file)?;

            let mut methods = Vec::with_capacity(decl.methods.len());
            for method in &decl.methods {
                let method_attributes = self.check_attributes(&method.attributes, file)?;
                if let Some(streaming) = method_attributes.get("streaming") {
                    let valid = matches!(
                        streaming.as_deref(),
                        Some("none" | "client" | "server" | "bidi")
                    );
                    if !valid {
                        return Err(error(
                            ErrorCode::E0306,
                            "streaming rpc must be one of: none, client, server, bidi",
                            file,
                            method.name.loc,
                        ));
                    }
                }
                methods.push(RpcMethod {
                    name: method.name.text.clone(),
                    doc: method.doc.clone(),
                    loc: method.name.loc,
                    request: self.rpc_type(&method.request, namespace, file)?,
                    response: self.rpc_type(&method.response, namespace, file)?,
                    attributes: method_attributes,
                });
            }

            let def = &mut self.schema.services[index];
            def.methods = methods;
            def.attributes = attributes;
        }
        Ok(())
    }

    fn rpc_type(&self, expr: &TypeExpr, namespace: &Namespace, file: &SmolStr) -> RResult<RpcType> {
        match self.resolve_type(expr, namespace, file)? {
            TypeRef::Struct(id) if self.schema.struct_def(id).is_some_and(|s| s.is_table) => {
                Ok(RpcType {
                    ty: id,
                    span: expr.span,
                    source: SmolStr::new(&expr.source),
                })
            }
            _ => Err(error(
                ErrorCode::E0408,
                format!("rpc request and response types must be tables: {}", expr.source),
                file,
                expr.span.start,
            )),
        }
    }

    fn resolve_root(&mut self) -> RResult<()> {
        if let Some(Pending {
            decl,
            ref namespace,
            ref file,
        }) = self.root_type
        {
            let symbol = decl.path().and_then(|path| self.lookup(path, namespace));
            let id = match symbol {
                Some(TypeSymbol::Struct(id))
                    if self.schema.struct_def(id).is_some_and(|s| s.is_table) =>
                {
                    id
                }
                Some(_) => {
                    return Err(error(
                        ErrorCode::E0601,
                        format!("root type must be a table: {}", decl.source),
                        file,
                        decl.span.start,
                    ));
                }
                None => {
                    return Err(error(
                        ErrorCode::E0601,
                        format!("unknown root type: {}", decl.source),
                        file,
                        decl.span.start,
                    ));
                }
            };
            self.schema.root_type = Some(RootType {
                ty: id,
                file: file.clone(),
                span: decl.span,
                source: SmolStr::new(&decl.source),
            });
        }

        if let Some((identifier, loc, ref file)) = self.file_identifier {
            if identifier.len() != 4 {
                return Err(error(
                    ErrorCode::E0602,
                    format!("file_identifier must be exactly 4 characters: \"{identifier}\""),
                    file,
                    loc,
                ));
            }
            self.schema.file_identifier = Some(SmolStr::new(identifier));
        }
        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    fn resolve_type(&self, expr: &TypeExpr, namespace: &Namespace, file: &SmolStr) -> RResult<TypeRef> {
        match &expr.kind {
            TypeExprKind::Named(path) => {
                if let [name] = path.as_slice() {
                    if let Some(base) = BaseType::from_name(name) {
                        return Ok(TypeRef::Primitive(base));
                    }
                }
                match self.lookup(path, namespace) {
                    Some(TypeSymbol::Struct(id)) => Ok(TypeRef::Struct(id)),
                    Some(TypeSymbol::Enum(id)) => {
                        let repr = self
                            .schema
                            .enum_def(id)
                            .map_or(BaseType::UByte, |def| def.underlying);
                        Ok(TypeRef::Enum { def: id, repr })
                    }
                    None => Err(error(
                        ErrorCode::E0401,
                        format!(
                            "type referenced but not defined (check namespace): {}",
                            path.join(".")
                        ),
                        file,
                        expr.span.start,
                    )),
                }
            }
            TypeExprKind::Vector(element) => {
                let resolved = self.resolve_type(element, namespace, file)?;
                self.check_element(&resolved, expr, file)?;
                if self.schema.is_union(&resolved) {
                    return Err(error(
                        ErrorCode::E0405,
                        "vectors of unions are not supported",
                        file,
                        expr.span.start,
                    ));
                }
                Ok(TypeRef::Vector(Box::new(resolved)))
            }
            TypeExprKind::Array(element, length) => {
                let resolved = self.resolve_type(element, namespace, file)?;
                self.check_element(&resolved, expr, file)?;
                let length = u16::try_from(*length).map_err(|_| {
                    error(
                        ErrorCode::E0103,
                        format!("fixed-length array size out of range: {length}"),
                        file,
                        expr.span.start,
                    )
                })?;
                Ok(TypeRef::Array(Box::new(resolved), length))
            }
        }
    }

    fn check_element(&self, element: &TypeRef, expr: &TypeExpr, file: &SmolStr) -> RResult<()> {
        if matches!(element, TypeRef::Vector(_) | TypeRef::Array(..)) {
            return Err(error(
                ErrorCode::E0405,
                "nested vector types not supported (wrap in table first)",
                file,
                expr.span.start,
            ));
        }
        Ok(())
    }

    /// Search `path` from the innermost namespace outward
    fn lookup(&self, path: &[SmolStr], namespace: &Namespace) -> Option<TypeSymbol> {
        let name = path.join(".");
        let components = namespace.components();
        for depth in (0..=components.len()).rev() {
            let candidate = if depth == 0 {
                name.clone()
            } else {
                format!("{}.{name}", components[..depth].join("."))
            };
            if let Some(symbol) = self.types.get(&candidate) {
                trace!(name = %name, resolved = %candidate, "resolved type name");
                return Some(*symbol);
            }
        }
        trace!(name = %name, "type name not found");
        None
    }

    fn check_attributes(&self, uses: &[AttributeUse], file: &SmolStr) -> RResult<Attributes> {
        let mut attributes = Attributes::default();
        for attribute in uses {
            let name = &attribute.name.text;
            if !self.schema.attributes.contains(name) {
                return Err(error(
                    ErrorCode::E0305,
                    format!("user define attributes must be declared before use: {name}"),
                    file,
                    attribute.name.loc,
                )
                .with_hint(format!("declare it with `attribute \"{name}\";`")));
            }
            let value = attribute.value.as_ref().map(|v| SmolStr::new(&v.text));
            attributes.insert(name.clone(), value);
        }
        Ok(attributes)
    }
}

fn error(code: ErrorCode, message: impl Into<String>, file: &SmolStr, loc: SourceLoc) -> SchemaError {
    SchemaError::new(code, message, file.clone(), loc)
}

fn default_error(literal: &Literal, field: &str, file: &SmolStr) -> SchemaError {
    error(
        ErrorCode::E0308,
        format!("invalid default value for {field}: {}", literal.text),
        file,
        literal.loc,
    )
}

fn push_field(fields: &mut Vec<FieldDef>, field: FieldDef, file: &SmolStr) -> RResult<()> {
    if fields.iter().any(|f| f.name == field.name) {
        return Err(error(
            ErrorCode::E0301,
            format!("field already exists: {}", field.name),
            file,
            field.loc,
        ));
    }
    fields.push(field);
    Ok(())
}

/// Value of an `id` attribute, if present
fn field_id(uses: &[AttributeUse], file: &SmolStr) -> RResult<Option<u16>> {
    let Some(attribute) = uses.iter().find(|a| a.name.text == "id") else {
        return Ok(None);
    };
    attribute
        .value
        .as_ref()
        .and_then(Literal::as_integer)
        .and_then(|id| u16::try_from(id).ok())
        .map(Some)
        .ok_or_else(|| {
            error(
                ErrorCode::E0306,
                "id attribute must be an integer between 0 and 65535",
                file,
                attribute.name.loc,
            )
        })
}

/// Either every declared field carries an `id` or none does, and the ids
/// (including those of union type fields) run from 0 without gaps.
fn check_ids(decl: &StructDecl, fields: &[FieldDef], explicit: usize, file: &SmolStr) -> RResult<()> {
    if explicit != decl.fields.len() {
        return Err(error(
            ErrorCode::E0307,
            "either all fields or no fields must have an 'id' attribute",
            file,
            decl.name.loc,
        ));
    }
    let mut ids: Vec<u16> = fields.iter().filter_map(|f| f.id).collect();
    ids.sort_unstable();
    for (expected, id) in ids.iter().enumerate() {
        if usize::from(*id) != expected {
            return Err(error(
                ErrorCode::E0307,
                format!("field ids must be consecutive from 0, id {expected} missing or set twice"),
                file,
                decl.name.loc,
            ));
        }
    }
    Ok(())
}
