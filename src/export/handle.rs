//! The schema handle: one parse outcome plus the text it exports.
//!
//! All text a caller can see (qualified names, joined docs, type names) is
//! rendered into the handle's [`StringPool`] when the handle is built.
//! Accessors then only borrow, so every `&str` they return lives exactly as
//! long as the handle.

use tracing::{debug, trace};

use super::attributes::RenderedAttribute;
use super::enums::RenderedEnum;
use super::includes::RenderedIncludes;
use super::records::{Diagnostic, RootTypeInfo, position, span};
use super::services::RenderedService;
use super::structs::RenderedStruct;
use crate::base::{IStr, Span, StringPool};
use crate::parser::SchemaError;
use crate::schema::{FbsParser, ParseOptions, Schema, SchemaParser};

/// Owner of one parsed schema.
///
/// A handle is never `Clone`, and its `Rc`-backed strings keep it on the
/// thread that created it. [`destroy`](Self::destroy) consumes it, so a
/// second release cannot be written.
#[derive(Debug)]
pub struct SchemaHandle {
    schema: Option<Schema>,
    error: Option<SchemaError>,
    error_text: IStr,
    exports: Exports,
    pool: StringPool,
}

/// Everything the accessors read, pre-rendered
#[derive(Debug, Default)]
pub(super) struct Exports {
    pub structs: Vec<RenderedStruct>,
    pub enums: Vec<RenderedEnum>,
    pub services: Vec<RenderedService>,
    pub attributes: Vec<RenderedAttribute>,
    pub includes: RenderedIncludes,
    pub root_type: Option<RenderedRoot>,
    pub file_identifier: Option<IStr>,
    pub file_extension: Option<IStr>,
}

#[derive(Debug)]
pub(super) struct RenderedRoot {
    name: IStr,
    file: IStr,
    span: Span,
    source: IStr,
}

impl Exports {
    fn render(schema: &Schema, pool: &mut StringPool) -> Self {
        let root_type = schema.root_type.as_ref().map(|root| {
            let name = schema
                .struct_def(root.ty)
                .map_or_else(|| root.source.to_string(), |def| def.qualified_name());
            RenderedRoot {
                name: pool.intern_string(name),
                file: pool.intern(&root.file),
                span: span(root.span),
                source: pool.intern(&root.source),
            }
        });

        Self {
            structs: schema
                .structs
                .iter()
                .map(|def| RenderedStruct::render(schema, def, pool))
                .collect(),
            enums: schema
                .enums
                .iter()
                .map(|def| RenderedEnum::render(schema, def, pool))
                .collect(),
            services: schema
                .services
                .iter()
                .map(|def| RenderedService::render(schema, def, pool))
                .collect(),
            attributes: schema
                .attributes
                .user_defined()
                .map(|(name, entry)| RenderedAttribute::render(name, entry, pool))
                .collect(),
            includes: RenderedIncludes::render(&schema.includes, &schema.root_file, pool),
            root_type,
            file_identifier: schema.file_identifier.as_deref().map(|id| pool.intern(id)),
            file_extension: schema.file_extension.as_deref().map(|ext| pool.intern(ext)),
        }
    }
}

impl SchemaHandle {
    /// Parse `text` with the bundled parser. Never fails: check
    /// [`is_success`](Self::is_success).
    pub fn parse(text: &str, options: &ParseOptions) -> Self {
        Self::parse_with(&FbsParser, text, options)
    }

    /// Parse `text` with a caller-supplied parser.
    pub fn parse_with<P: SchemaParser + ?Sized>(
        parser: &P,
        text: &str,
        options: &ParseOptions,
    ) -> Self {
        match parser.parse(text, options) {
            Ok(schema) => Self::from_schema(schema),
            Err(error) => Self::from_error(error),
        }
    }

    /// Wrap a schema that was resolved elsewhere.
    pub fn from_schema(schema: Schema) -> Self {
        let mut pool = StringPool::new();
        let exports = Exports::render(&schema, &mut pool);
        let error_text = pool.intern("");
        debug!(
            structs = exports.structs.len(),
            enums = exports.enums.len(),
            services = exports.services.len(),
            interned = pool.len(),
            "schema handle created"
        );
        Self {
            schema: Some(schema),
            error: None,
            error_text,
            exports,
            pool,
        }
    }

    /// Wrap a failed parse.
    pub fn from_error(error: SchemaError) -> Self {
        let mut pool = StringPool::new();
        let error_text = pool.intern_string(error.to_string());
        debug!(code = %error.code, error = %error_text, "schema parse failed");
        Self {
            schema: None,
            error: Some(error),
            error_text,
            exports: Exports::default(),
            pool,
        }
    }

    pub fn is_success(&self) -> bool {
        self.schema.is_some()
    }

    /// The rendered parse error; empty after a successful parse.
    pub fn error(&self) -> &str {
        &self.error_text
    }

    /// Structured form of the parse error, positions 0-based.
    pub fn diagnostic(&self) -> Option<Diagnostic<'_>> {
        self.error.as_ref().map(|error| Diagnostic {
            code: error.code,
            file: &error.file,
            position: position(error.location()),
            message: &error.message,
            hint: error.hint.as_deref(),
        })
    }

    /// The resolved schema, on success.
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Number of distinct strings this handle owns.
    pub fn interned_len(&self) -> usize {
        self.pool.len()
    }

    /// The root file's `root_type`, if it declares one.
    pub fn root_type(&self) -> Option<RootTypeInfo<'_>> {
        self.exports.root_type.as_ref().map(|root| RootTypeInfo {
            name: &root.name,
            file: &root.file,
            span: root.span,
            source: &root.source,
        })
    }

    pub fn file_identifier(&self) -> Option<&str> {
        self.exports.file_identifier.as_deref()
    }

    pub fn file_extension(&self) -> Option<&str> {
        self.exports.file_extension.as_deref()
    }

    /// Release the handle and every string it handed out.
    pub fn destroy(self) {
        trace!(interned = self.pool.len(), "schema handle destroyed");
    }

    pub(super) fn exports(&self) -> &Exports {
        &self.exports
    }
}
