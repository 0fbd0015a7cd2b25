//! Resolved schema model and the parser that produces it.
//!
//! The export layer only ever sees a [`Schema`]. Where that schema comes from
//! is behind the [`SchemaParser`] trait; [`FbsParser`] is the bundled
//! implementation built on [`crate::parser`].

pub mod attributes;
mod layout;
mod loader;
mod model;
mod resolve;

pub use loader::{LoadedFiles, ParseOptions, load};
pub use model::*;
pub use resolve::resolve;

use tracing::debug;

use crate::parser::SchemaError;

/// Produces a resolved schema from source text.
pub trait SchemaParser {
    /// Parse `text`, following includes as `options` allow.
    ///
    /// Stops at the first error.
    fn parse(&self, text: &str, options: &ParseOptions) -> Result<Schema, SchemaError>;
}

/// The bundled FlatBuffers schema parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct FbsParser;

impl FbsParser {
    pub fn new() -> Self {
        Self
    }
}

impl SchemaParser for FbsParser {
    fn parse(&self, text: &str, options: &ParseOptions) -> Result<Schema, SchemaError> {
        let loaded = load(text, options)?;
        debug!(
            root = %loaded.root,
            files = loaded.files.len(),
            "schema files loaded"
        );
        resolve(&loaded.files, &loaded.root, loaded.includes)
    }
}
