//! User-declared attribute discovery.

use super::handle::SchemaHandle;
use super::records::AttributeInfo;
use crate::base::{IStr, StringPool};
use crate::schema::{AttributeEntry, attributes::is_builtin};

#[derive(Debug)]
pub(super) struct RenderedAttribute {
    name: IStr,
    doc: IStr,
}

impl RenderedAttribute {
    pub(super) fn render(name: &str, entry: &AttributeEntry, pool: &mut StringPool) -> Self {
        Self {
            name: pool.intern(name),
            doc: pool.intern_doc(&entry.doc),
        }
    }

    fn info(&self) -> AttributeInfo<'_> {
        AttributeInfo {
            name: &self.name,
            doc: &self.doc,
            known: false,
        }
    }
}

impl SchemaHandle {
    /// Number of user-declared attributes; built-ins are never listed
    pub fn user_attribute_count(&self) -> usize {
        self.exports().attributes.len()
    }

    /// The user attribute at `index` in declaration order, or the empty
    /// sentinel
    pub fn get_user_attribute(&self, index: usize) -> AttributeInfo<'_> {
        self.user_attribute_info(index).unwrap_or_default()
    }

    pub fn user_attribute_info(&self, index: usize) -> Option<AttributeInfo<'_>> {
        self.exports().attributes.get(index).map(RenderedAttribute::info)
    }

    /// Documentation of a declared attribute; empty when the name is unknown
    /// or undocumented
    pub fn attribute_documentation(&self, name: &str) -> &str {
        self.exports()
            .attributes
            .iter()
            .find(|attribute| &*attribute.name == name)
            .map_or("", |attribute| &*attribute.doc)
    }

    /// Check if `name` is built into the schema language
    pub fn is_known_attribute(&self, name: &str) -> bool {
        match self.schema() {
            Some(schema) => schema.attributes.is_known(name),
            None => is_builtin(name),
        }
    }
}
