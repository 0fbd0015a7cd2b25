//! C ABI over [`SchemaHandle`].
//!
//! Callers receive an opaque `*mut FbsSchema` from [`fbs_schema_parse`] and
//! must release it with [`fbs_schema_destroy`]. Every `const char*` handed
//! out is NUL-terminated and owned by the schema it came from.
//!
//! Misuse never aborts: a null schema, a negative index or an index past the
//! end yields `0`, `false`, a null pointer or a zeroed record.

mod exports;
mod records;

use std::cell::RefCell;
use std::ffi::{CString, c_char};

use rustc_hash::FxHashMap;

use crate::export::SchemaHandle;

pub use exports::*;
pub use records::{
    FbsAttributeInfo, FbsEnumInfo, FbsEnumValueInfo, FbsFieldInfo, FbsMethodInfo, FbsPosition,
    FbsRange, FbsRpcType, FbsServiceInfo, FbsStructInfo,
};

/// Opaque schema handed across the C boundary.
///
/// Pool strings are not NUL-terminated, so each one is copied into a
/// `CString` the first time C asks for it. Keys are the pool allocation's
/// address and length, which stay fixed for the handle's lifetime.
pub struct FbsSchema {
    handle: SchemaHandle,
    c_strings: RefCell<FxHashMap<(usize, usize), CString>>,
}

impl FbsSchema {
    pub fn new(handle: SchemaHandle) -> Self {
        Self {
            handle,
            c_strings: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn handle(&self) -> &SchemaHandle {
        &self.handle
    }

    pub fn into_handle(self) -> SchemaHandle {
        self.handle
    }

    /// NUL-terminated copy of `text`, cached for the life of the schema.
    ///
    /// `text` must borrow from this schema's handle (or be `'static`).
    /// Interior NULs truncate the copy.
    fn c_str(&self, text: &str) -> *const c_char {
        let key = (text.as_ptr() as usize, text.len());
        let mut cache = self.c_strings.borrow_mut();
        cache
            .entry(key)
            .or_insert_with(|| {
                let end = text.find('\0').unwrap_or(text.len());
                CString::new(&text[..end]).unwrap_or_default()
            })
            .as_ptr()
    }

    fn c_opt(&self, text: Option<&str>) -> *const c_char {
        text.map_or(std::ptr::null(), |text| self.c_str(text))
    }

    #[cfg(test)]
    fn cached_len(&self) -> usize {
        self.c_strings.borrow().len()
    }
}

impl std::fmt::Debug for FbsSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FbsSchema")
            .field("handle", &self.handle)
            .field("c_strings", &self.c_strings.borrow().len())
            .finish()
    }
}
