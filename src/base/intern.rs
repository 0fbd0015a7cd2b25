//! Per-handle string pool.
//!
//! Uses `Rc<str>` so stored text is shared rather than copied.
//! The pool deduplicates by content: interning the same text twice hands back
//! the same allocation. A pool belongs to exactly one schema handle and is
//! dropped with it; `Rc` keeps it off other threads.

use rustc_hash::FxHashSet;
use std::rc::Rc;

/// An interned string - cheap to clone (just Rc increment)
pub type IStr = Rc<str>;

/// Deduplicating store of owned text.
#[derive(Debug, Default)]
pub struct StringPool {
    strings: FxHashSet<Rc<str>>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning a cheap-to-clone reference.
    ///
    /// If the string was already interned, returns the existing `Rc`.
    pub fn intern(&mut self, s: &str) -> IStr {
        if let Some(existing) = self.strings.get(s) {
            Rc::clone(existing)
        } else {
            let rc: Rc<str> = Rc::from(s);
            self.strings.insert(Rc::clone(&rc));
            rc
        }
    }

    /// Intern an owned string, avoiding a second allocation when it is new.
    pub fn intern_string(&mut self, s: String) -> IStr {
        if let Some(existing) = self.strings.get(s.as_str()) {
            Rc::clone(existing)
        } else {
            let rc: Rc<str> = Rc::from(s);
            self.strings.insert(Rc::clone(&rc));
            rc
        }
    }

    /// Join doc-comment lines with `\n` and intern the result.
    ///
    /// No lines gives the empty string, never an absent value.
    pub fn intern_doc<S: AsRef<str>>(&mut self, lines: &[S]) -> IStr {
        match lines {
            [] => self.intern(""),
            [line] => self.intern(line.as_ref()),
            _ => {
                let joined = lines
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<_>>()
                    .join("\n");
                self.intern_string(joined)
            }
        }
    }

    /// Get an interned string if it exists, without creating it.
    pub fn get(&self, s: &str) -> Option<IStr> {
        self.strings.get(s).cloned()
    }

    /// Number of unique strings interned.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if no strings have been interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_returns_same_rc() {
        let mut pool = StringPool::new();
        let a = pool.intern("hello");
        let b = pool.intern("hello");
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_intern_string_reuses_existing() {
        let mut pool = StringPool::new();
        let a = pool.intern("ns.Type");
        let b = pool.intern_string(String::from("ns.Type"));
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_intern_different_strings() {
        let mut pool = StringPool::new();
        let a = pool.intern("hello");
        let b = pool.intern("world");
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(&*a, "hello");
        assert_eq!(&*b, "world");
    }

    #[test]
    fn test_intern_doc_joins_lines() {
        let mut pool = StringPool::new();
        let doc = pool.intern_doc(&[" first", " second"]);
        assert_eq!(&*doc, " first\n second");
    }

    #[test]
    fn test_intern_doc_empty_is_empty_string() {
        let mut pool = StringPool::new();
        let empty: [&str; 0] = [];
        assert_eq!(&*pool.intern_doc(&empty), "");
        assert!(pool.get("").is_some());
    }

    #[test]
    fn test_get_existing() {
        let mut pool = StringPool::new();
        pool.intern("exists");
        assert!(pool.get("exists").is_some());
        assert!(pool.get("missing").is_none());
    }
}
