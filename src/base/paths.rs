//! Path normalization for consistent include-graph storage and lookup.
//!
//! Normalization is purely lexical: `.` components are dropped and `..`
//! pops the previous component. Nothing touches the filesystem, so the same
//! spelling always maps to the same key whether or not the file exists.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) && normalized.pop();
                if !popped && !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// The string key under which a file is recorded in the include graph.
///
/// An empty path stays empty: that is how in-memory text without a file
/// identity is keyed.
pub fn path_key(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        return String::new();
    }
    normalize_path(path).to_string_lossy().into_owned()
}
