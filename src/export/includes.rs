//! Include graph queries.
//!
//! File names are looked up after lexical normalization, so
//! `schemas/./a.fbs` and `schemas/a.fbs` name the same file.

use std::path::Path;

use indexmap::IndexMap;

use super::handle::SchemaHandle;
use crate::base::{IStr, StringPool, path_key};
use crate::schema::IncludeGraph;

#[derive(Debug, Default)]
pub(super) struct RenderedIncludes {
    /// Key of the root file; `""` for in-memory text
    root: IStr,
    /// Direct includes per including file, first-recorded order
    direct: IndexMap<IStr, Vec<IStr>>,
    /// Every edge of every including file, not deduplicated across files
    all: Vec<IStr>,
}

impl RenderedIncludes {
    pub(super) fn render(graph: &IncludeGraph, root: &str, pool: &mut StringPool) -> Self {
        let mut rendered = Self {
            root: pool.intern(root),
            ..Self::default()
        };
        for from in graph.including_files() {
            let targets: Vec<IStr> = graph
                .direct(from)
                .into_iter()
                .flatten()
                .map(|to| pool.intern(to))
                .collect();
            rendered.all.extend(targets.iter().cloned());
            rendered.direct.insert(pool.intern(from), targets);
        }
        rendered
    }

    fn direct(&self, file: &str) -> Option<&[IStr]> {
        let key = path_key(Path::new(file));
        self.direct.get(key.as_str()).map(Vec::as_slice)
    }
}

impl SchemaHandle {
    /// Number of files `file` includes directly; 0 for unknown files.
    ///
    /// In-memory text without a file name is recorded under `""`.
    pub fn include_count(&self, file: &str) -> usize {
        self.exports().includes.direct(file).map_or(0, <[IStr]>::len)
    }

    /// The `index`-th direct include of `file`, or `""`
    pub fn get_include(&self, file: &str, index: usize) -> &str {
        self.exports()
            .includes
            .direct(file)
            .and_then(|includes| includes.get(index))
            .map_or("", |include| &**include)
    }

    /// Direct includes of `file`, in recorded order
    pub fn includes(&self, file: &str) -> impl Iterator<Item = &str> + '_ {
        self.exports()
            .includes
            .direct(file)
            .into_iter()
            .flatten()
            .map(|include| &**include)
    }

    /// Include-graph key of the root file; `""` for in-memory text
    pub fn root_file(&self) -> &str {
        &self.exports().includes.root
    }

    /// Number of files that include at least one other file
    pub fn including_file_count(&self) -> usize {
        self.exports().includes.direct.len()
    }

    /// The `index`-th including file in first-recorded order, or `""`
    pub fn get_including_file(&self, index: usize) -> &str {
        self.exports()
            .includes
            .direct
            .get_index(index)
            .map_or("", |(file, _)| &**file)
    }

    /// Number of include edges across every including file
    pub fn all_include_count(&self) -> usize {
        self.exports().includes.all.len()
    }

    /// The `index`-th include edge target across every including file, or `""`
    pub fn get_all_include(&self, index: usize) -> &str {
        self.exports()
            .includes
            .all
            .get(index)
            .map_or("", |include| &**include)
    }
}
