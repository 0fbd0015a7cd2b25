//! Parse options and include-graph loading.
//!
//! The loader parses the root text, then follows `include` directives
//! depth-first. Every file is parsed at most once, but every directive is
//! recorded in the include graph. Files come back in dependency order: a file
//! appears after everything it includes, the root last.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::debug;

use super::model::IncludeGraph;
use crate::base::path_key;
use crate::parser::{ErrorCode, SchemaError, SchemaFile, parse_file};

/// Options for a single parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Name of the root file; `None` for text with no file identity
    pub filename: Option<PathBuf>,
    /// Directories searched for includes, in order, after the including
    /// file's own directory
    pub include_paths: Vec<PathBuf>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_include_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.include_paths.push(path.into());
        self
    }

    pub fn with_include_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.include_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Include-graph key of the root file
    pub fn root_key(&self) -> String {
        self.filename
            .as_deref()
            .map(path_key)
            .unwrap_or_default()
    }
}

/// Parsed files plus the include edges between them.
#[derive(Debug, Clone, Default)]
pub struct LoadedFiles {
    /// Files in dependency order, root last
    pub files: Vec<SchemaFile>,
    pub includes: IncludeGraph,
    /// Key of the root file
    pub root: SmolStr,
}

/// Parse `text` as the root file and load everything it includes.
pub fn load(text: &str, options: &ParseOptions) -> Result<LoadedFiles, SchemaError> {
    let root = options.root_key();
    let mut loader = Loader {
        options,
        seen: FxHashSet::default(),
        loaded: LoadedFiles {
            root: SmolStr::new(&root),
            ..LoadedFiles::default()
        },
    };
    if !root.is_empty() {
        loader.seen.insert(root.clone());
    }
    loader.load_file(text, &root)?;
    Ok(loader.loaded)
}

struct Loader<'o> {
    options: &'o ParseOptions,
    seen: FxHashSet<String>,
    loaded: LoadedFiles,
}

impl Loader<'_> {
    fn load_file(&mut self, text: &str, key: &str) -> Result<(), SchemaError> {
        let file = parse_file(text, key)?;
        for include in file.includes() {
            let Some(target) = self.resolve_include(key, &include.path) else {
                return Err(SchemaError::new(
                    ErrorCode::E0501,
                    format!("unable to locate include file: {}", include.path),
                    key,
                    include.loc,
                )
                .with_hint("add the directory containing it to the include paths"));
            };
            let target_key = path_key(&target);
            self.loaded.includes.record(key, target_key.as_str());

            if !self.seen.insert(target_key.clone()) {
                debug!(from = key, to = %target_key, "include already loaded");
                continue;
            }
            debug!(from = key, to = %target_key, "loading include");
            let contents = fs::read_to_string(&target).map_err(|err| {
                SchemaError::new(
                    ErrorCode::E0502,
                    format!("unable to load include file: {}: {err}", include.path),
                    key,
                    include.loc,
                )
            })?;
            self.load_file(&contents, &target_key)?;
        }
        self.loaded.files.push(file);
        Ok(())
    }

    /// First existing candidate: the including file's directory, then each
    /// include path in order.
    fn resolve_include(&self, including: &str, include: &str) -> Option<PathBuf> {
        let mut candidates = Vec::with_capacity(self.options.include_paths.len() + 1);
        if !including.is_empty() {
            let dir = Path::new(including).parent().unwrap_or(Path::new(""));
            candidates.push(dir.join(include));
        }
        candidates.extend(self.options.include_paths.iter().map(|dir| dir.join(include)));
        candidates.into_iter().find(|candidate| candidate.is_file())
    }
}
