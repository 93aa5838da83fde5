use indexmap::IndexMap;

use crate::error::{Error, Result};

/// A single planned file: a root-relative path and its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeEntry {
    pub path: String,
    pub content: String,
}

/// An ordered set of planned files with unique, root-relative paths.
/// Directories are implied by path prefixes and are not separate entities.
#[derive(Debug, Default, Clone)]
pub struct FileTree {
    entries: IndexMap<String, String>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, rejecting duplicate or unsafe paths. Both cases are
    /// catalogue defects rather than runtime conditions.
    pub fn insert(&mut self, path: &str, content: String) -> Result<()> {
        validate_relative_path(path)?;
        if self.entries.contains_key(path) {
            return Err(Error::CatalogueInvariantError(format!(
                "duplicate path '{path}'"
            )));
        }
        self.entries.insert(path.to_string(), content);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }
}

/// Checks that `path` is a safe slash-separated relative path: not absolute,
/// no backslashes, and no empty, `.` or `..` segments.
pub fn validate_relative_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::CatalogueInvariantError("empty path".to_string()));
    }
    if path.starts_with('/') {
        return Err(Error::CatalogueInvariantError(format!(
            "absolute path '{path}'"
        )));
    }
    if path.contains('\\') {
        return Err(Error::CatalogueInvariantError(format!(
            "backslash in path '{path}'"
        )));
    }
    for segment in path.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(Error::CatalogueInvariantError(format!(
                "unsafe segment in path '{path}'"
            )));
        }
    }
    Ok(())
}
