use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ioutils;
use crate::template::FileTree;

/// Generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plan only; zero filesystem effects.
    DryRun,
    /// Create directories and write files.
    Apply,
}

/// Per-entry outcome of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Created,
    Skipped { bytes: usize },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub path: String,
    pub status: EntryStatus,
}

/// Overall status of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationStatus {
    Success,
    PartialFailure,
    /// A pre-write check failed; nothing was written.
    Aborted { reason: String },
}

/// Immutable record of one `generate` invocation.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub root: PathBuf,
    pub mode: Mode,
    pub status: GenerationStatus,
    pub outcomes: Vec<EntryOutcome>,
}

impl GenerationResult {
    fn aborted(root: PathBuf, mode: Mode, reason: String) -> Self {
        Self { root, mode, status: GenerationStatus::Aborted { reason }, outcomes: Vec::new() }
    }

    pub fn planned(&self) -> usize {
        self.outcomes.len()
    }

    pub fn created(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status == EntryStatus::Created).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, EntryStatus::Failed { .. }))
            .count()
    }
}

/// Materializes a [`FileTree`] under a target root directory.
pub struct GenerationEngine<'a> {
    root: &'a Path,
    tree: &'a FileTree,
}

impl<'a> GenerationEngine<'a> {
    pub fn new(root: &'a Path, tree: &'a FileTree) -> Self {
        Self { root, tree }
    }

    /// Runs one generation. Pre-write failures abort with nothing written;
    /// per-entry write failures are recorded and never stop the remaining
    /// entries. Each operation is attempted exactly once.
    pub fn generate(&self, mode: Mode, overwrite: bool) -> GenerationResult {
        let root = match self.preflight(overwrite) {
            Ok(root) => root,
            Err(err) => {
                log::debug!("generation aborted before any write: {err}");
                return GenerationResult::aborted(
                    self.root.to_path_buf(),
                    mode,
                    err.to_string(),
                );
            }
        };

        match mode {
            Mode::DryRun => self.plan(root),
            Mode::Apply => self.apply(root),
        }
    }

    /// Checks that run strictly before any mutation: root resolves, is not a
    /// file, and either does not exist or overwriting was requested.
    fn preflight(&self, overwrite: bool) -> Result<PathBuf> {
        let root = ioutils::resolve_root(self.root)?;
        if root.is_file() {
            return Err(Error::OutputNotADirectoryError {
                output_dir: root.display().to_string(),
            });
        }
        if root.exists() && !overwrite {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: root.display().to_string(),
            });
        }
        Ok(root)
    }

    fn plan(&self, root: PathBuf) -> GenerationResult {
        let outcomes = self
            .tree
            .iter()
            .map(|(path, content)| {
                log::info!("[dry run] would write {} ({} bytes)", path, content.len());
                EntryOutcome {
                    path: path.to_string(),
                    status: EntryStatus::Skipped { bytes: content.len() },
                }
            })
            .collect();

        GenerationResult { root, mode: Mode::DryRun, status: GenerationStatus::Success, outcomes }
    }

    fn apply(&self, root: PathBuf) -> GenerationResult {
        if let Err(err) = ioutils::create_dir_all(&root) {
            return GenerationResult::aborted(root, Mode::Apply, err.to_string());
        }

        let mut outcomes = Vec::with_capacity(self.tree.len());
        for (path, content) in self.tree.iter() {
            let dest = root.join(path);
            let status = match ioutils::write_file(content, &dest) {
                Ok(()) => {
                    log::debug!("created {}", dest.display());
                    EntryStatus::Created
                }
                Err(err) => {
                    log::warn!("failed to write {}: {err}", dest.display());
                    EntryStatus::Failed { reason: err.to_string() }
                }
            };
            outcomes.push(EntryOutcome { path: path.to_string(), status });
        }

        let status = if outcomes.iter().any(|o| matches!(o.status, EntryStatus::Failed { .. })) {
            GenerationStatus::PartialFailure
        } else {
            GenerationStatus::Success
        };

        GenerationResult { root, mode: Mode::Apply, status, outcomes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FileTree {
        let mut tree = FileTree::new();
        tree.insert("index.html", "<html></html>".to_string()).unwrap();
        tree.insert("css/main.css", "body {}".to_string()).unwrap();
        tree.insert("js/main.js", "export {};".to_string()).unwrap();
        tree
    }

    #[test]
    fn dry_run_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        let tree = sample_tree();

        let result = GenerationEngine::new(&root, &tree).generate(Mode::DryRun, false);

        assert_eq!(result.status, GenerationStatus::Success);
        assert_eq!(result.planned(), 3);
        assert!(result
            .outcomes
            .iter()
            .all(|o| matches!(o.status, EntryStatus::Skipped { .. })));
        assert!(!root.exists());
    }

    #[test]
    fn dry_run_records_content_length() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        let tree = sample_tree();

        let result = GenerationEngine::new(&root, &tree).generate(Mode::DryRun, false);

        assert_eq!(
            result.outcomes[0].status,
            EntryStatus::Skipped { bytes: "<html></html>".len() }
        );
    }

    #[test]
    fn apply_writes_all_entries() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        let tree = sample_tree();

        let result = GenerationEngine::new(&root, &tree).generate(Mode::Apply, false);

        assert_eq!(result.status, GenerationStatus::Success);
        assert_eq!(result.created(), 3);
        assert_eq!(
            std::fs::read_to_string(root.join("css/main.css")).unwrap(),
            "body {}"
        );
    }

    #[test]
    fn existing_root_without_overwrite_aborts_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("keep.txt"), "keep").unwrap();
        let tree = sample_tree();

        let result = GenerationEngine::new(&root, &tree).generate(Mode::Apply, false);

        assert!(matches!(result.status, GenerationStatus::Aborted { .. }));
        assert!(result.outcomes.is_empty());
        let entries: Vec<_> = std::fs::read_dir(&root).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(std::fs::read_to_string(root.join("keep.txt")).unwrap(), "keep");
    }

    #[test]
    fn root_as_file_aborts_even_with_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        std::fs::write(&root, "not a directory").unwrap();
        let tree = sample_tree();

        let result = GenerationEngine::new(&root, &tree).generate(Mode::Apply, true);

        assert!(matches!(result.status, GenerationStatus::Aborted { .. }));
        assert_eq!(std::fs::read_to_string(&root).unwrap(), "not a directory");
    }

    #[test]
    fn overwrite_allows_existing_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        std::fs::create_dir(&root).unwrap();
        let tree = sample_tree();

        let result = GenerationEngine::new(&root, &tree).generate(Mode::Apply, true);

        assert_eq!(result.status, GenerationStatus::Success);
        assert!(root.join("index.html").exists());
    }

    #[cfg(unix)]
    #[test]
    fn blocked_subtree_fails_per_entry_without_aborting() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        std::fs::create_dir(&root).unwrap();
        // A file squatting where a directory must go blocks that subtree.
        std::fs::write(root.join("css"), "in the way").unwrap();
        let tree = sample_tree();

        let result = GenerationEngine::new(&root, &tree).generate(Mode::Apply, true);

        assert_eq!(result.status, GenerationStatus::PartialFailure);
        assert_eq!(result.failed(), 1);
        assert_eq!(result.created(), 2);
        let failed = result
            .outcomes
            .iter()
            .find(|o| matches!(o.status, EntryStatus::Failed { .. }))
            .unwrap();
        assert_eq!(failed.path, "css/main.css");
        // The remaining entries were still attempted.
        assert!(root.join("index.html").exists());
        assert!(root.join("js/main.js").exists());
    }
}
