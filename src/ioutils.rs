use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves `root` to an absolute path against the current directory.
pub fn resolve_root<P: AsRef<Path>>(root: P) -> Result<PathBuf> {
    let root = root.as_ref();
    if root.is_absolute() {
        return Ok(root.to_path_buf());
    }
    let base = std::env::current_dir().map_err(|e| Error::InvalidRootError {
        output_dir: root.display().to_string(),
        e: e.to_string(),
    })?;
    Ok(base.join(root))
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parent directories as needed
/// and fully overwriting any existing file.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_root_keeps_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_root(dir.path()).unwrap(), dir.path());
    }

    #[test]
    fn resolve_root_anchors_relative_paths() {
        let resolved = resolve_root("some-project").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some-project"));
    }

    #[test]
    fn write_file_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("a/b/c.txt");
        write_file("hello", &dest).unwrap();
        assert_eq!(std::fs::read_to_string(dest).unwrap(), "hello");
    }

    #[test]
    fn write_file_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("f.txt");
        write_file("old", &dest).unwrap();
        write_file("new", &dest).unwrap();
        assert_eq!(std::fs::read_to_string(dest).unwrap(), "new");
    }
}
