//! Scratch files for tests that drive path-based APIs.

use std::path::{Path, PathBuf};

/// Fresh scratch directory, removed when the handle is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
///
/// Used to hand fixture documents and config files to code that only
/// accepts paths.
pub fn write_test_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_dir_removed_on_drop() {
        let dir = temp_test_dir();
        let kept = dir.path().to_path_buf();
        assert!(kept.is_dir());
        drop(dir);
        assert!(!kept.exists());
    }

    #[test]
    fn test_write_test_file() {
        let dir = temp_test_dir();
        let path = write_test_file(dir.path(), "doc.xml", "<dwml/>");
        assert_eq!(path.file_name().unwrap(), "doc.xml");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<dwml/>");
    }
}
