//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stacksmith_core::error::{GenError, GenResult};
use stacksmith_core::prelude::Filesystem;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> GenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> GenResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> GenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GenError {
    GenError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("a/b/file.txt");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "hello").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_file(&path).unwrap(), "hello");

        fs.remove_file(&path).unwrap();
        assert!(!fs.exists(&path));
    }

    #[test]
    fn remove_dir_all_deletes_the_tree() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let root = dir.path().join("project");
        fs.create_dir_all(&root.join("nested/deeper")).unwrap();
        fs.write_file(&root.join("nested/file"), "x").unwrap();

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }

    #[test]
    fn reading_a_missing_file_is_a_filesystem_error() {
        let fs = LocalFilesystem::new();
        let err = fs.read_file(Path::new("/nonexistent/definitely/missing")).unwrap_err();
        assert!(matches!(err, GenError::Filesystem { .. }));
    }
}
