//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stacksmith_core::error::{GenError, GenResult};
use stacksmith_core::prelude::Filesystem;

/// In-memory filesystem for testing.
///
/// Parent directories are enforced the way `std::fs::write` enforces them:
/// writing into a directory that was never created is an error, so a
/// generator that forgets `create_dir_all` fails here too.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of files currently stored (testing helper).
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(path: &Path) -> GenError {
    GenError::Filesystem {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> GenResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GenResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(GenError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                });
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> GenResult<String> {
        let inner = self.inner.read().map_err(|_| poisoned(path))?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| GenError::Filesystem {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_file(&self, path: &Path) -> GenResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;
        inner
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| GenError::Filesystem {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            })
    }

    fn remove_dir_all(&self, path: &Path) -> GenResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_an_existing_parent() {
        let fs = MemoryFilesystem::new();
        let err = fs.write_file(Path::new("/missing/file.txt"), "x").unwrap_err();
        assert!(matches!(err, GenError::Filesystem { .. }));

        fs.create_dir_all(Path::new("/missing")).unwrap();
        fs.write_file(Path::new("/missing/file.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/missing/file.txt")).unwrap(), "x");
    }

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b/c")).unwrap();
        assert!(fs.exists(Path::new("/a")));
        assert!(fs.exists(Path::new("/a/b")));
        assert!(fs.exists(Path::new("/a/b/c")));
    }

    #[test]
    fn remove_dir_all_takes_files_and_subdirs() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/proj/sub")).unwrap();
        fs.write_file(Path::new("/proj/sub/f"), "x").unwrap();
        fs.create_dir_all(Path::new("/other")).unwrap();

        fs.remove_dir_all(Path::new("/proj")).unwrap();
        assert!(!fs.exists(Path::new("/proj")));
        assert!(!fs.exists(Path::new("/proj/sub/f")));
        assert!(fs.exists(Path::new("/other")));
    }

    #[test]
    fn remove_file_only_removes_files() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/d")).unwrap();
        fs.write_file(Path::new("/d/f"), "x").unwrap();
        fs.remove_file(Path::new("/d/f")).unwrap();
        assert!(fs.remove_file(Path::new("/d/f")).is_err());
        assert!(fs.exists(Path::new("/d")));
    }
}
