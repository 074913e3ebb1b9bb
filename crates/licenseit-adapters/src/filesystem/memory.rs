//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use licenseit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::LicenseitResult,
};

/// In-memory filesystem for testing.
///
/// Mirrors the local adapter's failure modes: a file standing where a
/// directory should be blocks `create_dir_all`, and writes need an existing
/// parent directory. `set_read_only` makes every file write fail.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: bool,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Make every subsequent file write fail.
    pub fn set_read_only(&self, read_only: bool) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only = read_only;
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> LicenseitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let fail = |reason: &str| ApplicationError::DirectoryCreation {
            path: path.to_path_buf(),
            reason: reason.into(),
        };

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(fail("Not a directory").into());
            }
        }

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> LicenseitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let fail = |reason: &str| ApplicationError::WriteFailed {
            path: path.to_path_buf(),
            reason: reason.into(),
        };

        if inner.read_only {
            return Err(fail("Read-only file system").into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(fail("Parent directory does not exist").into());
            }
        }
        if inner.directories.contains(path) {
            return Err(fail("Is a directory").into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("out/LICENSE");

        assert!(fs.write_file(path, "x").is_err());
        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(path, "x").unwrap();

        assert_eq!(fs.read_file(path).as_deref(), Some("x"));
        assert!(fs.exists(Path::new("out")));
    }

    #[test]
    fn file_in_the_way_blocks_directory_creation() {
        let fs = MemoryFilesystem::new();
        fs.add_file("docs", "not a directory");

        let err = fs.create_dir_all(Path::new("docs/legal")).unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::DirectoryCreation { .. })
        ));
    }

    #[test]
    fn read_only_rejects_writes_and_keeps_content() {
        let fs = MemoryFilesystem::new();
        fs.add_file("LICENSE", "old");
        fs.set_read_only(true);

        let err = fs.write_file(Path::new("LICENSE"), "new").unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::WriteFailed { .. })
        ));
        assert_eq!(fs.read_file(Path::new("LICENSE")).as_deref(), Some("old"));
    }

    #[test]
    fn list_files_is_sorted() {
        let fs = MemoryFilesystem::new();
        fs.add_file("b/LICENSE", "");
        fs.add_file("a/LICENSE", "");
        assert_eq!(
            fs.list_files(),
            vec![PathBuf::from("a/LICENSE"), PathBuf::from("b/LICENSE")]
        );
    }
}
