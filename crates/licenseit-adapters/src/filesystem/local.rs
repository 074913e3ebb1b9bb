//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

use licenseit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::LicenseitResult,
};

/// Production filesystem implementation using `std::fs`.
///
/// Files are written to a sibling temporary file and renamed into place, so
/// readers never observe a half-written license.
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
    fn create_dir_all(&self, path: &Path) -> LicenseitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            ApplicationError::DirectoryCreation {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> LicenseitResult<()> {
        atomic_write(path, content).map_err(|e| {
            ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Replace `path` via a temporary sibling and a rename.
///
/// A symlink is followed: the file it points at is replaced and the link
/// stays. An existing file keeps its permissions; a new one gets 0644 on unix.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".licenseit-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::metadata(&target)
            .map(|m| m.permissions())
            .unwrap_or_else(|_| std::fs::Permissions::from_mode(0o644));
        builder.permissions(permissions);
    }

    let mut tmp = builder.tempfile_in(dir)?;
    trace!(tmp = %tmp.path().display(), target = %target.display(), "writing temporary file");
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
