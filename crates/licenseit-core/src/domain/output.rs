//! Where a rendered license goes.

use std::path::{Path, PathBuf};

use super::{AuthorSource, DomainError, TemplateName};

/// Output location: a directory (created if absent) and a bare file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    directory: PathBuf,
    file_name: String,
}

impl OutputTarget {
    /// Build a target, rejecting file names that are empty or carry a path.
    pub fn new(
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let file_name = file_name.into();
        let invalid = |reason: &str| DomainError::InvalidFileName {
            name: file_name.clone(),
            reason: reason.into(),
        };

        if file_name.trim().is_empty() {
            return Err(invalid("file name cannot be empty"));
        }
        if file_name.contains('/') || file_name.contains('\\') {
            return Err(invalid("file name cannot contain path separators"));
        }
        if file_name == "." || file_name == ".." {
            return Err(invalid("file name cannot be a relative path segment"));
        }

        Ok(Self {
            directory: directory.into(),
            file_name,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// `directory` joined with `file_name`.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// A fully rendered license, ready to be written.
///
/// Lives only between rendering and the write call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseArtifact {
    pub template: TemplateName,
    pub author: AuthorSource,
    pub content: String,
    pub target: OutputTarget,
}
