//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `licenseit-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::UserConfig;
use crate::error::LicenseitResult;

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `licenseit_adapters::template_store::InMemoryStore` (bundled templates)
///
/// Keys are full template names (`MIT.txt`). The store is read-only from the
/// application's point of view.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// List every stored template name, sorted.
    fn list_names(&self) -> LicenseitResult<Vec<String>>;

    /// Read a template body, or `None` if no template has that exact name.
    fn read_body(&self, name: &str) -> LicenseitResult<Option<String>>;

    /// Check whether a template with that exact name exists.
    fn contains(&self, name: &str) -> LicenseitResult<bool> {
        Ok(self.read_body(name)?.is_some())
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `licenseit_adapters::filesystem::LocalFilesystem` (production)
/// - `licenseit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `create_dir_all` reports failures as `ApplicationError::DirectoryCreation`
/// and `write_file` as `ApplicationError::WriteFailed`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> LicenseitResult<()>;

    /// Replace the full contents of a file. Must not leave a partial file.
    fn write_file(&self, path: &Path, content: &str) -> LicenseitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for user configuration.
///
/// Implemented by:
/// - `licenseit_adapters::config::JsonConfigSource`
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource: Send + Sync {
    /// Read and parse exactly this file.
    ///
    /// Failures are `ApplicationError::ConfigRead`.
    fn load(&self, path: &Path) -> LicenseitResult<UserConfig>;

    /// The well-known per-user config path, if one can be determined.
    fn default_path(&self) -> Option<PathBuf>;
}

/// Port for asking the user who the author is.
///
/// Implemented by:
/// - `licenseit_cli::prompt::TerminalPrompt` (interactive)
/// - `licenseit_adapters::interaction::FixedAuthor` (scripted)
#[cfg_attr(test, mockall::automock)]
pub trait AuthorPrompt: Send + Sync {
    /// Ask for the author name. An empty answer is allowed.
    fn prompt_author(&self) -> LicenseitResult<String>;
}

/// Port for confirming that an existing file may be replaced.
///
/// Implemented by:
/// - `licenseit_cli::prompt::TerminalPrompt` (interactive)
/// - `licenseit_adapters::interaction::AlwaysOverwrite` (`--force`)
/// - `licenseit_adapters::interaction::NeverOverwrite`
#[cfg_attr(test, mockall::automock)]
pub trait OverwriteConfirm: Send + Sync {
    /// Return `true` to replace the file at `path`.
    fn confirm_overwrite(&self, path: &Path) -> LicenseitResult<bool>;
}
