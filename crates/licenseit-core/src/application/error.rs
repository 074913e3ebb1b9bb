//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O. Input that
//! cannot name a template or file is a `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while producing a license.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No stored template matches the base name under any suffix.
    #[error("Could not find a template for '{base_name}' (tried: {})", tried.join(", "))]
    TemplateNotFound {
        base_name: String,
        tried: Vec<String>,
    },

    /// Neither flag, config file, nor prompt produced an author.
    #[error("Author is required")]
    MissingAuthor,

    /// An explicitly requested config file could not be read or parsed.
    ///
    /// Downgraded to a warning by the author resolver.
    #[error("Could not read config file '{path}': {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    /// The output directory could not be created.
    #[error("Could not create directory '{path}': {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// The user declined to overwrite an existing file.
    #[error("Operation aborted by user; '{path}' already exists")]
    AbortedByUser { path: PathBuf },

    /// The license file could not be written.
    #[error("Could not write license to '{path}': {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// Reading an answer from the user failed.
    #[error("Could not read user input: {reason}")]
    PromptFailed { reason: String },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { base_name, .. } => vec![
                format!("No bundled template is named '{}'", base_name),
                "Try: licenseit preview to see available templates".into(),
                "Template names are case-sensitive (MIT, not mit)".into(),
            ],
            Self::MissingAuthor => vec![
                "Pass the author explicitly: --author \"Jane Doe\"".into(),
                "Or set \"author\" in your config file (see: licenseit config path)".into(),
            ],
            Self::ConfigRead { path, .. } => vec![
                format!("Check that '{}' exists and is readable", path.display()),
                "The file must contain a record such as {\"author\": \"Jane Doe\"}".into(),
            ],
            Self::DirectoryCreation { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no file is in the way of the directory path".into(),
            ],
            Self::AbortedByUser { path } => vec![
                format!("'{}' was left untouched", path.display()),
                "Use --force to overwrite without asking".into(),
                "Or choose another name with --file".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Pass the value as a flag instead of answering the prompt".into(),
            ],
            Self::StoreLockError => vec!["The template store is unavailable".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::MissingAuthor => ErrorCategory::Validation,
            Self::ConfigRead { .. } => ErrorCategory::Configuration,
            Self::AbortedByUser { .. } => ErrorCategory::Aborted,
            Self::DirectoryCreation { .. }
            | Self::WriteFailed { .. }
            | Self::PromptFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_tried_names() {
        let err = ApplicationError::TemplateNotFound {
            base_name: "missing".into(),
            tried: vec!["missing.txt".into(), "missing.md".into(), "missing".into()],
        };
        assert_eq!(
            err.to_string(),
            "Could not find a template for 'missing' (tried: missing.txt, missing.md, missing)"
        );
    }

    #[test]
    fn aborted_suggests_force() {
        let err = ApplicationError::AbortedByUser {
            path: PathBuf::from("LICENSE"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
        assert_eq!(err.category(), ErrorCategory::Aborted);
    }

    #[test]
    fn missing_author_is_validation() {
        assert_eq!(
            ApplicationError::MissingAuthor.category(),
            ErrorCategory::Validation
        );
    }
}
