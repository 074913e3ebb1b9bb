//! Error handling for the licenseit CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::{AnsiColors, OwoColorize};
use thiserror::Error;

use licenseit_core::{application::ApplicationError, error::LicenseitError};

// Re-export so callers only need `use crate::error::*`.
pub use licenseit_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// An error propagated from `licenseit-core`.
    #[error("{0}")]
    Core(#[from] LicenseitError),

    /// Machine-readable output could not be produced.
    #[error("Could not serialise output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],
            Self::Core(core_err) => core_err.suggestions(),
            Self::Serialization(_) => vec!["Try --format table instead".into()],
            Self::IoError { .. } => vec![
                "Check that stdout is writable".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Aborted => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Serialization(_) | Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// `true` when no author could be found; the caller prints usage.
    pub fn is_missing_author(&self) -> bool {
        matches!(
            self,
            Self::Core(e) if e.as_application() == Some(&ApplicationError::MissingAuthor)
        )
    }

    /// Multi-line report with ANSI styling, for a terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.report(verbose, true)
    }

    /// The same report without escape codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.report(verbose, false)
    }

    fn report(&self, verbose: bool, styled: bool) -> String {
        let paint = |text: &str, color: AnsiColors| -> String {
            if styled {
                text.color(color).bold().to_string()
            } else {
                text.to_string()
            }
        };

        let mut out = format!("\n{} {}\n", paint("Error:", AnsiColors::Red), self);

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!("  Caused by: {err}\n"));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint("Suggestions:", AnsiColors::Yellow)));
            for s in &suggestions {
                out.push_str(&format!("  - {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nRun again with -v for more detail.\n");
        }

        out
    }

    /// Record the failure at debug level; the user already sees the report.
    pub fn log(&self) {
        tracing::debug!(category = ?self.category(), error = %self, "command failed");
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments, declined prompt).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use licenseit_core::domain::DomainError;

    use super::*;

    fn core(err: impl Into<LicenseitError>) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn exit_code_missing_author_is_user_error() {
        let err = core(ApplicationError::MissingAuthor);
        assert_eq!(err.exit_code(), 2);
        assert!(err.is_missing_author());
    }

    #[test]
    fn exit_code_aborted_is_user_error() {
        let err = core(ApplicationError::AbortedByUser {
            path: PathBuf::from("LICENSE"),
        });
        assert_eq!(err.exit_code(), 2);
        assert!(!err.is_missing_author());
    }

    #[test]
    fn exit_code_not_found() {
        let err = core(ApplicationError::TemplateNotFound {
            base_name: "x".into(),
            tried: vec!["x.txt".into()],
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_unreadable_config() {
        let err = core(ApplicationError::ConfigRead {
            path: PathBuf::from("team.json"),
            reason: "invalid JSON".into(),
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);

        let write = core(ApplicationError::WriteFailed {
            path: PathBuf::from("LICENSE"),
            reason: "disk full".into(),
        });
        assert_eq!(write.exit_code(), 1);
    }

    #[test]
    fn invalid_base_name_is_user_error() {
        let err = core(DomainError::InvalidBaseName {
            name: "../x".into(),
            reason: "path".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = core(ApplicationError::AbortedByUser {
            path: PathBuf::from("LICENSE"),
        });
        let s = err.format_plain(false);
        assert!(s.contains("Error: Operation aborted by user"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--force"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = core(ApplicationError::MissingAuthor);
        assert!(err.format_plain(false).contains("-v for more detail"));
        assert!(!err.format_plain(true).contains("-v for more detail"));
    }

    #[test]
    fn verbose_report_lists_causes() {
        let err = CliError::from(io::Error::other("pipe closed"));
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: pipe closed"));
    }

    #[test]
    fn colored_report_has_escape_codes() {
        let err = core(ApplicationError::MissingAuthor);
        let s = err.format_colored(false);
        assert!(s.contains('\u{1b}'));
        assert!(s.contains("Author is required"));
    }
}
