//! Non-interactive stand-ins for the user-facing prompts.
//!
//! The terminal implementations live in the CLI crate; these cover `--force`
//! and scripted runs.

use std::path::Path;

use tracing::debug;

use licenseit_core::{
    application::ports::{AuthorPrompt, OverwriteConfirm},
    error::LicenseitResult,
};

/// Replaces existing files without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl OverwriteConfirm for AlwaysOverwrite {
    fn confirm_overwrite(&self, path: &Path) -> LicenseitResult<bool> {
        debug!(path = %path.display(), "overwriting without confirmation");
        Ok(true)
    }
}

/// Never replaces an existing file.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverOverwrite;

impl OverwriteConfirm for NeverOverwrite {
    fn confirm_overwrite(&self, _path: &Path) -> LicenseitResult<bool> {
        Ok(false)
    }
}

/// Answers the author prompt with a preset value.
///
/// An empty value behaves like a user who just presses enter.
#[derive(Debug, Clone, Default)]
pub struct FixedAuthor(String);

impl FixedAuthor {
    pub fn new(answer: impl Into<String>) -> Self {
        Self(answer.into())
    }

    /// A prompt that always answers with nothing.
    pub fn blank() -> Self {
        Self::default()
    }
}

impl AuthorPrompt for FixedAuthor {
    fn prompt_author(&self) -> LicenseitResult<String> {
        Ok(self.0.clone())
    }
}
