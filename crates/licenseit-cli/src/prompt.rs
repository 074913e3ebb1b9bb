//! Terminal implementations of the author and overwrite prompts.
//!
//! With a terminal on stdin (and the `interactive` feature) the questions go
//! through `dialoguer`. Otherwise the question is written to stderr and one
//! line is read from stdin, so answers can be piped in. End of input counts
//! as an empty answer.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use licenseit_core::{
    application::{
        ApplicationError,
        ports::{AuthorPrompt, OverwriteConfirm},
    },
    error::LicenseitResult,
};

const AUTHOR_QUESTION: &str = "Author not provided. Please enter the author's name";

/// Asks on the controlling terminal, or reads piped stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "interactive")]
    fn interactive() -> bool {
        use std::io::IsTerminal;

        io::stdin().is_terminal() && io::stderr().is_terminal()
    }

    fn read_answer(question: &str) -> LicenseitResult<String> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{question}").map_err(prompt_failed)?;
        stderr.flush().map_err(prompt_failed)?;

        read_line(&mut io::stdin().lock())
    }
}

impl AuthorPrompt for TerminalPrompt {
    fn prompt_author(&self) -> LicenseitResult<String> {
        debug!("prompting for author");

        #[cfg(feature = "interactive")]
        if Self::interactive() {
            return dialoguer::Input::<String>::new()
                .with_prompt(AUTHOR_QUESTION)
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_failed);
        }

        Self::read_answer(&format!("{AUTHOR_QUESTION}: "))
    }
}

impl OverwriteConfirm for TerminalPrompt {
    fn confirm_overwrite(&self, path: &Path) -> LicenseitResult<bool> {
        let question = format!("File '{}' already exists. Overwrite?", path.display());

        #[cfg(feature = "interactive")]
        if Self::interactive() {
            return dialoguer::Confirm::new()
                .with_prompt(question)
                .default(false)
                .interact()
                .map_err(prompt_failed);
        }

        let answer = Self::read_answer(&format!("{question} (y/N): "))?;
        Ok(is_yes(&answer))
    }
}

/// One line without its terminator; empty on end of input.
fn read_line(input: &mut impl BufRead) -> LicenseitResult<String> {
    let mut line = String::new();
    input.read_line(&mut line).map_err(prompt_failed)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn prompt_failed(e: impl std::fmt::Display) -> licenseit_core::error::LicenseitError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}
