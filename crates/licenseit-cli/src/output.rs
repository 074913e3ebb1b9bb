//! Status lines and payload output on stdout.
//!
//! Status lines (`✓`, `⚠`, `ℹ`, headers) respect `--quiet` and colour
//! settings. Payload (a dry-run license, preview listings) is always printed
//! and never styled, so it stays safe to pipe.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{AnsiColors, OwoColorize};

use crate::cli::global::{GlobalArgs, OutputFormat};

pub struct OutputManager {
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs) -> Self {
        let human = match args.output_format {
            OutputFormat::Auto => io::stdout().is_terminal(),
            OutputFormat::Human => true,
            OutputFormat::Plain => false,
        };

        Self {
            quiet: args.quiet,
            color: human && !args.no_color,
            term: Term::stdout(),
        }
    }

    /// Payload text, followed by a newline if it lacks one.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        if !text.ends_with('\n') {
            self.term.write_line("")?;
        }
        Ok(())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2713}', AnsiColors::Green, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status('\u{26a0}', AnsiColors::Yellow, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2139}', AnsiColors::Blue, msg)
    }

    /// Section title, bold cyan when coloured.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.color {
            self.term.write_line(&text.cyan().bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    fn status(&self, symbol: char, color: AnsiColors, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.status_line(symbol, color, msg))
    }

    fn status_line(&self, symbol: char, color: AnsiColors, msg: &str) -> String {
        if self.color {
            format!("{} {}", symbol.color(color).bold(), msg.color(color))
        } else {
            format!("{symbol} {msg}")
        }
    }
}
