//! # licenseit
//!
//! Generate a license file from a bundled template.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` and parse CLI arguments (help and version exit early).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Build the [`OutputManager`].
//! 4. Dispatch to the appropriate command handler.
//! 5. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success, help or version                  |
//! |  1   | Internal / system error                   |
//! |  2   | User / input error (bad arguments too)    |
//! |  3   | Resource not found                        |
//! |  4   | Unreadable `--config` in `config show`    |

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(&e),
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);
    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color;

    // ── 4. Dispatch + 5. Error handling ──────────────────────────────────
    match run(cli, &output) {
        Ok(()) => {
            info!("licenseit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(&e, verbose, no_color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, output: &OutputManager) -> CliResult<()> {
    match cli.command {
        None => commands::generate::execute(cli.generate, &cli.global, output),
        Some(Commands::Preview(args)) => commands::preview::execute(args, output),
        Some(Commands::Completions(args)) => commands::completions::execute(args),
        Some(Commands::Config(cmd)) => {
            commands::config::execute(cmd, cli.global.config.as_deref(), output)
        }
    }
}

/// Help and version go to stdout with exit 0; anything else is a usage error.
///
/// Write failures on stdout (closed pipe) are ignored.
fn handle_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        // clap routes this one to stderr; a bare `licenseit` is a help request
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = Cli::command().print_help();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("{}", err.render().ansi());
            ExitCode::from(2)
        }
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: &CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    let msg = if !no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    if err.is_missing_author() {
        eprintln!("\n{}", Cli::command().render_usage());
    }

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
