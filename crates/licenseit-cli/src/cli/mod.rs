//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// `licenseit <TEMPLATE> [OPTIONS]` generates a license; the subcommands cover
/// everything else.
#[derive(Debug, Parser)]
#[command(
    name     = "licenseit",
    bin_name = "licenseit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a license file from a bundled template",
    long_about = "licenseit renders a license template with your name and the \
                  current year and writes it into your project.",
    after_help = "EXAMPLES:\n\
        \x20 licenseit MIT --author \"Jane Doe\"\n\
        \x20 licenseit Apache-2.0 --file LICENSE --dir ./legal\n\
        \x20 licenseit preview\n\
        \x20 licenseit completions bash > /usr/share/bash-completion/completions/licenseit",
    arg_required_else_help = true,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments for the default (generate) action.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the bundled license templates.
    #[command(
        visible_alias = "list",
        about = "Show available license templates",
        after_help = "EXAMPLES:\n\
            \x20 licenseit preview\n\
            \x20 licenseit preview --format json"
    )]
    Preview(PreviewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 licenseit completions bash > ~/.local/share/bash-completion/completions/licenseit\n\
            \x20 licenseit completions zsh  > ~/.zfunc/_licenseit\n\
            \x20 licenseit completions fish > ~/.config/fish/completions/licenseit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the user configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 licenseit config path\n\
            \x20 licenseit config show --config ./team.json"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for generating a license.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Base name of the license template (e.g. `MIT`).
    #[arg(
        value_name = "TEMPLATE",
        required = true,
        help = "Base name of the license template to use (e.g. 'MIT')"
    )]
    pub template: Option<String>,

    /// Author credited in the license.
    #[arg(
        short = 'a',
        long = "author",
        value_name = "NAME",
        help = "The author of the license"
    )]
    pub author: Option<String>,

    /// Output file name.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILENAME",
        help = "Name of the generated license file (default: template name)"
    )]
    pub file: Option<String>,

    /// Output directory, created if missing.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIRECTORY",
        default_value = ".",
        help = "Directory to save the generated license"
    )]
    pub dir: PathBuf,

    /// Text substituted for `{date}`.
    #[arg(
        long = "date",
        value_name = "TEXT",
        help = "Value for the date placeholder (default: current year)"
    )]
    pub date: Option<String>,

    /// Overwrite an existing file without asking.
    #[arg(long = "force", help = "Overwrite an existing file without asking")]
    pub force: bool,

    /// Print the rendered license instead of writing it.
    #[arg(long = "dry-run", help = "Show the license without writing it")]
    pub dry_run: bool,
}

// ── preview ───────────────────────────────────────────────────────────────────

/// Arguments for `licenseit preview`.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: PreviewFormat,
}

/// Output format for the `preview` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
    /// Human-readable table.
    Table,
    /// One stored template name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `licenseit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `licenseit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the path of the default configuration file.
    Path,
    /// Print the author the configuration yields.
    Show,
}

// ── tests ─────────────────────────────────────────────────────────────────────
