//! `licenseit config`: inspect the user configuration.

use std::path::{Path, PathBuf};

use licenseit_adapters::JsonConfigSource;
use licenseit_core::{
    application::{AuthorResolver, ports::ConfigSource},
    domain::AuthorSource,
};

use crate::{cli::ConfigCommands, error::CliResult, output::OutputManager};

/// Dispatch to the correct config subcommand.
///
/// `show` fails with `ConfigRead` when the `--config` file cannot be read.
pub fn execute(cmd: ConfigCommands, config: Option<&Path>, output: &OutputManager) -> CliResult<()> {
    let source = JsonConfigSource::new();

    match cmd {
        ConfigCommands::Path => match source.default_path() {
            Some(path) => output.data(&path.display().to_string())?,
            None => output.warning("No configuration directory could be determined")?,
        },

        ConfigCommands::Show => {
            let path = effective_path(config, source.default_path());
            // An explicit file must parse here; only the default one may be absent.
            let author = match config {
                Some(file) => source
                    .load(file)?
                    .author()
                    .map(|name| AuthorSource::ConfigFile(name.to_string())),
                None => AuthorResolver::new(Box::new(source)).configured_author(None),
            };

            output.header("Configuration:")?;
            for line in describe(path.as_deref(), author.as_ref()) {
                output.data(&line)?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// The explicit `--config` path wins over the default one.
fn effective_path(explicit: Option<&Path>, default: Option<PathBuf>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or(default)
}

fn describe(path: Option<&Path>, author: Option<&AuthorSource>) -> Vec<String> {
    let file = match path {
        Some(p) if p.is_file() => p.display().to_string(),
        Some(p) => format!("{} (missing)", p.display()),
        None => "none".into(),
    };
    let author = author.map_or_else(|| "not set".to_string(), |a| a.name().to_string());

    vec![format!("  file:   {file}"), format!("  author: {author}")]
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = effective_path(Some(Path::new("team.json")), Some("/home/x/config.json".into()));
        assert_eq!(path, Some(PathBuf::from("team.json")));
    }

    #[test]
    fn falls_back_to_default_path() {
        let path = effective_path(None, Some("/home/x/config.json".into()));
        assert_eq!(path, Some(PathBuf::from("/home/x/config.json")));
        assert_eq!(effective_path(None, None), None);
    }

    #[test]
    fn describe_missing_file_and_author() {
        let lines = describe(Some(Path::new("/definitely/not/here.json")), None);
        assert_eq!(lines[0], "  file:   /definitely/not/here.json (missing)");
        assert_eq!(lines[1], "  author: not set");
    }

    #[test]
    fn describe_existing_file_with_author() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"author": "Jane Doe"}"#).unwrap();

        let author = AuthorSource::ConfigFile("Jane Doe".into());
        let lines = describe(Some(&path), Some(&author));
        assert_eq!(lines[0], format!("  file:   {}", path.display()));
        assert_eq!(lines[1], "  author: Jane Doe");
    }

    #[test]
    fn describe_without_any_path() {
        assert_eq!(describe(None, None)[0], "  file:   none");
    }
}
