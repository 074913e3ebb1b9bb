//! Author identity and where it came from.

use std::fmt;

use serde::Deserialize;

/// The author string together with the source that supplied it.
///
/// Only one source wins per run; values are never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorSource {
    /// Passed explicitly by the caller (the `--author` flag).
    ExplicitFlag(String),
    /// Read from a configuration file.
    ConfigFile(String),
    /// Typed at the interactive prompt.
    Interactive(String),
}

impl AuthorSource {
    /// The author name, regardless of source.
    pub fn name(&self) -> &str {
        match self {
            Self::ExplicitFlag(name) | Self::ConfigFile(name) | Self::Interactive(name) => name,
        }
    }

    /// Short label for the source, for logs and display.
    pub fn origin(&self) -> &'static str {
        match self {
            Self::ExplicitFlag(_) => "flag",
            Self::ConfigFile(_) => "config",
            Self::Interactive(_) => "prompt",
        }
    }
}

impl fmt::Display for AuthorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User configuration record.
///
/// `author` is the only recognised key; anything else in the file is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub author: Option<String>,
}

impl UserConfig {
    /// The configured author, if present and non-empty. Used verbatim.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }
}
