//! JSON (and TOML) configuration file source.
//!
//! The file holds a single record, e.g. `{"author": "Jane Doe"}`. A path
//! ending in `.toml` is read as TOML (`author = "Jane Doe"`). Unknown keys are
//! ignored.

use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use licenseit_core::{
    application::{ApplicationError, ports::ConfigSource},
    domain::UserConfig,
    error::LicenseitResult,
};

/// File name looked up in the per-user config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

const APP_DIR: &str = "licenseit";

#[derive(Debug, Error)]
enum ConfigFileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Reads the user configuration record from disk.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigSource {
    default_path: Option<PathBuf>,
}

impl JsonConfigSource {
    /// Source using the platform default location.
    pub fn new() -> Self {
        Self {
            default_path: default_config_path(std::env::var_os("XDG_CONFIG_HOME")),
        }
    }

    /// Source with a fixed default location.
    pub fn with_default_path(path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: Some(path.into()),
        }
    }

    fn read(path: &Path) -> Result<UserConfig, ConfigFileError> {
        let raw = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Ok(toml::from_str(&raw)?)
        } else {
            Ok(serde_json::from_str(&raw)?)
        }
    }
}

impl ConfigSource for JsonConfigSource {
    fn load(&self, path: &Path) -> LicenseitResult<UserConfig> {
        debug!(path = %path.display(), "reading config");
        Self::read(path).map_err(|e| {
            ApplicationError::ConfigRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn default_path(&self) -> Option<PathBuf> {
        self.default_path.clone()
    }
}

/// `$XDG_CONFIG_HOME/licenseit/config.json` when the variable is set and not
/// empty, otherwise the platform config directory.
fn default_config_path(xdg_config_home: Option<OsString>) -> Option<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join(APP_DIR).join(CONFIG_FILE_NAME));
    }

    directories::ProjectDirs::from("", "", APP_DIR).map(|d| d.config_dir().join(CONFIG_FILE_NAME))
}
