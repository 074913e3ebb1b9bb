//! Author Resolver - decides who the license is attributed to.
//!
//! Sources are consulted in order and the first non-empty answer wins:
//! explicit value, configuration file, interactive prompt. Only the prompt
//! answer is trimmed; the other two are used as given.

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{AuthorPrompt, ConfigSource},
    },
    domain::AuthorSource,
    error::LicenseitResult,
};

/// Service for resolving the author.
pub struct AuthorResolver {
    config: Box<dyn ConfigSource>,
}

impl AuthorResolver {
    pub fn new(config: Box<dyn ConfigSource>) -> Self {
        Self { config }
    }

    /// Resolve the author through the precedence chain.
    ///
    /// `prompt` is only consulted when neither the explicit value nor the
    /// configuration yields a name.
    #[instrument(skip(self, prompt))]
    pub fn resolve(
        &self,
        explicit: Option<&str>,
        config_path: Option<&Path>,
        prompt: &dyn AuthorPrompt,
    ) -> LicenseitResult<AuthorSource> {
        if let Some(name) = explicit.filter(|n| !n.is_empty()) {
            debug!(source = "flag", "author resolved");
            return Ok(AuthorSource::ExplicitFlag(name.to_string()));
        }

        if let Some(author) = self.configured_author(config_path) {
            return Ok(author);
        }

        let answer = prompt.prompt_author()?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(ApplicationError::MissingAuthor.into());
        }

        debug!(source = "prompt", "author resolved");
        Ok(AuthorSource::Interactive(answer.to_string()))
    }

    /// The author the configuration step alone would yield.
    ///
    /// An unreadable explicit path is logged as a warning; the default
    /// location is probed silently.
    pub fn configured_author(&self, config_path: Option<&Path>) -> Option<AuthorSource> {
        let config = match config_path {
            Some(path) => match self.config.load(path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("{e}; continuing without it");
                    return None;
                }
            },
            None => {
                let path = self.config.default_path()?;
                match self.config.load(&path) {
                    Ok(config) => config,
                    Err(e) => {
                        debug!(path = %path.display(), error = %e, "no usable default config");
                        return None;
                    }
                }
            }
        };

        let author = config.author()?;
        debug!(source = "config", "author resolved");
        Some(AuthorSource::ConfigFile(author.to_string()))
    }
}
