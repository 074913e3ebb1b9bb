//! Template Service - template lookup and resolution.
//!
//! Maps a base name onto a stored template by probing an ordered list of
//! suffixes, then the bare name. The first hit wins; the suffix order is a
//! priority, never sorted.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DEFAULT_SUFFIXES, Template, TemplateName, validate_base_name},
    error::LicenseitResult,
};

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
    suffixes: Vec<String>,
}

impl TemplateService {
    /// Create a new template service probing `.txt` then `.md`.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self {
            store,
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the suffix list. Order is priority.
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// The suffixes probed during resolution, in order.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Resolve a base name to the best-matching stored template name.
    #[instrument(skip(self))]
    pub fn resolve(&self, base_name: &str) -> LicenseitResult<TemplateName> {
        validate_base_name(base_name)?;

        let mut tried = Vec::with_capacity(self.suffixes.len() + 1);

        for suffix in &self.suffixes {
            let candidate = TemplateName::new(base_name, suffix.as_str());
            let key = candidate.full();
            if self.store.contains(&key)? {
                debug!(template = %key, "template resolved");
                return Ok(candidate);
            }
            tried.push(key);
        }

        let exact = TemplateName::new(base_name, "");
        if self.store.contains(base_name)? {
            debug!(template = %base_name, "template resolved by exact name");
            return Ok(exact);
        }
        tried.push(base_name.to_string());

        Err(ApplicationError::TemplateNotFound {
            base_name: base_name.to_string(),
            tried,
        }
        .into())
    }

    /// Load the body of a resolved template.
    pub fn load(&self, name: &TemplateName) -> LicenseitResult<Template> {
        let key = name.full();
        let body = self.store.read_body(&key)?.ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                base_name: name.base().to_string(),
                tried: vec![key.clone()],
            }
        })?;
        Ok(Template::new(name.clone(), body))
    }

    /// List all template names.
    pub fn list(&self) -> LicenseitResult<Vec<String>> {
        self.store.list_names()
    }
}
