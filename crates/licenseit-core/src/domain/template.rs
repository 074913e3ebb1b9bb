//! Template naming and identity.
//!
//! A stored template is addressed by its *full name* (`MIT.txt`). Users type
//! the *base name* (`MIT`); resolution finds which suffix the store actually
//! holds. [`TemplateName`] keeps both halves so the output file can inherit
//! the resolved suffix.

use std::fmt;

use super::DomainError;

/// Suffixes probed during resolution, highest priority first.
pub const DEFAULT_SUFFIXES: [&str; 2] = [".txt", ".md"];

/// A resolved template name: base name plus the suffix that matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateName {
    base: String,
    suffix: String,
}

impl TemplateName {
    /// Build a name from a base and the suffix that matched (may be empty).
    pub fn new(base: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            suffix: suffix.into(),
        }
    }

    /// The base name as typed by the user.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The matched suffix (`.txt`, `.md`, or empty for an exact match).
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The key under which the template is stored.
    pub fn full(&self) -> String {
        format!("{}{}", self.base, self.suffix)
    }

    /// Default output file name: base name plus the resolved suffix.
    pub fn default_file_name(&self) -> String {
        self.full()
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.suffix)
    }
}

/// A template loaded from the store. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: TemplateName,
    pub body: String,
}

impl Template {
    pub fn new(name: TemplateName, body: impl Into<String>) -> Self {
        Self {
            name,
            body: body.into(),
        }
    }
}

/// Check that a base name is an opaque store key.
///
/// Rejects empty names, path separators, and the `.`/`..` segments so a
/// name can never be interpreted as a location.
pub fn validate_base_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidBaseName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if name == "." || name == ".." {
        return Err(invalid("name cannot be a relative path segment"));
    }
    Ok(())
}
