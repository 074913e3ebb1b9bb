use thiserror::Error;

/// Domain error type.
///
/// Raised before any port is touched, when user input cannot name a
/// template or an output file.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid template name '{name}': {reason}")]
    InvalidBaseName { name: String, reason: String },

    #[error("Invalid output file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBaseName { name, reason } => vec![
                format!("'{}' cannot be used as a template name: {}", name, reason),
                "Template names are plain identifiers such as MIT or Apache-2.0".into(),
                "Try: licenseit preview".into(),
            ],
            Self::InvalidFileName { name, reason } => vec![
                format!("'{}' cannot be used as a file name: {}", name, reason),
                "Use --dir to choose the directory and --file for the bare name".into(),
            ],
        }
    }
}
