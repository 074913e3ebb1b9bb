//! Application layer for licenseit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (LicenseService and its parts)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; naming and rendering
//! rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AuthorResolver, GeneratedLicense, LicenseRequest, LicenseService, LicenseWriter,
    TemplateInfo, TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{AuthorPrompt, ConfigSource, Filesystem, OverwriteConfirm, TemplateStore};

pub use error::ApplicationError;
