//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `licenseit-adapters` (and the
//! terminal prompts in `licenseit-cli`) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateStore`: Bundled template bodies
//!   - `Filesystem`: Directory creation and file writes
//!   - `ConfigSource`: User configuration lookup
//!   - `AuthorPrompt`, `OverwriteConfirm`: Questions for the user
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{AuthorPrompt, ConfigSource, Filesystem, OverwriteConfirm, TemplateStore};

#[cfg(test)]
pub use output::{
    MockAuthorPrompt, MockConfigSource, MockFilesystem, MockOverwriteConfirm, MockTemplateStore,
};
