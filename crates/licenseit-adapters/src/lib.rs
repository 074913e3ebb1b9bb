//! Infrastructure adapters for licenseit.
//!
//! This crate implements the ports defined in `licenseit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod config;
pub mod filesystem;
pub mod interaction;
pub mod template_store;

// Re-export commonly used adapters
pub use config::JsonConfigSource;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use interaction::{AlwaysOverwrite, FixedAuthor, NeverOverwrite};
pub use template_store::InMemoryStore;
