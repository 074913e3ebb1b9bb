//! Core domain layer for licenseit.
//!
//! This module contains pure logic with no I/O. Template storage, the
//! filesystem, configuration files, and terminal prompts are reached only
//! through the ports defined in the application layer.
//!
//! - **No I/O**: No filesystem, network, or terminal calls
//! - **Immutable values**: Everything here is `Clone + PartialEq`
//! - **Rich domain model**: Rendering and naming rules live on the types

pub mod author;
pub mod error;
pub mod output;
pub mod render;
pub mod template;

pub use author::{AuthorSource, UserConfig};
pub use error::DomainError;
pub use output::{LicenseArtifact, OutputTarget};
pub use render::{AUTHOR_TOKEN, DATE_TOKEN, RenderContext, current_year};
pub use template::{DEFAULT_SUFFIXES, Template, TemplateName, validate_base_name};
