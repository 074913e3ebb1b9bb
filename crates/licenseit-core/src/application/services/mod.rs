//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a license" or "resolve template".

pub mod author_resolver;
pub mod license_service;
pub mod license_writer;
pub mod template_service;

pub use author_resolver::AuthorResolver;
pub use license_service::{GeneratedLicense, LicenseRequest, LicenseService, TemplateInfo};
pub use license_writer::LicenseWriter;
pub use template_service::TemplateService;
