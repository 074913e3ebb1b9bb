//! Licenseit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the licenseit
//! license generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          licenseit-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (LicenseService, TemplateService,      │
//! │   AuthorResolver, LicenseWriter)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Store, Filesystem, Config, Prompts)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   licenseit-adapters (Infrastructure)   │
//! │ (InMemoryStore, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (TemplateName, RenderContext, Author)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use licenseit_core::application::{LicenseRequest, LicenseService};
//!
//! let service = LicenseService::new(store, filesystem, config, prompt, confirm);
//! let generated = service.generate(&LicenseRequest::new("MIT").with_author("Jane Doe"))?;
//! println!("{}", generated.path.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;
