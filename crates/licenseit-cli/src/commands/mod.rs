//! Command handlers, one module per action.

use licenseit_adapters::{AlwaysOverwrite, InMemoryStore, JsonConfigSource, LocalFilesystem};
use licenseit_core::{
    application::{LicenseService, ports::OverwriteConfirm},
    error::LicenseitResult,
};

use crate::prompt::TerminalPrompt;

pub mod completions;
pub mod config;
pub mod generate;
pub mod preview;

/// Wire the production adapters into a [`LicenseService`].
///
/// `force` replaces the overwrite question with an unconditional yes.
pub(crate) fn license_service(force: bool) -> LicenseitResult<LicenseService> {
    let confirm: Box<dyn OverwriteConfirm> = if force {
        Box::new(AlwaysOverwrite)
    } else {
        Box::new(TerminalPrompt::new())
    };

    Ok(LicenseService::new(
        Box::new(InMemoryStore::with_builtin()?),
        Box::new(LocalFilesystem::new()),
        Box::new(JsonConfigSource::new()),
        Box::new(TerminalPrompt::new()),
        confirm,
    ))
}
