//! License Writer - puts a rendered license on disk.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, OverwriteConfirm},
    },
    domain::OutputTarget,
    error::LicenseitResult,
};

/// Service for writing license files.
pub struct LicenseWriter {
    filesystem: Box<dyn Filesystem>,
}

impl LicenseWriter {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write `content` to `target`, asking `confirm` before replacing a file.
    ///
    /// Returns the absolute path of the written file.
    #[instrument(skip(self, content, confirm), fields(path = %target.path().display()))]
    pub fn write(
        &self,
        content: &str,
        target: &OutputTarget,
        confirm: &dyn OverwriteConfirm,
    ) -> LicenseitResult<PathBuf> {
        self.filesystem.create_dir_all(target.directory())?;

        let path = target.path();
        if self.filesystem.exists(&path) {
            debug!("target exists, asking before overwrite");
            if !confirm.confirm_overwrite(&path)? {
                return Err(ApplicationError::AbortedByUser { path }.into());
            }
        }

        self.filesystem.write_file(&path, content)?;
        info!(bytes = content.len(), "license written");

        Ok(std::path::absolute(&path).unwrap_or(path))
    }
}
