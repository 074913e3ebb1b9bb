//! License Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Resolve the author
//! 2. Resolve and load the template
//! 3. Render it with the author and date
//! 4. Write it to the filesystem
//!
//! Every step short-circuits; nothing touches the disk before step 4.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use super::{AuthorResolver, LicenseWriter, TemplateService};
use crate::{
    application::ports::{AuthorPrompt, ConfigSource, Filesystem, OverwriteConfirm, TemplateStore},
    domain::{AuthorSource, LicenseArtifact, OutputTarget, RenderContext, TemplateName, current_year},
    error::LicenseitResult,
};

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRequest {
    pub base_name: String,
    pub author: Option<String>,
    pub config_path: Option<PathBuf>,
    pub file_name: Option<String>,
    pub directory: PathBuf,
    pub date: String,
}

impl LicenseRequest {
    /// Request for `base_name`, written to the current directory, dated this year.
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            author: None,
            config_path: None,
            file_name: None,
            directory: PathBuf::from("."),
            date: current_year(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Override the output file name (default: resolved template name).
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLicense {
    /// Absolute path of the written file.
    pub path: PathBuf,
    pub file_name: String,
    pub template: TemplateName,
    pub author: AuthorSource,
}

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Stored name, e.g. `MIT.txt`.
    pub name: String,
    /// Name to pass on the command line, e.g. `MIT`.
    pub base: String,
    pub suffix: String,
    /// First non-blank line of the body.
    pub title: String,
}

/// Main license generation service.
pub struct LicenseService {
    templates: TemplateService,
    authors: AuthorResolver,
    writer: LicenseWriter,
    prompt: Box<dyn AuthorPrompt>,
    confirm: Box<dyn OverwriteConfirm>,
}

impl LicenseService {
    /// Create a new license service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use licenseit_core::application::{LicenseService, ports::*};
    ///
    /// let service = LicenseService::new(
    ///     store,      // impl TemplateStore
    ///     filesystem, // impl Filesystem
    ///     config,     // impl ConfigSource
    ///     prompt,     // impl AuthorPrompt
    ///     confirm,    // impl OverwriteConfirm
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        config: Box<dyn ConfigSource>,
        prompt: Box<dyn AuthorPrompt>,
        confirm: Box<dyn OverwriteConfirm>,
    ) -> Self {
        Self {
            templates: TemplateService::new(store),
            authors: AuthorResolver::new(config),
            writer: LicenseWriter::new(filesystem),
            prompt,
            confirm,
        }
    }

    /// Produce the rendered license without writing it.
    #[instrument(
        skip_all,
        fields(
            template = %request.base_name,
            directory = %request.directory.display()
        )
    )]
    pub fn plan(&self, request: &LicenseRequest) -> LicenseitResult<LicenseArtifact> {
        crate::domain::validate_base_name(&request.base_name)?;

        let author = self.authors.resolve(
            request.author.as_deref(),
            request.config_path.as_deref(),
            self.prompt.as_ref(),
        )?;
        info!(origin = author.origin(), "Author resolved");

        let name = self.templates.resolve(&request.base_name)?;
        let template = self.templates.load(&name)?;
        info!(template = %name, "Template resolved");

        let content = RenderContext::new(author.name(), request.date.as_str()).render(&template.body);

        let file_name = request
            .file_name
            .clone()
            .unwrap_or_else(|| name.default_file_name());
        let target = OutputTarget::new(request.directory.clone(), file_name)?;
        debug!(path = %target.path().display(), "Output target chosen");

        Ok(LicenseArtifact {
            template: name,
            author,
            content,
            target,
        })
    }

    /// Write a planned artifact.
    pub fn write(&self, artifact: &LicenseArtifact) -> LicenseitResult<PathBuf> {
        self.writer
            .write(&artifact.content, &artifact.target, self.confirm.as_ref())
    }

    /// Generate a license: plan, then write.
    pub fn generate(&self, request: &LicenseRequest) -> LicenseitResult<GeneratedLicense> {
        let artifact = self.plan(request)?;
        let path = self.write(&artifact)?;

        info!(path = %path.display(), "License generated");
        Ok(GeneratedLicense {
            path,
            file_name: artifact.target.file_name().to_string(),
            template: artifact.template,
            author: artifact.author,
        })
    }

    /// List all bundled templates.
    pub fn list_templates(&self) -> LicenseitResult<Vec<TemplateInfo>> {
        let suffixes = self.templates.suffixes();
        self.templates
            .list()?
            .into_iter()
            .map(|name| -> LicenseitResult<TemplateInfo> {
                let (base, suffix) = split_name(&name, suffixes);
                let title = self
                    .templates
                    .load(&TemplateName::new(base, suffix))?
                    .body
                    .lines()
                    .map(str::trim)
                    .find(|l| !l.is_empty())
                    .unwrap_or_default()
                    .to_string();
                Ok(TemplateInfo {
                    base: base.to_string(),
                    suffix: suffix.to_string(),
                    name,
                    title,
                })
            })
            .collect()
    }

    /// The author the configuration alone would yield; never prompts.
    pub fn configured_author(&self, config_path: Option<&Path>) -> Option<AuthorSource> {
        self.authors.configured_author(config_path)
    }
}

fn split_name<'a>(name: &'a str, suffixes: &[String]) -> (&'a str, &'a str) {
    suffixes
        .iter()
        .find_map(|s| {
            name.strip_suffix(s.as_str())
                .filter(|base| !base.is_empty())
                .map(|base| (base, &name[base.len()..]))
        })
        .unwrap_or((name, ""))
}
