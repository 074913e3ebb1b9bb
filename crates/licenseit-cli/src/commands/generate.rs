//! Implementation of `licenseit <TEMPLATE>`.
//!
//! Responsibility: translate CLI arguments into a `LicenseRequest`, call the
//! core license service, and display results.

use tracing::{info, instrument};

use licenseit_core::application::LicenseRequest;

use super::license_service;
use crate::{
    cli::{GenerateArgs, GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the generate action.
///
/// 1. Build the request from flags
/// 2. Wire the adapters (`--force` swaps the overwrite prompt out)
/// 3. Plan; on `--dry-run` print the license and stop
/// 4. Write and report the absolute path
#[instrument(skip_all, fields(template = ?args.template))]
pub fn execute(args: GenerateArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let request = build_request(&args, global)?;
    let service = license_service(args.force)?;

    let artifact = service.plan(&request)?;

    if args.dry_run {
        output.info(&format!(
            "Dry run: would write '{}'",
            artifact.target.path().display()
        ))?;
        output.data(&artifact.content)?;
        return Ok(());
    }

    let path = service.write(&artifact)?;
    info!(path = %path.display(), "License written");

    output.success(&format!(
        "License '{}' created at '{}' for author: {}",
        artifact.target.file_name(),
        path.display(),
        artifact.author
    ))?;

    Ok(())
}

fn build_request(args: &GenerateArgs, global: &GlobalArgs) -> CliResult<LicenseRequest> {
    let template = args
        .template
        .as_deref()
        .ok_or_else(|| CliError::InvalidInput {
            message: "a template name is required".into(),
        })?;

    let mut request = LicenseRequest::new(template).with_directory(&args.dir);
    if let Some(author) = &args.author {
        request = request.with_author(author);
    }
    if let Some(config) = &global.config {
        request = request.with_config_path(config);
    }
    if let Some(file) = &args.file {
        request = request.with_file_name(file);
    }
    if let Some(date) = &args.date {
        request = request.with_date(date);
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::OutputFormat;

    fn global(config: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: config.map(PathBuf::from),
            output_format: OutputFormat::Plain,
        }
    }

    fn args(template: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            template: template.map(String::from),
            author: None,
            file: None,
            dir: PathBuf::from("."),
            date: None,
            force: false,
            dry_run: false,
        }
    }

    #[test]
    fn request_carries_every_flag() {
        let mut a = args(Some("MIT"));
        a.author = Some("Jane".into());
        a.file = Some("LICENSE".into());
        a.dir = PathBuf::from("legal");
        a.date = Some("2020".into());

        let request = build_request(&a, &global(Some("team.json"))).unwrap();
        assert_eq!(request.base_name, "MIT");
        assert_eq!(request.author.as_deref(), Some("Jane"));
        assert_eq!(request.file_name.as_deref(), Some("LICENSE"));
        assert_eq!(request.directory, PathBuf::from("legal"));
        assert_eq!(request.date, "2020");
        assert_eq!(request.config_path, Some(PathBuf::from("team.json")));
    }

    #[test]
    fn defaults_leave_optional_fields_empty() {
        let request = build_request(&args(Some("ISC")), &global(None)).unwrap();
        assert_eq!(request.author, None);
        assert_eq!(request.config_path, None);
        assert_eq!(request.file_name, None);
        assert_eq!(request.date.len(), 4);
    }

    #[test]
    fn missing_template_is_invalid_input() {
        let err = build_request(&args(None), &global(None)).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
