//! Implementation of the `licenseit preview` command.

use serde::Serialize;

use licenseit_core::application::TemplateInfo;

use super::license_service;
use crate::{
    cli::{PreviewArgs, PreviewFormat},
    error::CliResult,
    output::OutputManager,
};

/// JSON shape of one template entry.
#[derive(Debug, Serialize)]
struct TemplateDto<'a> {
    name: &'a str,
    base: &'a str,
    suffix: &'a str,
    title: &'a str,
}

impl<'a> From<&'a TemplateInfo> for TemplateDto<'a> {
    fn from(info: &'a TemplateInfo) -> Self {
        Self {
            name: &info.name,
            base: &info.base,
            suffix: &info.suffix,
            title: &info.title,
        }
    }
}

pub fn execute(args: PreviewArgs, output: &OutputManager) -> CliResult<()> {
    let templates = license_service(false)?.list_templates()?;

    match args.format {
        PreviewFormat::Table => {
            output.header("Available license templates:")?;
            output.data(&table(&templates))?;
        }
        PreviewFormat::List => {
            for t in &templates {
                output.data(&t.name)?;
            }
        }
        PreviewFormat::Json => output.data(&to_json(&templates)?)?,
    }

    Ok(())
}

fn table(templates: &[TemplateInfo]) -> String {
    let width = templates.iter().map(|t| t.base.len()).max().unwrap_or(0);
    let name_width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);

    templates
        .iter()
        .map(|t| {
            let row = format!("  {:<width$}  {:<name_width$}  {}", t.base, t.name, t.title);
            format!("{}\n", row.trim_end())
        })
        .collect()
}

fn to_json(templates: &[TemplateInfo]) -> serde_json::Result<String> {
    let dtos: Vec<TemplateDto<'_>> = templates.iter().map(TemplateDto::from).collect();
    serde_json::to_string_pretty(&dtos)
}
