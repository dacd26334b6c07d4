//! `planscan frontmatter` - dump one document's parsed frontmatter.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use super::common::print_json;
use crate::fs::{read_optional, resolve_path};
use crate::parser::{parse_document, Mapping, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FrontmatterLookup {
    Header(Mapping),
    Field(Value),
    Missing {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<String>,
    },
}

impl FrontmatterLookup {
    fn missing(error: &str, path: Option<&Path>, field: Option<&str>) -> Self {
        FrontmatterLookup::Missing {
            error: error.to_string(),
            path: path.map(|p| p.display().to_string()),
            field: field.map(str::to_string),
        }
    }
}

/// Parse the frontmatter of `file`, optionally narrowing to one field
///
/// `file` is resolved against `project_root` and echoed as given.
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures.
pub fn lookup_frontmatter(
    project_root: &Path,
    file: &Path,
    field: Option<&str>,
) -> Result<FrontmatterLookup> {
    let Some(content) = read_optional(&resolve_path(project_root, file))? else {
        return Ok(FrontmatterLookup::missing("File not found", Some(file), None));
    };
    let Some(mut header) = parse_document(&content).header else {
        return Ok(FrontmatterLookup::missing("No frontmatter", Some(file), None));
    };

    Ok(match field {
        None => FrontmatterLookup::Header(header),
        Some(field) => match header.remove(field) {
            Some(value) => FrontmatterLookup::Field(value),
            None => FrontmatterLookup::missing("Field not found", None, Some(field)),
        },
    })
}

pub fn execute(project_root: &Path, file: &Path, field: Option<String>) -> Result<()> {
    print_json(&lookup_frontmatter(project_root, file, field.as_deref())?)
}
