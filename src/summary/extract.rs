//! Single summary document extraction.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use super::normalize::{normalize_summary, NormalizedSummary};
use crate::fs::{read_optional, resolve_path};
use crate::parser::{parse_document, Mapping};

/// Outcome of extracting one summary document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryExtract {
    Extracted {
        path: String,
        #[serde(flatten)]
        summary: NormalizedSummary,
    },
    /// Only the requested fields, in request order
    Selected {
        path: String,
        #[serde(flatten)]
        fields: serde_json::Map<String, serde_json::Value>,
    },
    Missing {
        error: String,
        path: String,
    },
}

/// Extract the canonical fields of one summary document
///
/// `file` is resolved against `project_root` for reading and echoed as given.
/// `fields` restricts the output to the named canonical fields; unknown names
/// are omitted. A document without usable frontmatter normalizes to empty
/// list fields.
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures.
pub fn extract_summary(
    project_root: &Path,
    file: &Path,
    fields: Option<&[String]>,
) -> Result<SummaryExtract> {
    let display = file.display().to_string();
    let Some(content) = read_optional(&resolve_path(project_root, file))? else {
        return Ok(SummaryExtract::Missing {
            error: "File not found".to_string(),
            path: display,
        });
    };

    let header = parse_document(&content).header.unwrap_or_else(Mapping::new);
    let summary = normalize_summary(&header);

    let Some(fields) = fields else {
        return Ok(SummaryExtract::Extracted {
            path: display,
            summary,
        });
    };

    let all = match serde_json::to_value(&summary)? {
        serde_json::Value::Object(all) => all,
        _ => serde_json::Map::new(),
    };
    let selected = fields
        .iter()
        .filter_map(|name| all.get(name).map(|v| (name.clone(), v.clone())))
        .collect();

    Ok(SummaryExtract::Selected {
        path: display,
        fields: selected,
    })
}
