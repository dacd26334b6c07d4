//! Maps raw summary frontmatter onto the canonical field vocabulary.

use serde::Serialize;

use crate::parser::{Mapping, Value};

/// A key decision split into what was decided and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub summary: String,
    pub rationale: String,
}

impl Decision {
    /// Split `"summary: rationale"` at the first `": "`
    pub fn parse(entry: &str) -> Self {
        match entry.split_once(": ") {
            Some((summary, rationale)) => Self {
                summary: summary.trim().to_string(),
                rationale: rationale.trim().to_string(),
            },
            None => Self {
                summary: entry.trim().to_string(),
                rationale: String::new(),
            },
        }
    }
}

/// Summary frontmatter in canonical form
///
/// List fields, `key_files` included, are always present (possibly empty);
/// scalar fields are `None` when the source key is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_liner: Option<String>,
    /// Passed through as written; an empty sequence when absent
    pub key_files: Value,
    pub provides: Vec<String>,
    pub affects: Vec<String>,
    pub tech_added: Vec<String>,
    pub patterns: Vec<String>,
    pub decisions: Vec<Decision>,
}

impl Default for NormalizedSummary {
    fn default() -> Self {
        Self {
            phase: None,
            one_liner: None,
            key_files: Value::Sequence(Vec::new()),
            provides: Vec::new(),
            affects: Vec::new(),
            tech_added: Vec::new(),
            patterns: Vec::new(),
            decisions: Vec::new(),
        }
    }
}

/// Normalize a parsed summary header. Unknown keys are ignored.
pub fn normalize_summary(header: &Mapping) -> NormalizedSummary {
    let provides = match header.get_path(&["dependency-graph", "provides"]) {
        Some(nested) => string_list(Some(nested)),
        None => string_list(header.get("provides")),
    };

    NormalizedSummary {
        phase: header.get("phase").and_then(Value::to_text),
        one_liner: header.get("one-liner").and_then(Value::to_text),
        key_files: header
            .get("key-files")
            .cloned()
            .unwrap_or_else(|| Value::Sequence(Vec::new())),
        provides,
        affects: string_list(header.get_path(&["dependency-graph", "affects"])),
        tech_added: string_list(header.get_path(&["tech-stack", "added"])),
        patterns: string_list(header.get("patterns-established")),
        decisions: string_list(header.get("key-decisions"))
            .iter()
            .map(|entry| Decision::parse(entry))
            .collect(),
    }
}

/// Scalar items of a sequence as strings; any other shape is empty
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(Value::to_text)
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::Scalar(_)) | Some(Value::Mapping(_)) | None => Vec::new(),
    }
}
