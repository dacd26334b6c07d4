//! Plan document parser - pulls execution metadata from frontmatter and body

use regex::Regex;
use std::sync::LazyLock;

use crate::parser::{parse_document, Value};
use crate::summary::string_list;

/// Wave assigned to plans that do not declare one
pub const DEFAULT_WAVE: i64 = 1;

static TASK_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##\s+Task\s+\d+\s*:").expect("Invalid regex pattern")
});
static TASK_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<task[\s>]").expect("Invalid regex pattern"));

/// Execution metadata of one plan document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanMetadata {
    pub wave: i64,
    pub autonomous: bool,
    pub objective: String,
    pub files_modified: Vec<String>,
    pub task_count: usize,
    /// Whether the document had usable frontmatter
    pub has_frontmatter: bool,
}

/// Parse plan content (for testing without file system)
///
/// Absent or malformed frontmatter leaves every field at its default.
pub fn parse_plan_content(content: &str) -> PlanMetadata {
    let doc = parse_document(content);
    let header = doc.header.as_ref();
    let field = |key: &str| header.and_then(|h| h.get(key));

    let objective = field("objective")
        .and_then(Value::to_text)
        .filter(|s| !s.is_empty())
        .or_else(|| objective_block(&doc.body))
        .unwrap_or_default();

    let files_modified = match field("files-modified") {
        Some(value) => string_list(Some(value)),
        None => string_list(field("files_modified")),
    };

    PlanMetadata {
        wave: field("wave").and_then(Value::as_i64).unwrap_or(DEFAULT_WAVE),
        autonomous: field("autonomous").and_then(Value::as_bool).unwrap_or(true),
        objective,
        files_modified,
        task_count: count_tasks(&doc.body),
        has_frontmatter: header.is_some(),
    }
}

/// Count `## Task <n>:` headings, falling back to `<task>` elements
pub fn count_tasks(body: &str) -> usize {
    let headings = body
        .lines()
        .filter(|line| TASK_HEADING.is_match(line.trim_end()))
        .count();
    if headings > 0 {
        return headings;
    }
    TASK_ELEMENT.find_iter(body).count()
}

/// First non-blank line inside an `<objective>` block
fn objective_block(body: &str) -> Option<String> {
    let start = body.find("<objective>")? + "<objective>".len();
    let end = body[start..].find("</objective>").map_or(body.len(), |e| start + e);
    body[start..end]
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
