//! Free-form markdown extraction: heading sections, bold fields, pipe tables
//! and bullet lists.

use regex::Regex;
use std::sync::LazyLock;

use super::value::{Mapping, Scalar, Value};

static BOLD_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*([^*]+?):\*\*\s*(.*?)\s*$").expect("Invalid regex pattern")
});
/// Unpadded integers only; `03` keeps its padding as text
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(?:0|[1-9]\d*)$").expect("Invalid regex pattern"));
static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d+(?:\.\d+)?)\s*%$").expect("Invalid regex pattern"));

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub level: u8,
    pub title: String,
    pub content: String,
    /// Line index of the heading within the parsed body
    pub start: usize,
    /// Line index one past the section's last line
    pub end: usize,
}

impl Section {
    pub fn trimmed_content(&self) -> String {
        self.content.trim().to_string()
    }
}

/// Split a markdown body into heading-delimited sections
///
/// A section's content runs until the next heading of the same or a
/// shallower level, so it includes its own subsections.
pub fn parse_sections(body: &str) -> Vec<Section> {
    let lines: Vec<&str> = body.lines().collect();
    let mut sections = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some((level, title)) = heading(line) else {
            continue;
        };
        let end = lines[idx + 1..]
            .iter()
            .position(|l| heading(l).is_some_and(|(other, _)| other <= level))
            .map_or(lines.len(), |offset| idx + 1 + offset);

        sections.push(Section {
            level,
            title: title.to_string(),
            content: lines[idx + 1..end].join("\n"),
            start: idx,
            end,
        });
    }

    sections
}

/// Find the first section at `level` whose title starts with `prefix`
/// (case-insensitive)
pub fn find_section<'a>(sections: &'a [Section], level: u8, prefix: &str) -> Option<&'a Section> {
    let prefix = prefix.to_lowercase();
    sections
        .iter()
        .find(|s| s.level == level && s.title.to_lowercase().starts_with(&prefix))
}

/// Parse an ATX heading line into `(level, title)`
pub fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    Some((hashes as u8, rest.trim()))
}

/// Match a `**Label:** value` line
pub fn bold_field(line: &str) -> Option<(&str, &str)> {
    let caps = BOLD_FIELD.captures(line.trim())?;
    Some((caps.get(1)?.as_str().trim(), caps.get(2)?.as_str()))
}

/// Collect every bold field in `text`, keyed by snake_case label
///
/// Later occurrences of the same label replace earlier ones.
pub fn bold_fields(text: &str) -> Mapping {
    text.lines()
        .filter_map(bold_field)
        .map(|(label, value)| (snake_case(label), coerce_field(value)))
        .collect()
}

/// `"Last Activity"` → `"last_activity"`
pub fn snake_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Integer literals and `%`-suffixed values become numbers
pub fn coerce_field(value: &str) -> Value {
    let value = value.trim();
    let number = PERCENT
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .or_else(|| INTEGER.is_match(value).then_some(value));

    if let Some(number) = number {
        if let Ok(n) = number.parse::<i64>() {
            return Value::Scalar(Scalar::Integer(n));
        }
        if let Ok(n) = number.parse::<f64>() {
            return Value::Scalar(Scalar::Float(n));
        }
    }
    Value::string(value)
}

/// Rows of the first pipe table in `text` whose header cells match
/// `columns` (case-insensitive); header and separator rows are skipped
pub fn table_rows(text: &str, columns: &[&str]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut in_table = false;

    for line in text.lines() {
        let Some(cells) = table_cells(line) else {
            if in_table {
                break;
            }
            continue;
        };

        if !in_table {
            in_table = cells.len() >= columns.len()
                && columns
                    .iter()
                    .zip(&cells)
                    .all(|(want, got)| want.eq_ignore_ascii_case(got));
            continue;
        }
        if is_separator_row(&cells) {
            continue;
        }

        let mut row: Vec<String> = cells.into_iter().take(columns.len()).collect();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    rows
}

fn table_cells(line: &str) -> Option<Vec<String>> {
    let line = line.trim();
    let inner = line.strip_prefix('|')?;
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    Some(inner.split('|').map(|c| c.trim().to_string()).collect())
}

fn is_separator_row(cells: &[String]) -> bool {
    cells.iter().all(|c| {
        !c.is_empty() && c.chars().all(|ch| matches!(ch, '-' | ':' | ' '))
    })
}

/// Text of every `- item` / `* item` bullet in `text`, in order
pub fn bullet_items(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim_start();
            line.strip_prefix("- ")
                .or_else(|| line.strip_prefix("* "))
                .map(|item| item.trim().to_string())
        })
        .filter(|item| !item.is_empty())
        .collect()
}

/// Drop leading and trailing blank lines, keeping inner indentation
pub fn trim_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
