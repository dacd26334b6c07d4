use super::value::{Mapping, Value};
use super::yaml::{parse_block, YamlError};

const DELIMITER: &str = "---";

/// A markdown document split into its optional structured header and body
#[derive(Debug, Clone, PartialEq)]
pub struct FrontmatterDocument {
    /// `None` when no delimited block exists or the block is malformed
    pub header: Option<Mapping>,
    pub body: String,
}

/// Outcome of extracting the frontmatter block, before the fail-closed collapse
#[derive(Debug, Clone, PartialEq)]
pub enum BlockOutcome {
    Absent,
    Malformed(YamlError),
    Parsed { header: Mapping, body: String },
}

/// Locate and parse the frontmatter block, keeping the failure reason
///
/// The document must open with a line that is exactly `---`; the block ends at
/// the next line that is exactly `---`.
pub fn parse_block_outcome(content: &str) -> BlockOutcome {
    let Some(rest) = strip_delimiter_line(content) else {
        return BlockOutcome::Absent;
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_delimiter(line) {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return match parse_block(yaml) {
                Ok(header) => BlockOutcome::Parsed {
                    header,
                    body: body.to_string(),
                },
                Err(e) => BlockOutcome::Malformed(e),
            };
        }
        offset += line.len();
    }

    BlockOutcome::Absent
}

/// Split markdown content into header and body
///
/// Never fails: an absent, unterminated or malformed block yields
/// `header: None` with the full text as body.
pub fn parse_document(content: &str) -> FrontmatterDocument {
    match parse_block_outcome(content) {
        BlockOutcome::Parsed { header, body } => FrontmatterDocument {
            header: Some(header),
            body,
        },
        BlockOutcome::Absent => FrontmatterDocument {
            header: None,
            body: content.to_string(),
        },
        BlockOutcome::Malformed(e) => {
            tracing::debug!(error = %e, "discarding malformed frontmatter block");
            FrontmatterDocument {
                header: None,
                body: content.to_string(),
            }
        }
    }
}

/// Extract a single top-level field from a document's frontmatter
///
/// Returns `None` if the document has no usable frontmatter or lacks the field.
pub fn extract_frontmatter_field(content: &str, field: &str) -> Option<Value> {
    parse_document(content).header?.remove(field)
}

fn strip_delimiter_line(content: &str) -> Option<&str> {
    let first_len = content.find('\n').map_or(content.len(), |idx| idx + 1);
    let first = &content[..first_len];
    if is_delimiter(first) {
        Some(&content[first_len..])
    } else {
        None
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == DELIMITER
}
