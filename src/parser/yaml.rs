//! Restrictive YAML-subset parser for frontmatter blocks.
//!
//! Supported productions, driven by 2-space indentation:
//! - `key: value` with bare, quoted or `true`/`false`/numeric scalars
//! - `key: [a, "b"]` inline sequences
//! - `key:` followed by deeper `- item` lines (block sequence)
//! - `key:` followed by deeper `subkey: value` lines (nested mapping)
//! - a bare `-` item followed by a deeper block (nested sequence or mapping)
//!
//! Anything else is malformed and fails the whole block. Callers never get a
//! partially parsed mapping.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::value::{Mapping, Scalar, Value};

/// Indentation step between a key and its nested content
pub const INDENT_STEP: usize = 2;

static KEY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:"([^"]*)"|'([^']*)'|([A-Za-z0-9_][\w.\- ]*?))\s*:(?:\s+(.*))?$"#)
        .expect("Invalid regex pattern")
});
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("Invalid regex pattern"));
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+\.\d+$").expect("Invalid regex pattern"));

/// Parse failure, carrying the 1-based line number within the block
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct YamlError {
    pub line: usize,
    pub kind: YamlErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum YamlErrorKind {
    #[error("tab character in indentation")]
    TabIndent,
    #[error("unexpected indentation")]
    UnexpectedIndent,
    #[error("expected `key: value`")]
    NotAKeyLine,
    #[error("list item where a mapping entry was expected")]
    StrayListItem,
    #[error("expected a `- item` line")]
    ExpectedListItem,
    #[error("compact nested sequences (`- - x`) are not supported")]
    CompactNestedSequence,
    #[error("scalar value cannot have nested content")]
    ScalarWithChildren,
    #[error("unterminated quoted scalar")]
    UnterminatedQuote,
    #[error("unmatched bracket")]
    UnmatchedBracket,
    #[error("empty item in inline sequence")]
    EmptyFlowItem,
    #[error("nested inline collections are not supported")]
    NestedFlow,
    #[error("inline mappings are not supported")]
    FlowMapping,
    #[error("unexpected content after value")]
    TrailingContent,
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    indent: usize,
    text: &'a str,
}

impl Line<'_> {
    fn error(&self, kind: YamlErrorKind) -> YamlError {
        YamlError {
            line: self.number,
            kind,
        }
    }
}

/// Parse the text between frontmatter delimiters into a mapping
///
/// # Errors
///
/// Returns the first line that does not match a supported production.
pub fn parse_block(text: &str) -> Result<Mapping, YamlError> {
    let lines = tokenize(text)?;
    let mut parser = Parser { lines, pos: 0 };

    let mapping = parser.parse_mapping(0)?;
    if let Some(line) = parser.peek() {
        return Err(line.error(YamlErrorKind::UnexpectedIndent));
    }
    Ok(mapping)
}

/// Parse a single inline value (the part after `key: ` or `- `)
///
/// # Errors
///
/// Returns the reason the value is not a supported scalar or inline sequence.
pub fn parse_inline(raw: &str) -> Result<Value, YamlErrorKind> {
    let raw = raw.trim();
    match raw.chars().next() {
        Some('[') => parse_flow_sequence(raw).map(Value::Sequence),
        Some('{') => {
            if strip_comment(raw) == "{}" {
                Ok(Value::Mapping(Mapping::new()))
            } else {
                Err(YamlErrorKind::FlowMapping)
            }
        }
        Some(']') | Some('}') => Err(YamlErrorKind::UnmatchedBracket),
        Some(q @ ('"' | '\'')) => unquote(raw, q).map(Value::string),
        _ => Ok(Value::Scalar(coerce(strip_comment(raw)))),
    }
}

/// Coerce a bare scalar to boolean, integer or decimal where it matches
pub fn coerce(raw: &str) -> Scalar {
    match raw {
        "true" => return Scalar::Bool(true),
        "false" => return Scalar::Bool(false),
        _ => {}
    }
    if INTEGER.is_match(raw) {
        if let Ok(n) = raw.parse() {
            return Scalar::Integer(n);
        }
    } else if DECIMAL.is_match(raw) {
        if let Ok(n) = raw.parse() {
            return Scalar::Float(n);
        }
    }
    Scalar::String(raw.to_string())
}

fn tokenize(text: &str) -> Result<Vec<Line<'_>>, YamlError> {
    let mut lines = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let raw = raw.trim_end();
        if raw.is_empty() {
            continue;
        }
        let content = raw.trim_start_matches(' ');
        if content.starts_with(char::is_whitespace) {
            return Err(YamlError {
                line: idx + 1,
                kind: YamlErrorKind::TabIndent,
            });
        }
        if content.starts_with('#') {
            continue;
        }
        lines.push(Line {
            number: idx + 1,
            indent: raw.len() - content.len(),
            text: content,
        });
    }
    Ok(lines)
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.pos).copied()
    }

    fn parse_mapping(&mut self, indent: usize) -> Result<Mapping, YamlError> {
        let mut mapping = Mapping::new();

        while let Some(line) = self.peek() {
            if line.indent < indent {
                break;
            }
            if line.indent > indent {
                return Err(line.error(YamlErrorKind::UnexpectedIndent));
            }
            if list_item_text(line.text).is_some() {
                return Err(line.error(YamlErrorKind::StrayListItem));
            }

            let (key, rest) =
                split_key(line.text).ok_or_else(|| line.error(YamlErrorKind::NotAKeyLine))?;
            self.pos += 1;

            let value = match rest {
                Some(rest) => {
                    let value = parse_inline(rest).map_err(|kind| line.error(kind))?;
                    self.reject_children(indent)?;
                    value
                }
                None => self.parse_nested(indent)?,
            };
            mapping.insert(key, value);
        }

        Ok(mapping)
    }

    fn parse_sequence(&mut self, indent: usize) -> Result<Vec<Value>, YamlError> {
        let mut items = Vec::new();

        while let Some(line) = self.peek() {
            if line.indent < indent {
                break;
            }
            if line.indent > indent {
                return Err(line.error(YamlErrorKind::UnexpectedIndent));
            }
            let item = list_item_text(line.text)
                .ok_or_else(|| line.error(YamlErrorKind::ExpectedListItem))?;
            self.pos += 1;

            let value = if item.is_empty() {
                self.parse_nested(indent)?
            } else {
                if list_item_text(item).is_some() {
                    return Err(line.error(YamlErrorKind::CompactNestedSequence));
                }
                let value = parse_inline(item).map_err(|kind| line.error(kind))?;
                self.reject_children(indent)?;
                value
            };
            items.push(value);
        }

        Ok(items)
    }

    /// Content owned by a bare `key:` or `-` line at `parent` indent
    fn parse_nested(&mut self, parent: usize) -> Result<Value, YamlError> {
        let next = match self.peek() {
            Some(next) if next.indent > parent => next,
            _ => return Ok(Value::Mapping(Mapping::new())),
        };

        let child = parent + INDENT_STEP;
        if next.indent != child {
            return Err(next.error(YamlErrorKind::UnexpectedIndent));
        }

        if list_item_text(next.text).is_some() {
            self.parse_sequence(child).map(Value::Sequence)
        } else {
            self.parse_mapping(child).map(Value::Mapping)
        }
    }

    fn reject_children(&self, indent: usize) -> Result<(), YamlError> {
        match self.peek() {
            Some(next) if next.indent > indent => {
                Err(next.error(YamlErrorKind::ScalarWithChildren))
            }
            _ => Ok(()),
        }
    }
}

fn list_item_text(text: &str) -> Option<&str> {
    if text == "-" {
        return Some("");
    }
    text.strip_prefix("- ").map(str::trim)
}

/// Split a `key: rest` line; `rest` is `None` for a bare `key:`
fn split_key(text: &str) -> Option<(String, Option<&str>)> {
    let caps = KEY_LINE.captures(text)?;
    let key = caps
        .get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))?
        .as_str()
        .trim()
        .to_string();
    let rest = caps
        .get(4)
        .map(|m| m.as_str().trim())
        .filter(|rest| !rest.is_empty() && !rest.starts_with('#'));
    Some((key, rest))
}

fn strip_comment(raw: &str) -> &str {
    match raw.find(" #") {
        Some(idx) => raw[..idx].trim_end(),
        None => raw,
    }
}

fn unquote(raw: &str, quote: char) -> Result<String, YamlErrorKind> {
    let close = raw[1..]
        .rfind(quote)
        .map(|idx| idx + 1)
        .ok_or(YamlErrorKind::UnterminatedQuote)?;
    let trailing = raw[close + 1..].trim();
    if !trailing.is_empty() && !trailing.starts_with('#') {
        return Err(YamlErrorKind::TrailingContent);
    }
    Ok(raw[1..close].to_string())
}

fn parse_flow_sequence(raw: &str) -> Result<Vec<Value>, YamlErrorKind> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut closed_at = None;

    for (idx, ch) in raw.char_indices().skip(1) {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            current.push(ch);
            continue;
        }
        match ch {
            '"' | '\'' if current.trim().is_empty() => {
                quote = Some(ch);
                current.push(ch);
            }
            ',' => {
                if current.trim().is_empty() {
                    return Err(YamlErrorKind::EmptyFlowItem);
                }
                items.push(flow_item(&current)?);
                current.clear();
            }
            ']' => {
                closed_at = Some(idx);
                break;
            }
            '[' | '{' => return Err(YamlErrorKind::NestedFlow),
            _ => current.push(ch),
        }
    }

    if quote.is_some() {
        return Err(YamlErrorKind::UnterminatedQuote);
    }
    let closed_at = closed_at.ok_or(YamlErrorKind::UnmatchedBracket)?;
    let trailing = raw[closed_at + 1..].trim();
    if !trailing.is_empty() && !trailing.starts_with('#') {
        return Err(YamlErrorKind::TrailingContent);
    }
    if !current.trim().is_empty() {
        items.push(flow_item(&current)?);
    }
    Ok(items)
}

fn flow_item(raw: &str) -> Result<Value, YamlErrorKind> {
    let raw = raw.trim();
    match raw.chars().next() {
        Some(q @ ('"' | '\'')) => unquote(raw, q).map(Value::string),
        _ => Ok(Value::Scalar(coerce(raw))),
    }
}
