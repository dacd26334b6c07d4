//! Project state snapshot extracted from `.planning/STATE.md`.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::fs::{read_optional, PlanningDir};
use crate::parser::markdown::{
    bold_fields, bullet_items, find_section, parse_sections, table_rows, Section,
};
use crate::parser::{parse_document, Mapping};

pub const STATE_NOT_FOUND: &str = "STATE.md not found";

const DECISION_COLUMNS: [&str; 3] = ["Phase", "Decision", "Rationale"];

/// Labels whose snake_case form is renamed in the snapshot
const FIELD_ALIASES: &[(&str, &str)] = &[("progress", "progress_percent")];

/// Snapshot keys filled from sections; bold fields with these labels are dropped
const RESERVED_FIELDS: [&str; 3] = ["decisions", "blockers", "session"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateDecision {
    pub phase: String,
    pub summary: String,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    /// Bold `**Label:** value` fields outside the session section
    #[serde(flatten)]
    pub fields: Mapping,
    pub decisions: Vec<StateDecision>,
    pub blockers: Vec<String>,
    pub session: Mapping,
    pub paused_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StateLookup {
    Snapshot(StateSnapshot),
    Missing { error: String },
}

/// Extract a snapshot from state document content
///
/// Absent sections leave their fields empty.
pub fn parse_state(content: &str) -> StateSnapshot {
    let body = parse_document(content).body;
    let sections = parse_sections(&body);
    let session_section = find_section(&sections, 2, "Session");

    let outside_session = match session_section {
        Some(section) => without_section(&body, section),
        None => body.clone(),
    };

    let mut fields = bold_fields(&outside_session);
    let paused_at = fields
        .remove("paused_at")
        .and_then(|v| v.to_text())
        .filter(|s| !s.is_empty());
    for reserved in RESERVED_FIELDS {
        if fields.remove(reserved).is_some() {
            tracing::debug!(field = reserved, "ignoring bold field shadowed by a section");
        }
    }
    for (from, to) in FIELD_ALIASES {
        if let Some(value) = fields.remove(from) {
            fields.insert(*to, value);
        }
    }

    let decisions = find_section(&sections, 2, "Decisions Made")
        .map(|section| {
            table_rows(&section.content, &DECISION_COLUMNS)
                .into_iter()
                .map(|row| {
                    let [phase, summary, rationale]: [String; 3] =
                        row.try_into().unwrap_or_default();
                    StateDecision {
                        phase,
                        summary,
                        rationale,
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let blockers = find_section(&sections, 2, "Blockers")
        .map(|section| bullet_items(&section.content))
        .unwrap_or_default();

    let session = session_section
        .map(|section| bold_fields(&section.content))
        .unwrap_or_default();

    StateSnapshot {
        fields,
        decisions,
        blockers,
        session,
        paused_at,
    }
}

/// Snapshot of `.planning/STATE.md`
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures; a missing state file is
/// reported in the result.
pub fn state_snapshot(project_root: &Path) -> Result<StateLookup> {
    let path = PlanningDir::new(project_root).state_path();
    Ok(match read_optional(&path)? {
        Some(content) => StateLookup::Snapshot(parse_state(&content)),
        None => StateLookup::Missing {
            error: STATE_NOT_FOUND.to_string(),
        },
    })
}

/// Body text with the given section's heading and content removed
fn without_section(body: &str, section: &Section) -> String {
    body.lines()
        .enumerate()
        .filter(|(idx, _)| !(section.start..section.end).contains(idx))
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\n")
}
