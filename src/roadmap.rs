//! Roadmap phase lookup over `### Phase <token>: <name>` headings.

use anyhow::Result;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::path::Path;
use std::sync::LazyLock;

use crate::fs::{read_optional, PlanningDir};
use crate::parser::markdown::{bold_field, trim_blank_lines};
use crate::phase::tokens_match;

static PHASE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^###\s+Phase\s+(\d+(?:\.\d+)*)\s*:\s*(.*?)\s*$").expect("Invalid regex pattern")
});

pub const ROADMAP_NOT_FOUND: &str = "ROADMAP.md not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapSection {
    pub phase_number: String,
    pub phase_name: String,
    pub goal: Option<String>,
    pub section: String,
}

/// Result of a roadmap phase lookup
///
/// `Missing` without an error means the roadmap exists but has no such phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadmapLookup {
    Found(RoadmapSection),
    Missing { error: Option<String> },
}

impl Serialize for RoadmapLookup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RoadmapLookup::Found(section) => {
                let mut map = serializer.serialize_map(Some(5))?;
                map.serialize_entry("found", &true)?;
                map.serialize_entry("phase_number", &section.phase_number)?;
                map.serialize_entry("phase_name", &section.phase_name)?;
                map.serialize_entry("goal", &section.goal)?;
                map.serialize_entry("section", &section.section)?;
                map.end()
            }
            RoadmapLookup::Missing { error } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("found", &false)?;
                if let Some(error) = error {
                    map.serialize_entry("error", error)?;
                }
                map.end()
            }
        }
    }
}

/// Find the section for `phase` in roadmap content
pub fn find_roadmap_phase(content: &str, phase: &str) -> RoadmapLookup {
    let lines: Vec<&str> = content.lines().collect();
    let headings: Vec<(usize, &str, &str)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let caps = PHASE_HEADING.captures(line)?;
            Some((idx, caps.get(1)?.as_str(), caps.get(2)?.as_str()))
        })
        .collect();

    let Some(pos) = headings
        .iter()
        .position(|(_, token, _)| tokens_match(token, phase))
    else {
        return RoadmapLookup::Missing { error: None };
    };

    let (start, token, name) = headings[pos];
    let end = headings.get(pos + 1).map_or(lines.len(), |(idx, _, _)| *idx);
    let body = &lines[start + 1..end];

    let goal = body
        .iter()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| bold_field(line))
        .filter(|(label, _)| label.eq_ignore_ascii_case("goal"))
        .map(|(_, value)| value.to_string());

    RoadmapLookup::Found(RoadmapSection {
        phase_number: token.to_string(),
        phase_name: name.to_string(),
        goal,
        section: trim_blank_lines(&body.join("\n")),
    })
}

/// Look up a phase in `.planning/ROADMAP.md`
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures; a missing roadmap is
/// reported in the result.
pub fn get_roadmap_phase(project_root: &Path, phase: &str) -> Result<RoadmapLookup> {
    let path = PlanningDir::new(project_root).roadmap_path();
    match read_optional(&path)? {
        Some(content) => Ok(find_roadmap_phase(&content, phase)),
        None => Ok(RoadmapLookup::Missing {
            error: Some(ROADMAP_NOT_FOUND.to_string()),
        }),
    }
}
