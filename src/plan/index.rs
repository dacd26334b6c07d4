//! Per-phase plan index: waves, completion and checkpoints.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use super::document::parse_plan_content;
use crate::fs::{PLAN_SUFFIX, SUMMARY_SUFFIX};
use crate::phase::{find_phase_dir, PhaseDir, PhaseId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub id: String,
    pub wave: i64,
    pub autonomous: bool,
    pub objective: String,
    pub files_modified: Vec<String>,
    pub task_count: usize,
    pub has_summary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanIndex {
    pub phase: String,
    pub plans: Vec<PlanEntry>,
    pub waves: BTreeMap<i64, Vec<String>>,
    pub incomplete: Vec<String>,
    pub has_checkpoints: bool,
}

impl PlanIndex {
    /// Assemble the index from plan entries in plan order
    pub fn from_entries(phase: PhaseId, plans: Vec<PlanEntry>) -> Self {
        let mut waves: BTreeMap<i64, Vec<String>> = BTreeMap::new();
        for plan in &plans {
            waves.entry(plan.wave).or_default().push(plan.id.clone());
        }
        let incomplete = plans
            .iter()
            .filter(|p| !p.has_summary)
            .map(|p| p.id.clone())
            .collect();
        let has_checkpoints = plans.iter().any(|p| !p.autonomous);

        Self {
            phase: phase.to_string(),
            plans,
            waves,
            incomplete,
            has_checkpoints,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlanIndexLookup {
    Index(PlanIndex),
    PhaseNotFound { error: String, phase: String },
}

/// Plan id from a plan file name: `06-01-PLAN.md` → `06-01`
pub fn plan_id(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(PLAN_SUFFIX)?;
    let stem = stem.strip_suffix('-').unwrap_or(stem);
    (!stem.is_empty()).then_some(stem)
}

/// Index the plans of one phase directory
///
/// # Errors
///
/// Returns an error if the directory or a plan document cannot be read.
pub fn index_phase_dir(dir: &PhaseDir) -> Result<PlanIndex> {
    let summaries: HashSet<String> = dir.summary_files()?.into_iter().collect();
    let mut plans = Vec::new();

    for name in dir.plan_files()? {
        let Some(id) = plan_id(&name) else {
            continue;
        };
        let path = dir.path.join(&name);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read plan file: {}", path.display()))?;

        let meta = parse_plan_content(&content);
        if !meta.has_frontmatter {
            tracing::debug!(path = %path.display(), "plan has no usable frontmatter, using defaults");
        }

        plans.push(PlanEntry {
            id: id.to_string(),
            wave: meta.wave,
            autonomous: meta.autonomous,
            objective: meta.objective,
            files_modified: meta.files_modified,
            task_count: meta.task_count,
            has_summary: summaries.contains(&format!("{id}-{SUMMARY_SUFFIX}")),
        });
    }

    Ok(PlanIndex::from_entries(dir.id, plans))
}

/// Build the plan index for a phase token under `project_root`
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures.
pub fn build_plan_index(project_root: &Path, phase: PhaseId) -> Result<PlanIndexLookup> {
    match find_phase_dir(project_root, phase)? {
        Some(dir) => index_phase_dir(&dir).map(PlanIndexLookup::Index),
        None => Ok(PlanIndexLookup::PhaseNotFound {
            error: "Phase not found".to_string(),
            phase: phase.to_string(),
        }),
    }
}
