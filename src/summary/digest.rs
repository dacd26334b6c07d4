//! Project-wide digest built from every phase summary document.

use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::normalize::{normalize_summary, NormalizedSummary};
use crate::fs::read_optional;
use crate::parser::parse_document;
use crate::phase::{list_phase_dirs, PhaseId};

/// Accumulated fields for one phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhaseDigestEntry {
    pub provides: BTreeSet<String>,
    pub affects: BTreeSet<String>,
    pub patterns: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestDecision {
    pub phase: String,
    pub decision: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectDigest {
    pub phases: BTreeMap<PhaseId, PhaseDigestEntry>,
    pub decisions: Vec<DigestDecision>,
    pub tech_stack: BTreeSet<String>,
}

impl ProjectDigest {
    /// Merge one normalized summary found in the directory for `phase`
    ///
    /// The directory identifier is the key even when the document names a
    /// different phase.
    pub fn merge(&mut self, phase: PhaseId, summary: NormalizedSummary) {
        let entry = self.phases.entry(phase).or_default();
        entry.provides.extend(summary.provides);
        entry.affects.extend(summary.affects);
        entry.patterns.extend(summary.patterns);

        let label = phase.to_string();
        self.decisions
            .extend(summary.decisions.into_iter().map(|d| DigestDecision {
                phase: label.clone(),
                decision: d.summary,
            }));
        self.tech_stack.extend(summary.tech_added);
    }
}

/// Build the digest over all phase directories under `project_root`
///
/// Summaries with absent or malformed frontmatter are skipped.
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures.
pub fn build_digest(project_root: &Path) -> Result<ProjectDigest> {
    let mut digest = ProjectDigest::default();

    for dir in list_phase_dirs(project_root)? {
        for name in dir.summary_files()? {
            let path = dir.path.join(&name);
            let Some(content) = read_optional(&path)? else {
                continue;
            };

            let Some(header) = parse_document(&content).header else {
                tracing::debug!(path = %path.display(), "skipping summary without usable frontmatter");
                continue;
            };

            let summary = normalize_summary(&header);
            if let Some(declared) = summary.phase.as_deref() {
                let declared_id = PhaseId::from_name(declared).or_else(|| declared.parse().ok());
                if declared_id != Some(dir.id) {
                    tracing::warn!(
                        path = %path.display(),
                        declared,
                        directory = %dir.id,
                        "summary phase field disagrees with its directory"
                    );
                }
            }

            tracing::trace!(path = %path.display(), "merging summary");
            digest.merge(dir.id, summary);
        }
    }

    Ok(digest)
}
