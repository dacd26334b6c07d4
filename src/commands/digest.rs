//! `planscan digest` - project-wide digest of every phase summary.

use anyhow::Result;
use std::path::Path;

use super::common::print_json;
use crate::summary::build_digest;

pub fn execute(project_root: &Path) -> Result<()> {
    let digest = build_digest(project_root)?;
    tracing::debug!(
        phases = digest.phases.len(),
        decisions = digest.decisions.len(),
        "digest built"
    );
    print_json(&digest)
}
