//! Phase commands: listing, lookup and decimal slot allocation.

use anyhow::Result;
use std::path::Path;

use super::common::print_json;
use crate::phase::{find_phase, list_phases, next_decimal_phase, PhaseFileKind, PhaseId};

/// `planscan phases [--type plans|summaries] [--phase <phase>]`
pub fn list(project_root: &Path, kind: Option<PhaseFileKind>, phase: Option<PhaseId>) -> Result<()> {
    print_json(&list_phases(project_root, kind, phase)?)
}

/// `planscan find-phase <phase>`
pub fn find(project_root: &Path, phase: PhaseId) -> Result<()> {
    print_json(&find_phase(project_root, phase)?)
}

/// `planscan next-decimal <phase>`
pub fn next_decimal(project_root: &Path, base: PhaseId) -> Result<()> {
    print_json(&next_decimal_phase(project_root, base)?)
}
