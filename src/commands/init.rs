//! `planscan init <workflow>` - bootstrap context for a workflow step.

use anyhow::Result;
use std::path::Path;

use super::common::print_json;
use crate::init::{execute_phase_context, plan_phase_context, progress_context, IncludeFile};
use crate::phase::PhaseId;

pub fn execute_phase(project_root: &Path, phase: PhaseId, include: &[IncludeFile]) -> Result<()> {
    print_json(&execute_phase_context(project_root, phase, include)?)
}

pub fn plan_phase(project_root: &Path, phase: PhaseId, include: &[IncludeFile]) -> Result<()> {
    print_json(&plan_phase_context(project_root, phase, include)?)
}

pub fn progress(project_root: &Path, include: &[IncludeFile]) -> Result<()> {
    print_json(&progress_context(project_root, include)?)
}
