//! `planscan roadmap <phase>` - one phase's roadmap section.

use anyhow::Result;
use std::path::Path;

use super::common::print_json;
use crate::phase::PhaseId;
use crate::roadmap::get_roadmap_phase;

pub fn execute(project_root: &Path, phase: PhaseId) -> Result<()> {
    print_json(&get_roadmap_phase(project_root, &phase.to_string())?)
}
