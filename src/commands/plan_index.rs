//! `planscan plan-index <phase>` - plans of one phase grouped by wave.

use anyhow::Result;
use std::path::Path;

use super::common::print_json;
use crate::phase::PhaseId;
use crate::plan::build_plan_index;

pub fn execute(project_root: &Path, phase: PhaseId) -> Result<()> {
    print_json(&build_plan_index(project_root, phase)?)
}
