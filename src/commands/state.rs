//! `planscan state` - snapshot of STATE.md.

use anyhow::Result;
use std::path::Path;

use super::common::print_json;
use crate::state::state_snapshot;

pub fn execute(project_root: &Path) -> Result<()> {
    print_json(&state_snapshot(project_root)?)
}
