//! `planscan summary` - normalized fields of one summary document.

use anyhow::Result;
use std::path::Path;

use super::common::print_json;
use crate::summary::extract_summary;

pub fn execute(project_root: &Path, file: &Path, fields: Option<Vec<String>>) -> Result<()> {
    print_json(&extract_summary(project_root, file, fields.as_deref())?)
}
