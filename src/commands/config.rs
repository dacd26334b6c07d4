//! `planscan config [key]` - planning configuration lookup.

use anyhow::Result;
use serde_json::json;
use std::path::Path;

use super::common::print_json;
use crate::fs::load_config;

/// Resolve `key` (or the whole effective config) to a JSON value
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn lookup(project_root: &Path, key: Option<&str>) -> Result<serde_json::Value> {
    let loaded = load_config(project_root)?;
    match key {
        None => loaded.effective(),
        Some(key) => Ok(loaded
            .get(key)?
            .unwrap_or_else(|| json!({"error": "Key not found", "key": key}))),
    }
}

pub fn execute(project_root: &Path, key: Option<String>) -> Result<()> {
    print_json(&lookup(project_root, key.as_deref())?)
}
