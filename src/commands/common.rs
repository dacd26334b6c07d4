//! Common utility functions shared across command implementations.
//!
//! This module provides utilities for:
//! - Project root discovery
//! - JSON rendering on stdout

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::fs::planning_dir::PLANNING_DIR;

/// Find the project root by walking up from `start`.
///
/// Returns the first ancestor (including `start`) containing a `.planning`
/// directory, or `start` itself when none does so that "not found" results are
/// still reported against the requested directory.
pub fn find_project_root(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(PLANNING_DIR).is_dir() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}

/// Render `value` as pretty JSON followed by a newline
pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    writeln!(out, "{rendered}").context("Failed to write output")?;
    Ok(())
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    write_json(&mut io::stdout().lock(), value)
}
