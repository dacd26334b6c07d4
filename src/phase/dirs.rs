//! Phase directory enumeration and lookup under `.planning/phases/`.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::id::{next_decimal, NextDecimal, PhaseId};
use crate::fs::{files_with_suffix, PlanningDir, PLAN_SUFFIX, SUMMARY_SUFFIX};

/// A phase directory such as `06.1-auth-fixes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseDir {
    pub id: PhaseId,
    /// Directory name as found on disk
    pub name: String,
    /// Text after the identifier and its `-` separator, if any
    pub slug: Option<String>,
    #[serde(skip)]
    pub path: PathBuf,
}

impl PhaseDir {
    fn from_entry(name: String, path: PathBuf) -> Option<Self> {
        let id = PhaseId::from_name(&name)?;
        let slug = name
            .split_once('-')
            .map(|(_, slug)| slug.to_string())
            .filter(|slug| !slug.is_empty());
        Some(Self {
            id,
            name,
            slug,
            path,
        })
    }

    /// Plan document names in this directory, sorted
    pub fn plan_files(&self) -> Result<Vec<String>> {
        files_with_suffix(&self.path, PLAN_SUFFIX)
    }

    /// Summary document names in this directory, sorted
    pub fn summary_files(&self) -> Result<Vec<String>> {
        files_with_suffix(&self.path, SUMMARY_SUFFIX)
    }

    pub fn files(&self, kind: PhaseFileKind) -> Result<Vec<String>> {
        match kind {
            PhaseFileKind::Plans => self.plan_files(),
            PhaseFileKind::Summaries => self.summary_files(),
        }
    }
}

/// Document family selected by `phases --type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PhaseFileKind {
    Plans,
    Summaries,
}

/// List phase directories in phase order
///
/// Entries whose names carry no phase identifier are ignored. A missing
/// phases directory yields an empty list.
///
/// # Errors
///
/// Returns an error if the phases directory exists but cannot be listed.
pub fn list_phase_dirs(project_root: &Path) -> Result<Vec<PhaseDir>> {
    let phases_dir = PlanningDir::new(project_root).phases_dir();
    let entries = match fs::read_dir(&phases_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %phases_dir.display(), "phases directory missing");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to read phases directory: {}", phases_dir.display())
            })
        }
    };

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", phases_dir.display()))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        match PhaseDir::from_entry(name, path) {
            Some(dir) => dirs.push(dir),
            None => tracing::trace!(entry = %entry.path().display(), "skipping non-phase entry"),
        }
    }

    dirs.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.name.cmp(&b.name)));
    Ok(dirs)
}

/// Find the directory for a phase token (`6`, `06`, `06.1`)
///
/// # Errors
///
/// Returns an error only if the phases directory cannot be listed.
pub fn find_phase_dir(project_root: &Path, id: PhaseId) -> Result<Option<PhaseDir>> {
    Ok(list_phase_dirs(project_root)?
        .into_iter()
        .find(|dir| dir.id == id))
}

/// Result of a phase lookup, with the documents it contains
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PhaseLookup {
    Found {
        found: bool,
        directory: String,
        phase_number: PhaseId,
        phase_name: Option<String>,
        plans: Vec<String>,
        summaries: Vec<String>,
    },
    NotFound {
        found: bool,
    },
}

/// Look up a phase and list its plan and summary documents
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures.
pub fn find_phase(project_root: &Path, id: PhaseId) -> Result<PhaseLookup> {
    let Some(dir) = find_phase_dir(project_root, id)? else {
        return Ok(PhaseLookup::NotFound { found: false });
    };

    let relative = Path::new(crate::fs::planning_dir::PLANNING_DIR)
        .join("phases")
        .join(&dir.name);

    Ok(PhaseLookup::Found {
        found: true,
        directory: relative.to_string_lossy().to_string(),
        phase_number: dir.id,
        plans: dir.plan_files()?,
        summaries: dir.summary_files()?,
        phase_name: dir.slug,
    })
}

/// Allocate the next decimal phase after `base` from the directories on disk
///
/// # Errors
///
/// Returns an error only if the phases directory cannot be listed.
pub fn next_decimal_phase(project_root: &Path, base: PhaseId) -> Result<NextDecimal> {
    let ids: Vec<PhaseId> = list_phase_dirs(project_root)?
        .into_iter()
        .map(|dir| dir.id)
        .collect();
    Ok(next_decimal(base, &ids))
}

/// Phase listing, optionally narrowed to one phase or to its documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PhaseListing {
    Directories {
        directories: Vec<String>,
        count: usize,
    },
    Files {
        files: Vec<String>,
        count: usize,
        /// Slug of the selected phase; `None` when listing across phases
        phase_dir: Option<String>,
    },
    PhaseNotFound {
        files: Vec<String>,
        count: usize,
        phase_dir: Option<String>,
        error: String,
    },
}

/// List phase directories or the documents inside them
///
/// With `phase`, only that phase's directory is considered. With `kind`, the
/// matching document names are listed in phase order instead of directories.
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures.
pub fn list_phases(
    project_root: &Path,
    kind: Option<PhaseFileKind>,
    phase: Option<PhaseId>,
) -> Result<PhaseListing> {
    let mut dirs = list_phase_dirs(project_root)?;
    if let Some(id) = phase {
        dirs.retain(|dir| dir.id == id);
        if dirs.is_empty() {
            return Ok(PhaseListing::PhaseNotFound {
                files: Vec::new(),
                count: 0,
                phase_dir: None,
                error: "Phase not found".to_string(),
            });
        }
    }

    let Some(kind) = kind else {
        let directories: Vec<String> = dirs.into_iter().map(|dir| dir.name).collect();
        return Ok(PhaseListing::Directories {
            count: directories.len(),
            directories,
        });
    };

    let mut files = Vec::new();
    for dir in &dirs {
        files.extend(dir.files(kind)?);
    }
    let phase_dir = match phase {
        Some(_) => dirs.into_iter().next().and_then(|dir| dir.slug),
        None => None,
    };

    Ok(PhaseListing::Files {
        count: files.len(),
        files,
        phase_dir,
    })
}
