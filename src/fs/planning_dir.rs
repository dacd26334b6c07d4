use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the planning directory under the project root
pub const PLANNING_DIR: &str = ".planning";

pub const ROADMAP_FILE: &str = "ROADMAP.md";
pub const STATE_FILE: &str = "STATE.md";
pub const PROJECT_FILE: &str = "PROJECT.md";
pub const REQUIREMENTS_FILE: &str = "REQUIREMENTS.md";
pub const CONFIG_FILE: &str = "config.json";

/// Suffix shared by plan documents (`06-01-PLAN.md`)
pub const PLAN_SUFFIX: &str = "PLAN.md";
/// Suffix shared by summary documents (`06-01-SUMMARY.md`)
pub const SUMMARY_SUFFIX: &str = "SUMMARY.md";

/// Path layout of a project's `.planning/` directory
///
/// The project root is always passed in explicitly; nothing here consults the
/// process working directory.
#[derive(Debug, Clone)]
pub struct PlanningDir {
    root: PathBuf,
}

impl PlanningDir {
    pub fn new<P: AsRef<Path>>(project_root: P) -> Self {
        Self {
            root: project_root.as_ref().join(PLANNING_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the project root (parent of .planning directory)
    pub fn project_root(&self) -> Option<&Path> {
        self.root.parent()
    }

    pub fn phases_dir(&self) -> PathBuf {
        self.root.join("phases")
    }

    pub fn roadmap_path(&self) -> PathBuf {
        self.root.join(ROADMAP_FILE)
    }

    pub fn state_path(&self) -> PathBuf {
        self.root.join(STATE_FILE)
    }

    pub fn project_path(&self) -> PathBuf {
        self.root.join(PROJECT_FILE)
    }

    pub fn requirements_path(&self) -> PathBuf {
        self.root.join(REQUIREMENTS_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}

/// Resolve a document argument relative to the project root
pub fn resolve_path(project_root: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        project_root.join(file)
    }
}

/// Read a whole document, mapping "not found" to `None`
///
/// # Errors
///
/// Any I/O failure other than a missing file is returned with path context.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Sorted names of the regular files in `dir` that end with `suffix`
///
/// A missing directory yields an empty list.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be listed.
pub fn files_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read directory: {}", dir.display()))
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(suffix) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
