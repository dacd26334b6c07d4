//! Shared fixture builders for planning tree integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test helper: Create a temporary project with an empty `.planning/phases/`
pub fn init_planning_tree() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::create_dir_all(temp_dir.path().join(".planning/phases"))
        .expect("Failed to create phases directory");
    temp_dir
}

/// Test helper: Create a phase directory and return its path
pub fn create_phase_dir(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(".planning/phases").join(name);
    fs::create_dir_all(&dir).expect("Failed to create phase directory");
    dir
}

/// Test helper: Write a document into a phase directory
pub fn write_phase_file(root: &Path, phase: &str, file: &str, content: &str) {
    let dir = create_phase_dir(root, phase);
    fs::write(dir.join(file), content).expect("Failed to write phase file");
}

/// Test helper: Write a file directly under `.planning/`
pub fn write_planning_file(root: &Path, file: &str, content: &str) {
    fs::write(root.join(".planning").join(file), content).expect("Failed to write planning file");
}

/// Test helper: Summary document with the usual frontmatter fields
pub fn summary_doc(phase: &str, provides: &[&str], tech: &[&str], decisions: &[&str]) -> String {
    let list = |items: &[&str]| {
        items
            .iter()
            .map(|item| format!("    - {item}\n"))
            .collect::<String>()
    };
    let decisions: String = decisions
        .iter()
        .map(|d| format!("  - \"{d}\"\n"))
        .collect();

    format!(
        "---\nphase: {phase}\none-liner: Work for phase {phase}\ndependency-graph:\n  provides:\n{}tech-stack:\n  added:\n{}key-decisions:\n{decisions}---\n\n# Summary\n",
        list(provides),
        list(tech),
    )
}

/// Test helper: Plan document with wave and autonomy flags
pub fn plan_doc(wave: u32, autonomous: bool, objective: &str, tasks: usize) -> String {
    let tasks: String = (1..=tasks)
        .map(|n| format!("## Task {n}: Step {n}\n\nDo it.\n\n"))
        .collect();
    format!(
        "---\nwave: {wave}\nautonomous: {autonomous}\nobjective: {objective}\nfiles-modified:\n  - src/lib.rs\n---\n\n# Plan\n\n{tasks}"
    )
}
