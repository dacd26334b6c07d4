//! Workflow bootstrap context: one JSON document with everything a workflow
//! step needs, plus the raw text of requested planning documents.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::fs::{files_with_suffix, load_config, read_optional, PlanningDir};
use crate::phase::{find_phase_dir, list_phase_dirs, PhaseDir, PhaseId};
use crate::plan::index_phase_dir;
use crate::state::{state_snapshot, StateLookup};

/// Document whose text can be inlined with `--include`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum IncludeFile {
    State,
    Config,
    Roadmap,
    Requirements,
    Project,
    Context,
    Research,
    Verification,
    Uat,
}

impl IncludeFile {
    /// Output key, e.g. `state_content`
    pub fn key(self) -> &'static str {
        match self {
            IncludeFile::State => "state_content",
            IncludeFile::Config => "config_content",
            IncludeFile::Roadmap => "roadmap_content",
            IncludeFile::Requirements => "requirements_content",
            IncludeFile::Project => "project_content",
            IncludeFile::Context => "context_content",
            IncludeFile::Research => "research_content",
            IncludeFile::Verification => "verification_content",
            IncludeFile::Uat => "uat_content",
        }
    }

    /// Path of the document, if one can exist
    ///
    /// Phase documents (`*-CONTEXT.md` and friends) are looked up in the phase
    /// directory; without one they have no path.
    fn locate(self, planning: &PlanningDir, phase_dir: Option<&PhaseDir>) -> Result<Option<PathBuf>> {
        let singleton = match self {
            IncludeFile::State => planning.state_path(),
            IncludeFile::Config => planning.config_path(),
            IncludeFile::Roadmap => planning.roadmap_path(),
            IncludeFile::Requirements => planning.requirements_path(),
            IncludeFile::Project => planning.project_path(),
            IncludeFile::Context => return phase_document(phase_dir, "CONTEXT.md"),
            IncludeFile::Research => return phase_document(phase_dir, "RESEARCH.md"),
            IncludeFile::Verification => return phase_document(phase_dir, "VERIFICATION.md"),
            IncludeFile::Uat => return phase_document(phase_dir, "UAT.md"),
        };
        Ok(Some(singleton))
    }
}

fn phase_document(phase_dir: Option<&PhaseDir>, suffix: &str) -> Result<Option<PathBuf>> {
    let Some(dir) = phase_dir else {
        return Ok(None);
    };
    Ok(files_with_suffix(&dir.path, suffix)?
        .into_iter()
        .next()
        .map(|name| dir.path.join(name)))
}

/// Requested document texts keyed by `<name>_content`; `None` for a missing file
pub type IncludedContent = BTreeMap<&'static str, Option<String>>;

/// Read the requested documents; names not requested are left out
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures.
pub fn read_includes(
    project_root: &Path,
    phase_dir: Option<&PhaseDir>,
    include: &[IncludeFile],
) -> Result<IncludedContent> {
    let planning = PlanningDir::new(project_root);
    let mut content = BTreeMap::new();
    for file in include {
        let text = match file.locate(&planning, phase_dir)? {
            Some(path) => read_optional(&path)?,
            None => None,
        };
        content.insert(file.key(), text);
    }
    Ok(content)
}

/// Identity of the phase a workflow runs against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseTarget {
    pub phase_found: bool,
    pub phase_dir: Option<String>,
    pub phase_number: Option<PhaseId>,
    pub phase_name: Option<String>,
}

impl PhaseTarget {
    fn new(dir: Option<&PhaseDir>) -> Self {
        Self {
            phase_found: dir.is_some(),
            phase_dir: dir.map(relative_phase_dir),
            phase_number: dir.map(|d| d.id),
            phase_name: dir.and_then(|d| d.slug.clone()),
        }
    }
}

fn relative_phase_dir(dir: &PhaseDir) -> String {
    Path::new(crate::fs::planning_dir::PLANNING_DIR)
        .join("phases")
        .join(&dir.name)
        .to_string_lossy()
        .to_string()
}

/// Context for executing a phase's plans
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutePhaseContext {
    pub commit_docs: bool,
    pub parallelization: bool,
    #[serde(flatten)]
    pub target: PhaseTarget,
    pub plans: Vec<String>,
    pub summaries: Vec<String>,
    pub incomplete_plans: Vec<String>,
    pub plan_count: usize,
    pub incomplete_count: usize,
    pub state_exists: bool,
    pub roadmap_exists: bool,
    pub config_exists: bool,
    #[serde(flatten)]
    pub included: IncludedContent,
}

/// Context for planning a phase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanPhaseContext {
    pub commit_docs: bool,
    #[serde(flatten)]
    pub target: PhaseTarget,
    pub has_context: bool,
    pub has_research: bool,
    pub has_plans: bool,
    pub plan_count: usize,
    pub planning_exists: bool,
    pub roadmap_exists: bool,
    #[serde(flatten)]
    pub included: IncludedContent,
}

/// Progress of one phase, derived from its plan and summary counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    /// No plans yet
    Pending,
    /// Plans written, none summarized
    Planned,
    InProgress,
    Complete,
}

impl PhaseStatus {
    pub fn from_counts(plans: usize, summaries: usize) -> Self {
        if plans == 0 {
            PhaseStatus::Pending
        } else if summaries >= plans {
            PhaseStatus::Complete
        } else if summaries > 0 {
            PhaseStatus::InProgress
        } else {
            PhaseStatus::Planned
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseProgress {
    pub number: PhaseId,
    pub name: Option<String>,
    pub directory: String,
    pub plan_count: usize,
    pub summary_count: usize,
    pub status: PhaseStatus,
}

/// Context for reporting project progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressContext {
    pub commit_docs: bool,
    pub phases: Vec<PhaseProgress>,
    pub phase_count: usize,
    pub completed_count: usize,
    pub in_progress_count: usize,
    /// First phase being worked on, else the first planned one
    pub current_phase: Option<PhaseId>,
    /// First phase without plans
    pub next_phase: Option<PhaseId>,
    pub paused_at: Option<String>,
    pub has_work_in_progress: bool,
    pub project_exists: bool,
    pub roadmap_exists: bool,
    pub state_exists: bool,
    #[serde(flatten)]
    pub included: IncludedContent,
}

/// Build the `execute-phase` context
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures.
pub fn execute_phase_context(
    project_root: &Path,
    phase: PhaseId,
    include: &[IncludeFile],
) -> Result<ExecutePhaseContext> {
    let planning = PlanningDir::new(project_root);
    let config = load_config(project_root)?;
    let dir = find_phase_dir(project_root, phase)?;

    let (plans, summaries, incomplete_plans) = match &dir {
        Some(dir) => {
            let index = index_phase_dir(dir)?;
            let plans = index.plans.into_iter().map(|p| p.id).collect();
            (plans, dir.summary_files()?, index.incomplete)
        }
        None => (Vec::new(), Vec::new(), Vec::new()),
    };

    Ok(ExecutePhaseContext {
        commit_docs: config.config.commit_docs,
        parallelization: config.config.parallelization,
        target: PhaseTarget::new(dir.as_ref()),
        plan_count: plans.len(),
        incomplete_count: incomplete_plans.len(),
        plans,
        summaries,
        incomplete_plans,
        state_exists: planning.state_path().is_file(),
        roadmap_exists: planning.roadmap_path().is_file(),
        config_exists: config.from_file,
        included: read_includes(project_root, dir.as_ref(), include)?,
    })
}

/// Build the `plan-phase` context
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures.
pub fn plan_phase_context(
    project_root: &Path,
    phase: PhaseId,
    include: &[IncludeFile],
) -> Result<PlanPhaseContext> {
    let planning = PlanningDir::new(project_root);
    let config = load_config(project_root)?;
    let dir = find_phase_dir(project_root, phase)?;

    let plan_count = match &dir {
        Some(dir) => dir.plan_files()?.len(),
        None => 0,
    };
    let has_context = phase_document(dir.as_ref(), "CONTEXT.md")?.is_some();
    let has_research = phase_document(dir.as_ref(), "RESEARCH.md")?.is_some();

    Ok(PlanPhaseContext {
        commit_docs: config.config.commit_docs,
        target: PhaseTarget::new(dir.as_ref()),
        has_context,
        has_research,
        has_plans: plan_count > 0,
        plan_count,
        planning_exists: planning.root().is_dir(),
        roadmap_exists: planning.roadmap_path().is_file(),
        included: read_includes(project_root, dir.as_ref(), include)?,
    })
}

/// Build the `progress` context
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures.
pub fn progress_context(project_root: &Path, include: &[IncludeFile]) -> Result<ProgressContext> {
    let planning = PlanningDir::new(project_root);
    let config = load_config(project_root)?;

    let mut phases = Vec::new();
    for dir in list_phase_dirs(project_root)? {
        let plan_count = dir.plan_files()?.len();
        let summary_count = dir.summary_files()?.len();
        phases.push(PhaseProgress {
            number: dir.id,
            directory: relative_phase_dir(&dir),
            name: dir.slug,
            plan_count,
            summary_count,
            status: PhaseStatus::from_counts(plan_count, summary_count),
        });
    }

    let first_with = |status: PhaseStatus| {
        phases
            .iter()
            .find(|p| p.status == status)
            .map(|p| p.number)
    };
    let in_progress = first_with(PhaseStatus::InProgress);
    let current_phase = in_progress.or_else(|| first_with(PhaseStatus::Planned));
    let next_phase = first_with(PhaseStatus::Pending);
    let count = |status: PhaseStatus| phases.iter().filter(|p| p.status == status).count();
    let completed_count = count(PhaseStatus::Complete);
    let in_progress_count = count(PhaseStatus::InProgress);

    let paused_at = match state_snapshot(project_root)? {
        StateLookup::Snapshot(snapshot) => snapshot.paused_at,
        StateLookup::Missing { .. } => None,
    };

    Ok(ProgressContext {
        commit_docs: config.config.commit_docs,
        phase_count: phases.len(),
        completed_count,
        in_progress_count,
        current_phase,
        next_phase,
        has_work_in_progress: in_progress.is_some() || paused_at.is_some(),
        paused_at,
        phases,
        project_exists: planning.project_path().is_file(),
        roadmap_exists: planning.roadmap_path().is_file(),
        state_exists: planning.state_path().is_file(),
        included: read_includes(project_root, None, include)?,
    })
}
