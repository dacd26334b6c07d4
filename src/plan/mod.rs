//! Plan documents and the per-phase plan index
//!
//! This module handles:
//! - Parsing plan documents (markdown with YAML frontmatter)
//! - Grouping plans by wave and tracking which have summaries

pub mod document;
pub mod index;

pub use document::{parse_plan_content, PlanMetadata, DEFAULT_WAVE};
pub use index::{build_plan_index, index_phase_dir, plan_id, PlanEntry, PlanIndex, PlanIndexLookup};
