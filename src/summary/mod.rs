//! Summary documents: single-document extraction and the project digest

pub mod digest;
pub mod extract;
pub mod normalize;

pub use digest::{build_digest, DigestDecision, PhaseDigestEntry, ProjectDigest};
pub use extract::{extract_summary, SummaryExtract};
pub use normalize::{normalize_summary, string_list, Decision, NormalizedSummary};
