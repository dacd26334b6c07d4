//! Phase identifiers and phase directory handling
//!
//! This module handles:
//! - Parsing and ordering phase tokens (`6`, `06`, `06.1`)
//! - Allocating the next decimal sub-phase
//! - Enumerating and looking up phase directories

pub mod dirs;
pub mod id;

pub use dirs::{
    find_phase, find_phase_dir, list_phase_dirs, list_phases, next_decimal_phase, PhaseDir,
    PhaseFileKind, PhaseListing, PhaseLookup,
};
pub use id::{next_decimal, tokens_match, NextDecimal, PhaseId, PhaseIdError};
