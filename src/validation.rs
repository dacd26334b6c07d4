//! Input validation for CLI arguments.
//!
//! Phase tokens and field names are checked before they reach the core so
//! that bad input is reported by clap rather than as a lookup miss.

use anyhow::{bail, Result};

use crate::phase::PhaseId;

/// Maximum allowed length for a dotted config key path.
pub const MAX_KEY_LENGTH: usize = 256;

/// Validates a phase token such as `6`, `06` or `06.1`.
///
/// # Examples
///
/// ```
/// use planscan::validation::validate_phase_token;
///
/// assert!(validate_phase_token("06.1").is_ok());
/// assert!(validate_phase_token("6").is_ok());
/// assert!(validate_phase_token("../etc").is_err());
/// ```
pub fn validate_phase_token(token: &str) -> Result<PhaseId> {
    if token.trim().is_empty() {
        bail!("Phase cannot be empty");
    }
    Ok(token.parse::<PhaseId>()?)
}

/// Validates a dotted config key path (`workflow.research`).
pub fn validate_key_path(key: &str) -> Result<()> {
    if key.is_empty() {
        bail!("Key cannot be empty");
    }
    if key.len() > MAX_KEY_LENGTH {
        bail!(
            "Key too long: {} characters (max {})",
            key.len(),
            MAX_KEY_LENGTH
        );
    }
    if key.split('.').any(str::is_empty) {
        bail!("Key '{key}' contains an empty segment");
    }
    let valid_chars = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !valid_chars {
        bail!("Key '{key}' contains invalid characters. Use only alphanumeric characters, dashes (-), underscores (_) and dots (.)");
    }
    Ok(())
}

/// Clap value parser for phase tokens.
pub fn clap_phase_validator(s: &str) -> Result<PhaseId, String> {
    validate_phase_token(s).map_err(|e| e.to_string())
}

/// Clap value parser for config key paths.
pub fn clap_key_validator(s: &str) -> Result<String, String> {
    validate_key_path(s)
        .map(|()| s.to_string())
        .map_err(|e| e.to_string())
}
