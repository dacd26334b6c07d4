use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\.(\d+))?$").expect("Invalid regex pattern"));
static NAME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)(?:-|$)").expect("Invalid regex pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhaseIdError {
    #[error("Invalid phase identifier: '{0}'. Expected a number like 6, 06 or 06.1")]
    Invalid(String),
    #[error("Phase number out of range: '{0}'")]
    OutOfRange(String),
    #[error("Decimal sub-phase must be positive: '{0}'")]
    ZeroMinor(String),
}

/// A phase number with optional decimal sub-number (`06`, `06.1`)
///
/// Field order gives the total order: major first, then an absent minor
/// before any minor, then minors numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhaseId {
    pub major: u32,
    pub minor: Option<u32>,
}

impl PhaseId {
    pub const fn new(major: u32, minor: Option<u32>) -> Self {
        Self { major, minor }
    }

    /// Identifier from a directory or file name such as `06.1-auth-fixes`
    pub fn from_name(name: &str) -> Option<Self> {
        let caps = NAME_PREFIX.captures(name)?;
        caps.get(1)?.as_str().parse().ok()
    }

    /// The integer phase this identifier belongs to
    pub const fn base(self) -> Self {
        Self::new(self.major, None)
    }
}

impl FromStr for PhaseId {
    type Err = PhaseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let caps = TOKEN
            .captures(token)
            .ok_or_else(|| PhaseIdError::Invalid(s.to_string()))?;

        let major = caps[1]
            .parse()
            .map_err(|_| PhaseIdError::OutOfRange(s.to_string()))?;
        let minor = match caps.get(2) {
            Some(m) => {
                let minor: u32 = m
                    .as_str()
                    .parse()
                    .map_err(|_| PhaseIdError::OutOfRange(s.to_string()))?;
                if minor == 0 {
                    return Err(PhaseIdError::ZeroMinor(s.to_string()));
                }
                Some(minor)
            }
            None => None,
        };

        Ok(Self { major, minor })
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
        }
        Ok(())
    }
}

impl Serialize for PhaseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Decimal-aware token equality: `"2"` equals `"02"` but not `"2.1"`
///
/// Tokens that are not valid identifiers fall back to exact comparison.
pub fn tokens_match(a: &str, b: &str) -> bool {
    match (a.parse::<PhaseId>(), b.parse::<PhaseId>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.trim() == b.trim(),
    }
}

/// Proposed insertion slot after a base phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextDecimal {
    pub base_phase: PhaseId,
    pub next: PhaseId,
    /// Existing decimal phases sharing the base major, ascending
    pub existing: Vec<PhaseId>,
    /// Whether the integer base phase itself exists
    #[serde(rename = "found")]
    pub base_exists: bool,
}

/// Allocate the next decimal sub-phase for `base`
///
/// Proposes one past the highest existing minor for the same major, never
/// back-filling gaps. A proposal is made even if the base phase is missing.
pub fn next_decimal<'a>(base: PhaseId, existing: impl IntoIterator<Item = &'a PhaseId>) -> NextDecimal {
    let base = base.base();
    let mut base_exists = false;
    let mut decimals = Vec::new();

    for id in existing {
        if id.major != base.major {
            continue;
        }
        match id.minor {
            None => base_exists = true,
            Some(_) => decimals.push(*id),
        }
    }
    decimals.sort();
    decimals.dedup();

    let next_minor = decimals.last().and_then(|id| id.minor).map_or(1, |m| m + 1);

    NextDecimal {
        base_phase: base,
        next: PhaseId::new(base.major, Some(next_minor)),
        existing: decimals,
        base_exists,
    }
}
