//! Planning configuration stored in `.planning/config.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::planning_dir::{read_optional, PlanningDir};

/// Typed view of the planning configuration
///
/// Unknown keys are kept in the raw JSON and remain reachable through
/// [`LoadedConfig::get`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    pub mode: String,
    pub depth: String,
    pub parallelization: bool,
    pub commit_docs: bool,
    pub model_profile: String,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            mode: "interactive".to_string(),
            depth: "standard".to_string(),
            parallelization: true,
            commit_docs: true,
            model_profile: "balanced".to_string(),
        }
    }
}

/// Configuration as loaded: typed fields plus the raw document
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: PlanningConfig,
    raw: serde_json::Value,
    pub from_file: bool,
}

impl LoadedConfig {
    /// Effective configuration as JSON: defaults overlaid with the file's keys
    ///
    /// # Errors
    ///
    /// Returns an error if the typed configuration cannot be serialized.
    pub fn effective(&self) -> Result<serde_json::Value> {
        let mut merged =
            serde_json::to_value(&self.config).context("Failed to serialize planning config")?;
        if let (Some(target), Some(source)) = (merged.as_object_mut(), self.raw.as_object()) {
            for (k, v) in source {
                target.entry(k.clone()).or_insert_with(|| v.clone());
            }
        }
        Ok(merged)
    }

    /// Look up a dotted key path such as `workflow.research`
    ///
    /// # Errors
    ///
    /// Returns an error if the effective configuration cannot be built.
    pub fn get(&self, key_path: &str) -> Result<Option<serde_json::Value>> {
        let effective = self.effective()?;
        let mut current = &effective;
        for part in key_path.split('.').filter(|p| !p.is_empty()) {
            match current.as_object().and_then(|object| object.get(part)) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current.clone()))
    }
}

/// Load `.planning/config.json`, falling back to defaults when absent
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid JSON.
pub fn load_config(project_root: &Path) -> Result<LoadedConfig> {
    let path = PlanningDir::new(project_root).config_path();
    let Some(content) = read_optional(&path)? else {
        tracing::debug!(path = %path.display(), "no planning config, using defaults");
        return Ok(LoadedConfig {
            config: PlanningConfig::default(),
            raw: serde_json::Value::Object(Default::default()),
            from_file: false,
        });
    };

    let raw: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let config: PlanningConfig = serde_json::from_value(raw.clone())
        .with_context(|| format!("Invalid planning config in {}", path.display()))?;

    Ok(LoadedConfig {
        config,
        raw,
        from_file: true,
    })
}
