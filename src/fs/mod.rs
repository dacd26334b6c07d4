pub mod config;
pub mod planning_dir;

pub use config::{load_config, LoadedConfig, PlanningConfig};
pub use planning_dir::{
    files_with_suffix, read_optional, resolve_path, PlanningDir, PLAN_SUFFIX, SUMMARY_SUFFIX,
};
