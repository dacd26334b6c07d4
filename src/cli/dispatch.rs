use anyhow::Result;
use clap::CommandFactory;
use planscan::commands::{
    config, digest, frontmatter, init, phase, plan_index, roadmap, state, summary,
};
use planscan::completions::generate_completions;
use std::path::Path;

use super::types::{Cli, Commands, InitCommands};

pub fn dispatch(project_root: &Path, command: Commands) -> Result<()> {
    match command {
        Commands::Frontmatter { file, field } => frontmatter::execute(project_root, &file, field),
        Commands::Summary { file, fields } => summary::execute(project_root, &file, fields),
        Commands::Digest => digest::execute(project_root),
        Commands::Phases { kind, phase } => phase::list(project_root, kind, phase),
        Commands::FindPhase { phase } => phase::find(project_root, phase),
        Commands::NextDecimal { phase } => phase::next_decimal(project_root, phase),
        Commands::Roadmap { phase } => roadmap::execute(project_root, phase),
        Commands::State => state::execute(project_root),
        Commands::PlanIndex { phase } => plan_index::execute(project_root, phase),
        Commands::Config { key } => config::execute(project_root, key),
        Commands::Init { command } => match command {
            InitCommands::ExecutePhase { phase, include } => {
                init::execute_phase(project_root, phase, &include)
            }
            InitCommands::PlanPhase { phase, include } => {
                init::plan_phase(project_root, phase, &include)
            }
            InitCommands::Progress { include } => init::progress(project_root, &include),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}
