use clap::Subcommand;
use planscan::init::IncludeFile;
use planscan::phase::PhaseId;
use planscan::validation::clap_phase_validator;

#[derive(Subcommand)]
pub enum InitCommands {
    /// Context for executing a phase's plans
    ExecutePhase {
        /// Phase identifier (e.g. 6, 06, 06.1)
        #[arg(value_parser = clap_phase_validator)]
        phase: PhaseId,

        /// Comma-separated documents to inline as <name>_content
        #[arg(long, value_enum, value_delimiter = ',')]
        include: Vec<IncludeFile>,
    },

    /// Context for planning a phase
    PlanPhase {
        /// Phase identifier (e.g. 6, 06, 06.1)
        #[arg(value_parser = clap_phase_validator)]
        phase: PhaseId,

        /// Comma-separated documents to inline as <name>_content
        #[arg(long, value_enum, value_delimiter = ',')]
        include: Vec<IncludeFile>,
    },

    /// Context for reporting project progress
    Progress {
        /// Comma-separated documents to inline as <name>_content
        #[arg(long, value_enum, value_delimiter = ',')]
        include: Vec<IncludeFile>,
    },
}
