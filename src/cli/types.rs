use clap::{Parser, Subcommand};
use planscan::completions::Shell;
use planscan::phase::{PhaseFileKind, PhaseId};
use planscan::validation::{clap_key_validator, clap_phase_validator};
use std::path::PathBuf;

pub use super::types_init::InitCommands;

#[derive(Parser)]
#[command(name = "planscan")]
#[command(about = "Structured data extraction for markdown planning documents", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Directory to resolve the project root from (default: current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a document's parsed frontmatter as JSON
    Frontmatter {
        /// Path to the document (relative to the project root)
        file: PathBuf,

        /// Print only this top-level field
        #[arg(short, long)]
        field: Option<String>,
    },

    /// Print the normalized fields of a summary document
    Summary {
        /// Path to the summary document (relative to the project root)
        file: PathBuf,

        /// Comma-separated subset of fields to print
        #[arg(long, value_delimiter = ',')]
        fields: Option<Vec<String>>,
    },

    /// Aggregate every phase summary into a project digest
    Digest,

    /// List phase directories in phase order, or the documents inside them
    Phases {
        /// List plan or summary documents instead of directories
        #[arg(long = "type", value_enum)]
        kind: Option<PhaseFileKind>,

        /// Restrict the listing to one phase
        #[arg(long, value_parser = clap_phase_validator)]
        phase: Option<PhaseId>,
    },

    /// Locate a phase directory and its plans and summaries
    FindPhase {
        /// Phase identifier (e.g. 6, 06, 06.1)
        #[arg(value_parser = clap_phase_validator)]
        phase: PhaseId,
    },

    /// Compute the next free decimal sub-phase after a base phase
    NextDecimal {
        /// Base phase identifier (e.g. 6, 06)
        #[arg(value_parser = clap_phase_validator)]
        phase: PhaseId,
    },

    /// Print one phase's section of ROADMAP.md
    Roadmap {
        /// Phase identifier (e.g. 6, 06, 06.1)
        #[arg(value_parser = clap_phase_validator)]
        phase: PhaseId,
    },

    /// Print a snapshot of STATE.md
    State,

    /// Index a phase's plans by wave
    PlanIndex {
        /// Phase identifier (e.g. 6, 06, 06.1)
        #[arg(value_parser = clap_phase_validator)]
        phase: PhaseId,
    },

    /// Print planning configuration, or one dotted key of it
    Config {
        /// Dotted key path (e.g. workflow.research)
        #[arg(value_parser = clap_key_validator)]
        key: Option<String>,
    },

    /// Bootstrap context for a workflow step
    Init {
        #[command(subcommand)]
        command: InitCommands,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
