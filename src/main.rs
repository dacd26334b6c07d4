mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use planscan::commands::common::find_project_root;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::dispatch::dispatch;
use cli::types::Cli;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "planscan=debug" } else { "planscan=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the JSON output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let start = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let project_root = find_project_root(&start);
    tracing::debug!(root = %project_root.display(), "resolved project root");

    dispatch(&project_root, cli.command)
}
