//! Shell completion scripts for the planscan CLI.

use clap::{Command, ValueEnum};
use clap_complete::{generate, shells};
use std::io;

/// Shells a completion script can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

/// Write a completion script for `cmd` to `out`, named after the binary
pub fn write_completions(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin_name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, cmd, bin_name, out),
        Shell::Zsh => generate(shells::Zsh, cmd, bin_name, out),
        Shell::Fish => generate(shells::Fish, cmd, bin_name, out),
    }
}

/// Completion script on stdout
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    write_completions(cmd, shell, &mut io::stdout());
}
