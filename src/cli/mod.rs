//! Command-line interface.

pub mod completions;
pub mod output;
pub mod run;
pub mod setup;

use clap::{Parser, Subcommand};

use crate::core::environment::Environment;

/// Prtcl - Terraform remote-state bootstrap and run wrapper.
#[derive(Parser)]
#[command(
    name = "prtcl",
    about = "Terraform remote-state bootstrap and run wrapper",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate the remote-state backend config for an environment
    Setup {
        /// Target environment
        #[arg(value_enum)]
        environment: Environment,
    },

    /// Run terraform in the dev environment with AWS credentials injected
    Run {
        /// Arguments forwarded to terraform (e.g. init, plan, apply)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Setup { environment } => setup::execute(environment),
        Run { args } => run::execute(&args),
        Completions { shell } => completions::execute(shell),
    }
}
