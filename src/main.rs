//! Prtcl - Terraform remote-state bootstrap and run wrapper.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prtcl::cli::output;
use prtcl::cli::{execute, Cli};
use prtcl::error::PrtclError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("PRTCL_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("prtcl=debug")
        } else {
            EnvFilter::new("prtcl=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            PrtclError::CredentialResolution => Some("run: aws sso login (or aws configure)"),
            PrtclError::IdentityValidation => Some("run: aws sso login"),
            PrtclError::IdentityLookup => Some("check your AWS credentials and region"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
