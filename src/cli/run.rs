//! Run command.
//!
//! Forwards arguments to terraform in the dev environment directory with
//! resolved AWS credentials overlaid onto the child environment, and exits
//! with the child's exit code.

use crate::cli::output;
use crate::core::environment::Environment;
use crate::core::invoke::CommandSpec;
use crate::core::{config, creds};
use crate::error::Result;

/// Wrapped terraform always runs against the dev environment; stage and
/// prod apply through CI.
const RUN_ENVIRONMENT: Environment = Environment::Dev;

/// Run terraform with the resolved credential overlay.
pub fn execute(args: &[String]) -> Result<()> {
    let project_root = config::find_project_root()?;
    let cfg = config::Config::load(&project_root)?;
    let terraform_bin = cfg.terraform_bin()?;
    let aws_bin = cfg.aws_bin()?;

    let overlay = creds::resolve(&aws_bin)?;

    let spec = CommandSpec::new(
        terraform_bin,
        args.to_vec(),
        RUN_ENVIRONMENT.dir(&project_root),
        overlay,
    );

    output::hint(&format!("terraform {}", spec.args().join(" ")));
    output::blank();

    let code = spec.status()?;
    std::process::exit(code);
}
