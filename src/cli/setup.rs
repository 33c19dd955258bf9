//! Setup command.
//!
//! Bootstraps the Terraform remote-state backend for an environment:
//! resolves AWS credentials, validates them against STS, looks up the
//! account ID, and renders `backend.hcl` from its template. The flow is
//! strictly sequential; the first failing step aborts the rest.

use crate::cli::output;
use crate::core::environment::Environment;
use crate::core::{backend, config, creds, identity};
use crate::error::{PrtclError, Result};

/// Run the backend bootstrap flow for one environment.
pub fn execute(environment: Environment) -> Result<()> {
    let project_root = config::find_project_root()?;
    let cfg = config::Config::load(&project_root)?;
    let aws_bin = cfg.aws_bin()?;

    output::header(&format!("Remote state setup - {environment}"));
    output::blank();

    output::step(1, "Checking AWS credentials");
    let overlay = creds::resolve(&aws_bin)?;
    if !identity::verify(&aws_bin, &overlay) {
        return Err(PrtclError::IdentityValidation);
    }
    output::kv("credentials", "verified");

    output::step(2, "Looking up AWS account");
    let account_id = identity::account_id(&aws_bin, &overlay).ok_or(PrtclError::IdentityLookup)?;
    output::kv("account", &account_id);

    output::step(3, "Generating backend configuration");
    let rendered = backend::render(environment, &account_id, &project_root, cfg.render.atomic)?;
    output::kv("wrote", rendered.display());
    output::kv(
        "bucket",
        format!("prtcl-{environment}-{account_id}-tfstate"),
    );

    output::blank();
    output::success("setup complete");
    output::hint(&format!(
        "next: cd terraform/envs/{environment} && terraform init -backend-config=backend.hcl"
    ));

    Ok(())
}
