//! STS caller-identity checks.
//!
//! Both calls shell out to the AWS CLI and are bounded by
//! [`constants::IDENTITY_TIMEOUT`]; a hung CLI must not wedge setup.
//! Timeouts and non-zero exits are reported as `false`/`None`, never
//! raised past this module.

use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::core::constants;
use crate::core::creds::CredentialSet;
use crate::core::proc;

fn identity_command(aws_bin: &Path, overlay: &CredentialSet) -> Command {
    let mut cmd = Command::new(aws_bin);
    cmd.args(["sts", "get-caller-identity"]);
    cmd.envs(overlay.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    cmd
}

/// Check that the caller's credentials are accepted by STS.
pub fn verify(aws_bin: &Path, overlay: &CredentialSet) -> bool {
    let mut cmd = identity_command(aws_bin, overlay);

    match proc::output_with_timeout(&mut cmd, constants::IDENTITY_TIMEOUT) {
        Ok(Some(output)) => output.status.success(),
        Ok(None) => {
            debug!("get-caller-identity timed out");
            false
        }
        Err(err) => {
            debug!(%err, "get-caller-identity failed to start");
            false
        }
    }
}

/// Fetch the caller's AWS account ID.
///
/// Uses a constrained `--query Account --output text` call; success is exit
/// code 0 with non-empty trimmed stdout.
pub fn account_id(aws_bin: &Path, overlay: &CredentialSet) -> Option<String> {
    let mut cmd = identity_command(aws_bin, overlay);
    cmd.args(["--query", "Account", "--output", "text"]);

    match proc::output_with_timeout(&mut cmd, constants::IDENTITY_TIMEOUT) {
        Ok(Some(output)) if output.status.success() => {
            let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if id.is_empty() {
                None
            } else {
                Some(id)
            }
        }
        Ok(Some(output)) => {
            debug!(code = ?output.status.code(), "account lookup failed");
            None
        }
        Ok(None) => {
            debug!("account lookup timed out");
            None
        }
        Err(err) => {
            debug!(%err, "account lookup failed to start");
            None
        }
    }
}
