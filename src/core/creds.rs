//! AWS credential resolution.
//!
//! Credentials are resolved once per invocation into an explicit overlay
//! that is applied at spawn time; the wrapper's own process environment is
//! never mutated.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::core::constants;
use crate::error::{PrtclError, Result};

/// Credential variables merged over the inherited environment of spawned
/// tools. Empty means the inherited environment already satisfies them.
pub type CredentialSet = BTreeMap<String, String>;

/// A source of AWS credentials for child processes.
pub trait ResolveCredentials {
    fn resolve(&self) -> Result<CredentialSet>;
}

/// The inherited environment already carries credentials; nothing to overlay.
pub struct Ambient;

impl ResolveCredentials for Ambient {
    fn resolve(&self) -> Result<CredentialSet> {
        Ok(CredentialSet::new())
    }
}

/// Export credentials by shelling out to `aws configure export-credentials`.
pub struct AwsCliExport {
    aws_bin: PathBuf,
}

impl AwsCliExport {
    pub fn new(aws_bin: impl Into<PathBuf>) -> Self {
        Self {
            aws_bin: aws_bin.into(),
        }
    }
}

impl ResolveCredentials for AwsCliExport {
    fn resolve(&self) -> Result<CredentialSet> {
        let output = Command::new(&self.aws_bin)
            .args(["configure", "export-credentials", "--format", "env"])
            .output()
            .map_err(|err| {
                debug!(%err, "failed to spawn credential export");
                PrtclError::CredentialResolution
            })?;

        if !output.status.success() {
            debug!(code = ?output.status.code(), "credential export failed");
            return Err(PrtclError::CredentialResolution);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let creds = parse_export_output(&stdout);
        if creds.is_empty() {
            return Err(PrtclError::CredentialResolution);
        }

        debug!(vars = creds.len(), "credentials exported");
        Ok(creds)
    }
}

/// Resolve credentials for the current invocation.
///
/// Short-circuits to an empty overlay when the environment already exposes
/// the primary access key; otherwise exports through the AWS CLI. No
/// retries; a failure is reported once to the caller.
pub fn resolve(aws_bin: &Path) -> Result<CredentialSet> {
    if env::var_os(constants::AWS_ACCESS_KEY_VAR).is_some() {
        debug!("access key present in environment, skipping export");
        Ambient.resolve()
    } else {
        AwsCliExport::new(aws_bin).resolve()
    }
}

/// Parse the line-oriented output of `aws configure export-credentials
/// --format env`.
///
/// Each line has an optional leading `export ` prefix stripped, is split on
/// the first `=`, and one layer of surrounding single or double quotes is
/// stripped from the value. Lines without `=` are ignored.
pub fn parse_export_output(stdout: &str) -> CredentialSet {
    let mut creds = CredentialSet::new();

    for line in stdout.lines() {
        let line = line.trim();
        let line = line.strip_prefix("export ").unwrap_or(line);

        if let Some((key, value)) = line.split_once('=') {
            creds.insert(key.to_string(), unquote(value).to_string());
        }
    }

    creds
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
