//! External tool invocation.
//!
//! Builds and runs a terraform invocation with the credential overlay
//! applied at spawn time. The child inherits stdin/stdout/stderr so its
//! interactive output streams in real time; nothing is captured or
//! reinterpreted, only the exit code is forwarded.

use std::path::PathBuf;
use std::process::Command;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::creds::CredentialSet;
use crate::error::Result;

/// A fully-specified external tool invocation: program, ordered arguments,
/// working directory, and credential overlay. Constructed fresh per run.
#[derive(Debug)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<String>,
    cwd: PathBuf,
    overlay: CredentialSet,
}

impl CommandSpec {
    /// Build an invocation, applying the auto-approve policy to the
    /// caller-supplied arguments.
    pub fn new(
        program: impl Into<PathBuf>,
        args: Vec<String>,
        cwd: impl Into<PathBuf>,
        overlay: CredentialSet,
    ) -> Self {
        let mut args = args;
        inject_auto_approve(&mut args);

        Self {
            program: program.into(),
            args,
            cwd: cwd.into(),
            overlay,
        }
    }

    /// Final argument vector, after auto-approve injection.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Spawn the tool with inherited stdio and wait for it to finish.
    ///
    /// Overlay values are wrapped in `Zeroizing` so credential material is
    /// wiped from memory once the child has been spawned. Returns the
    /// child's exit code unchanged.
    pub fn status(self) -> Result<i32> {
        debug!(program = %self.program.display(), args = ?self.args, "spawning tool");

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.cwd);

        for (key, value) in self.overlay {
            let value = Zeroizing::new(value);
            cmd.env(key, value.as_str());
        }

        let status = cmd.status()?;
        Ok(status.code().unwrap_or(1))
    }
}

/// Append `-auto-approve` to mutating subcommands so wrapped runs never
/// block on an interactive confirmation prompt.
///
/// Only an exact `apply` or `destroy` in the first position triggers
/// injection, and never when the flag is already present anywhere.
fn inject_auto_approve(args: &mut Vec<String>) {
    let mutating = matches!(
        args.first().map(String::as_str),
        Some("apply") | Some("destroy")
    );

    if mutating && !args.iter().any(|arg| arg == constants::AUTO_APPROVE_FLAG) {
        args.push(constants::AUTO_APPROVE_FLAG.to_string());
    }
}
