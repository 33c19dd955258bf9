//! Test harness utilities for prtcl integration tests.
//!
//! Provides an isolated project fixture with the `terraform/envs` layout
//! and stub `aws`/`terraform` executables wired in through the
//! `PRTCL_AWS_BIN` / `PRTCL_TERRAFORM_BIN` overrides.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// Isolated project directory with stub external tools.
pub struct TestEnv {
    /// Temporary directory holding the fake project
    pub dir: TempDir,
    aws_bin: PathBuf,
    terraform_bin: PathBuf,
    record: PathBuf,
}

impl TestEnv {
    /// Create a project fixture with empty `terraform/envs/{dev,stage,prod}`
    /// directories.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        for env in ["dev", "stage", "prod"] {
            fs::create_dir_all(dir.path().join("terraform/envs").join(env))
                .expect("failed to create env dir");
        }
        fs::create_dir_all(dir.path().join("bin")).expect("failed to create bin dir");

        let aws_bin = dir.path().join("bin/aws");
        let terraform_bin = dir.path().join("bin/terraform");
        let record = dir.path().join("record.txt");

        Self {
            dir,
            aws_bin,
            terraform_bin,
            record,
        }
    }

    /// Write a backend template for an environment.
    pub fn write_template(&self, env: &str, content: &str) {
        let path = self
            .dir
            .path()
            .join("terraform/envs")
            .join(env)
            .join("backend.hcl.template");
        fs::write(path, content).expect("failed to write template");
    }

    /// Read the rendered backend config for an environment, if present.
    pub fn backend(&self, env: &str) -> Option<String> {
        let path = self
            .dir
            .path()
            .join("terraform/envs")
            .join(env)
            .join("backend.hcl");
        fs::read_to_string(path).ok()
    }

    /// What the terraform stub recorded, or `None` if it never ran.
    pub fn record(&self) -> Option<String> {
        fs::read_to_string(&self.record).ok()
    }

    #[cfg(unix)]
    fn install(&self, path: &Path, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("failed to write stub");
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod stub");
    }

    /// Stub `aws` that exports credentials and answers both caller-identity
    /// calls for the given account.
    #[cfg(unix)]
    pub fn stub_aws_ok(&self, account_id: &str) {
        let body = format!(
            r#"if [ "$1" = "configure" ]; then
  echo 'export AWS_ACCESS_KEY_ID="AKIATEST"'
  echo "export AWS_SECRET_ACCESS_KEY='testsecret'"
  echo 'AWS_SESSION_TOKEN=testtoken'
  exit 0
fi
if [ "$3" = "--query" ]; then
  echo {account_id}
else
  echo caller-ok
fi
exit 0"#
        );
        self.install(&self.aws_bin, &body);
    }

    /// Stub `aws` whose credential export fails.
    #[cfg(unix)]
    pub fn stub_aws_export_fail(&self) {
        self.install(
            &self.aws_bin,
            r#"if [ "$1" = "configure" ]; then
  exit 1
fi
echo caller-ok
exit 0"#,
        );
    }

    /// Stub `aws` whose identity validation fails after a good export.
    #[cfg(unix)]
    pub fn stub_aws_verify_fail(&self) {
        self.install(
            &self.aws_bin,
            r#"if [ "$1" = "configure" ]; then
  echo 'export AWS_ACCESS_KEY_ID="AKIATEST"'
  exit 0
fi
exit 1"#,
        );
    }

    /// Stub `aws` that validates but returns an empty account ID.
    #[cfg(unix)]
    pub fn stub_aws_lookup_empty(&self) {
        self.install(
            &self.aws_bin,
            r#"if [ "$1" = "configure" ]; then
  echo 'export AWS_ACCESS_KEY_ID="AKIATEST"'
  exit 0
fi
if [ "$3" = "--query" ]; then
  exit 0
fi
echo caller-ok
exit 0"#,
        );
    }

    /// Stub `terraform` that records its args, working directory, and the
    /// injected access key, then exits 0.
    #[cfg(unix)]
    pub fn stub_terraform_recording(&self) {
        let body = format!(
            r#"{{
  echo "args: $@"
  echo "cwd: $(pwd)"
  echo "key: $AWS_ACCESS_KEY_ID"
}} > "{record}"
exit 0"#,
            record = self.record.display()
        );
        self.install(&self.terraform_bin, &body);
    }

    /// Stub `terraform` that exits with a fixed code.
    #[cfg(unix)]
    pub fn stub_terraform_exit(&self, code: i32) {
        self.install(&self.terraform_bin, &format!("exit {code}"));
    }

    /// Create a prtcl command wired to the fixture.
    ///
    /// Clears `AWS_ACCESS_KEY_ID` so credential resolution goes through the
    /// stub export path unless a test opts back in.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("prtcl").expect("failed to find prtcl binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("AWS_ACCESS_KEY_ID");
        cmd.env_remove("PRTCL_LOG");
        cmd.env("PRTCL_AWS_BIN", &self.aws_bin);
        cmd.env("PRTCL_TERRAFORM_BIN", &self.terraform_bin);
        cmd
    }

    /// Shortcut for `prtcl setup <env>`.
    pub fn setup(&self, env: &str) -> Output {
        self.cmd()
            .args(["setup", env])
            .output()
            .expect("failed to run prtcl setup")
    }

    /// Shortcut for `prtcl run <args>`.
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("run");
        cmd.args(args);
        cmd.output().expect("failed to run prtcl run")
    }
}

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
