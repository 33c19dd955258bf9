//! Constants used throughout prtcl.
//!
//! Centralizes magic strings and configuration values.

use std::time::Duration;

/// Configuration file name (.prtcl.toml).
pub const CONFIG_FILE: &str = ".prtcl.toml";

/// Backend template file name, one per environment directory.
pub const BACKEND_TEMPLATE: &str = "backend.hcl.template";

/// Rendered backend config file name.
pub const BACKEND_FILE: &str = "backend.hcl";

/// Literal token in backend templates replaced with the AWS account ID.
pub const ACCOUNT_ID_PLACEHOLDER: &str = "REPLACE_WITH_ACCOUNT_ID";

/// Environment variable whose presence short-circuits credential export.
pub const AWS_ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY_ID";

/// Non-interactive confirmation flag for mutating terraform subcommands.
pub const AUTO_APPROVE_FLAG: &str = "-auto-approve";

/// Upper bound on each STS caller-identity call.
pub const IDENTITY_TIMEOUT: Duration = Duration::from_secs(10);

/// Default external tool names, overridable via `.prtcl.toml` or
/// `PRTCL_AWS_BIN` / `PRTCL_TERRAFORM_BIN`.
pub const DEFAULT_AWS_BIN: &str = "aws";
pub const DEFAULT_TERRAFORM_BIN: &str = "terraform";
