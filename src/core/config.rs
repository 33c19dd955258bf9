//! Configuration file management and project-root discovery.
//!
//! Handles the optional `.prtcl.toml` at the project root. A missing file
//! means defaults; `PRTCL_AWS_BIN` / `PRTCL_TERRAFORM_BIN` environment
//! variables override the file.

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{PrtclError, Result};

/// Project configuration stored in `.prtcl.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Backend render behavior
    #[serde(default)]
    pub render: RenderConfig,
    /// External tool names or paths
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// `[render]` section.
#[derive(Debug, Default, Deserialize)]
pub struct RenderConfig {
    /// Render to a temp file and rename into place instead of overwriting
    /// the output directly.
    #[serde(default)]
    pub atomic: bool,
}

/// `[tools]` section.
#[derive(Debug, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_aws")]
    pub aws: String,
    #[serde(default = "default_terraform")]
    pub terraform: String,
}

fn default_aws() -> String {
    constants::DEFAULT_AWS_BIN.to_string()
}

fn default_terraform() -> String {
    constants::DEFAULT_TERRAFORM_BIN.to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            aws: default_aws(),
            terraform: default_terraform(),
        }
    }
}

impl Config {
    /// Load configuration from `.prtcl.toml` at the project root, falling
    /// back to defaults when the file is absent.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(constants::CONFIG_FILE);

        let mut config = if path.exists() {
            debug!(path = %path.display(), "loading config");
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str::<Self>(&contents)?
        } else {
            Self::default()
        };

        // Env overrides win over the file
        if let Ok(bin) = env::var("PRTCL_AWS_BIN") {
            config.tools.aws = bin;
        }
        if let Ok(bin) = env::var("PRTCL_TERRAFORM_BIN") {
            config.tools.terraform = bin;
        }

        Ok(config)
    }

    /// Resolved path to the AWS CLI.
    pub fn aws_bin(&self) -> Result<PathBuf> {
        resolve_tool(&self.tools.aws)
    }

    /// Resolved path to terraform.
    pub fn terraform_bin(&self) -> Result<PathBuf> {
        resolve_tool(&self.tools.terraform)
    }
}

fn resolve_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| PrtclError::ToolNotFound(name.to_string()))
}

/// Walk up from the current directory to the first ancestor containing a
/// `terraform/` directory.
pub fn find_project_root() -> Result<PathBuf> {
    let cwd = env::current_dir()?;

    for dir in cwd.ancestors() {
        if dir.join("terraform").is_dir() {
            return Ok(dir.to_path_buf());
        }
    }

    Err(PrtclError::ProjectRootNotFound(cwd))
}
