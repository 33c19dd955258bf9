//! Deployment environments.
//!
//! The set of environments is closed; each maps to a directory under
//! `terraform/envs/`.

use std::fmt;
use std::path::{Path, PathBuf};

/// A deployment environment.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Stage,
    Prod,
}

impl Environment {
    /// All environments, in promotion order.
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Stage, Environment::Prod];

    /// Lowercase name as it appears in paths and bucket names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Stage => "stage",
            Environment::Prod => "prod",
        }
    }

    /// Terraform directory for this environment.
    pub fn dir(&self, project_root: &Path) -> PathBuf {
        project_root
            .join("terraform")
            .join("envs")
            .join(self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
