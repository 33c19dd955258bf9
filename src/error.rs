use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrtclError {
    #[error("could not resolve AWS credentials")]
    CredentialResolution,

    #[error("AWS credentials are invalid or expired")]
    IdentityValidation,

    #[error("could not determine AWS account ID")]
    IdentityLookup,

    #[error("template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("{0} not found on PATH")]
    ToolNotFound(String),

    #[error("no terraform/ directory found in {} or any parent", .0.display())]
    ProjectRootNotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PrtclError>;
