//! Backend configuration rendering.
//!
//! Generates `backend.hcl` for an environment by substituting the AWS
//! account ID into its template.

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::constants;
use crate::core::environment::Environment;
use crate::error::{PrtclError, Result};

/// Render `backend.hcl` for an environment from its template.
///
/// Every occurrence of [`constants::ACCOUNT_ID_PLACEHOLDER`] is replaced
/// with `account_id`; all other template content passes through unchanged.
/// The output file is overwritten, so re-rendering with the same inputs is
/// idempotent.
///
/// With `atomic` set, content is written to a temp file in the environment
/// directory and renamed into place; otherwise the output is overwritten
/// directly, matching the tool's original trusted-local-use behavior.
///
/// # Errors
///
/// Returns `TemplateNotFound` if the template is absent; the output file is
/// neither created nor modified in that case.
pub fn render(
    environment: Environment,
    account_id: &str,
    project_root: &Path,
    atomic: bool,
) -> Result<PathBuf> {
    let env_dir = environment.dir(project_root);
    let template_path = env_dir.join(constants::BACKEND_TEMPLATE);
    let output_path = env_dir.join(constants::BACKEND_FILE);

    if !template_path.exists() {
        return Err(PrtclError::TemplateNotFound(template_path));
    }

    let template = std::fs::read_to_string(&template_path)?;
    let rendered = template.replace(constants::ACCOUNT_ID_PLACEHOLDER, account_id);

    if atomic {
        let mut tmp = NamedTempFile::new_in(&env_dir)?;
        tmp.write_all(rendered.as_bytes())?;
        tmp.persist(&output_path)
            .map_err(|err| PrtclError::Io(err.error))?;
    } else {
        std::fs::write(&output_path, &rendered)?;
    }

    debug!(path = %output_path.display(), atomic, "rendered backend config");
    Ok(output_path)
}
