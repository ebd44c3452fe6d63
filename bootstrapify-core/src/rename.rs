use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the placeholder directory shipped with the template.
pub const TEMPLATE_DIR: &str = "template";

/// Outcome of the directory rename step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameOutcome {
    /// `template` was renamed to the project name.
    Renamed,
    /// A directory with the project name already exists; nothing touched.
    AlreadyExists,
    /// `template` does not exist and neither does the target.
    Missing,
}

/// Rename the `template` directory inside `working_dir` to `project_name`.
///
/// An existing destination is never clobbered. Renaming `template` onto
/// itself (project named "template") is an accepted no-op.
pub fn rename_template_dir(working_dir: &Path, project_name: &str) -> Result<RenameOutcome> {
    let source = working_dir.join(TEMPLATE_DIR);
    let target = working_dir.join(project_name);

    if !source.is_dir() {
        if target.is_dir() {
            return Ok(RenameOutcome::AlreadyExists);
        }
        return Ok(RenameOutcome::Missing);
    }

    if project_name == TEMPLATE_DIR {
        return Ok(RenameOutcome::Renamed);
    }

    if target.is_dir() {
        return Ok(RenameOutcome::AlreadyExists);
    }

    fs::rename(&source, &target).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            source.display(),
            target.display()
        )
    })?;
    Ok(RenameOutcome::Renamed)
}
