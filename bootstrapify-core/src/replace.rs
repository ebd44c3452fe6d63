use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A literal substring replacement. Not a regex: every occurrence of
/// `find` in the file content is replaced.
#[derive(Debug, Clone)]
pub struct Replacement {
    pub find: String,
    pub replace_with: String,
}

impl Replacement {
    pub fn new(find: impl Into<String>, replace_with: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace_with: replace_with.into(),
        }
    }
}

/// Outcome of editing a single target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    /// Content changed and was written back.
    Updated,
    /// File exists but none of the rules matched.
    Unchanged,
    /// File does not exist; the step is skipped.
    Missing,
}

/// Apply `rules` in order to `content`, each replacing every occurrence.
pub fn apply_replacements(content: &str, rules: &[Replacement]) -> String {
    let mut result = content.to_owned();
    for rule in rules {
        if result.contains(&rule.find) {
            result = result.replace(&rule.find, &rule.replace_with);
        }
    }
    result
}

/// Edit `path` in place. A missing file is reported, not an error; the
/// file is rewritten only when the content actually changed.
pub fn edit_file(path: &Path, rules: &[Replacement]) -> Result<EditOutcome> {
    if !path.exists() {
        return Ok(EditOutcome::Missing);
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let new_content = apply_replacements(&content, rules);
    if new_content == content {
        return Ok(EditOutcome::Unchanged);
    }

    fs::write(path, new_content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(EditOutcome::Updated)
}
