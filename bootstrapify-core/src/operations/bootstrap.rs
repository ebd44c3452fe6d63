use crate::inputs::BootstrapInputs;
use crate::output::{BootstrapResult, EditReport, RenameReport};
use crate::rename::{rename_template_dir, TEMPLATE_DIR};
use crate::replace::{edit_file, EditOutcome, Replacement};
use anyhow::Result;
use std::path::Path;

/// The fixed substitution table, in execution order.
///
/// `template/Cargo.toml` is edited before the directory rename so the
/// path is still valid when the edit runs.
fn edit_steps(inputs: &BootstrapInputs) -> Vec<(&'static str, Vec<Replacement>)> {
    let slug = inputs.repo_slug();
    let project_name = inputs.project_name.as_str();
    vec![
        (
            "README.md",
            vec![
                Replacement::new("fast/template", slug.as_str()),
                Replacement::new("${projectName}", project_name),
            ],
        ),
        (
            "Cargo.toml",
            vec![
                Replacement::new("fast/template", slug.as_str()),
                // Quoted to hit the workspace member entry, not prose
                Replacement::new("\"template\"", format!("\"{project_name}\"")),
            ],
        ),
        (
            "template/Cargo.toml",
            vec![Replacement::new(
                "name = \"template\"",
                format!("name = \"{project_name}\""),
            )],
        ),
        (
            ".github/semantic.yml",
            vec![Replacement::new("fast/template", slug.as_str())],
        ),
    ]
}

/// Bootstrap operation - personalizes the template checkout in
/// `working_dir` and returns structured data.
///
/// Each file step is independent: a missing target is recorded and
/// skipped, while read/write failures propagate and abort the run.
pub fn bootstrap_operation(
    inputs: &BootstrapInputs,
    working_dir: Option<&Path>,
) -> Result<BootstrapResult> {
    let current_dir = working_dir.unwrap_or_else(|| Path::new("."));

    let mut edits = Vec::new();
    let mut files_changed = 0;
    for (path, rules) in edit_steps(inputs) {
        let outcome = edit_file(&current_dir.join(path), &rules)?;
        if outcome == EditOutcome::Updated {
            files_changed += 1;
        }
        edits.push(EditReport {
            path: path.to_owned(),
            outcome,
        });
    }

    let outcome = rename_template_dir(current_dir, &inputs.project_name)?;
    let rename = RenameReport {
        from: TEMPLATE_DIR.to_owned(),
        to: inputs.project_name.clone(),
        outcome,
    };

    Ok(BootstrapResult {
        project_name: inputs.project_name.clone(),
        github_username: inputs.github_username.clone(),
        edits,
        rename,
        files_changed,
    })
}
