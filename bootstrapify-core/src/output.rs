use crate::rename::RenameOutcome;
use crate::replace::EditOutcome;
use nu_ansi_term::Color;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Record of one file substitution step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditReport {
    pub path: String,
    pub outcome: EditOutcome,
}

/// Record of the directory rename step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameReport {
    pub from: String,
    pub to: String,
    pub outcome: RenameOutcome,
}

/// Result of a bootstrap operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapResult {
    pub project_name: String,
    pub github_username: String,
    pub edits: Vec<EditReport>,
    pub rename: RenameReport,
    pub files_changed: usize,
}

/// Trait for formatting output in different formats.
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for BootstrapResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "bootstrap",
            "project_name": self.project_name,
            "github_username": self.github_username,
            "edits": self.edits,
            "rename": self.rename,
            "summary": {
                "files_changed": self.files_changed,
            },
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        render_summary(self, false)
    }
}

/// Render the step-by-step human report, one status line per step,
/// followed by the completion message.
pub fn render_summary(result: &BootstrapResult, use_color: bool) -> String {
    let paint = |color: Color, text: String| {
        if use_color {
            color.paint(text).to_string()
        } else {
            text
        }
    };

    let mut out = String::new();
    for edit in &result.edits {
        let line = match edit.outcome {
            EditOutcome::Updated => paint(Color::Green, format!("Updated {}", edit.path)),
            EditOutcome::Unchanged => format!("No changes needed in {}", edit.path),
            EditOutcome::Missing => paint(
                Color::Yellow,
                format!("Warning: {} not found, skipping", edit.path),
            ),
        };
        let _ = writeln!(out, "{}", line);
    }

    let line = match result.rename.outcome {
        RenameOutcome::Renamed => paint(
            Color::Green,
            format!(
                "Renamed directory '{}' to '{}'",
                result.rename.from, result.rename.to
            ),
        ),
        RenameOutcome::AlreadyExists => {
            format!("Directory '{}' already exists", result.rename.to)
        },
        RenameOutcome::Missing => paint(
            Color::Yellow,
            format!("Warning: directory '{}' not found", result.rename.from),
        ),
    };
    let _ = writeln!(out, "{}", line);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", paint(Color::Green, "Bootstrap complete!".to_string()));
    let _ = writeln!(out, "You can now remove the bootstrap tool from your project.");
    out
}
