use clap::Parser;
use std::path::PathBuf;

use super::types::OutputFormatArg;

/// Personalize a project template: substitute the project name and
/// GitHub username across the checkout and rename the template directory
#[derive(Parser, Debug)]
#[command(name = "bootstrapify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the new project (e.g., my-awesome-project); prompted for
    /// interactively when omitted
    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,

    /// GitHub username or organization (e.g., torvalds); prompted for
    /// interactively when omitted
    #[arg(long, value_name = "NAME")]
    pub github_username: Option<String>,

    /// Run as if started in <PATH> instead of the current working directory
    #[arg(short = 'C', value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Output format for machine consumption
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormatArg,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}
