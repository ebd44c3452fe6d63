#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]

pub mod inputs;
pub mod interrupt;
pub mod operations;
pub mod output;
pub mod rename;
pub mod replace;

pub use inputs::{parse_github_username, parse_project_name, BootstrapInputs, InputError};
pub use interrupt::{input_prompt_active, with_input_prompt};
pub use operations::bootstrap_operation;
pub use output::{
    render_summary, BootstrapResult, EditReport, OutputFormat, OutputFormatter, RenameReport,
};
pub use rename::{rename_template_dir, RenameOutcome, TEMPLATE_DIR};
pub use replace::{apply_replacements, edit_file, EditOutcome, Replacement};
