use anyhow::Result;
use bootstrapify_core::{
    bootstrap_operation, parse_github_username, parse_project_name, render_summary,
    with_input_prompt, BootstrapInputs, OutputFormat, OutputFormatter,
};
use std::io::{self, BufRead};

pub fn handle_bootstrap(
    project_name: Option<String>,
    github_username: Option<String>,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let inputs = collect_inputs(project_name, github_username)?;

    if output == OutputFormat::Summary {
        println!(
            "Bootstrapping project '{}' for user '{}'...\n",
            inputs.project_name, inputs.github_username
        );
    }

    let result = bootstrap_operation(&inputs, None)?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => print!("{}", render_summary(&result, use_color)),
    }

    Ok(())
}

/// Flag-provided values skip their prompt but go through the same
/// trim-and-reject-empty validation as interactive input.
fn collect_inputs(
    project_name: Option<String>,
    github_username: Option<String>,
) -> Result<BootstrapInputs> {
    let project_name = match project_name {
        Some(name) => name,
        None => prompt_input("Enter your project name (e.g., my-awesome-project)")?,
    };
    let project_name = parse_project_name(&project_name)?;

    let github_username = match github_username {
        Some(name) => name,
        None => prompt_input("Enter your GitHub username (e.g., torvalds)")?,
    };
    let github_username = parse_github_username(&github_username)?;

    Ok(BootstrapInputs {
        project_name,
        github_username,
    })
}

fn prompt_input(prompt: &str) -> Result<String> {
    with_input_prompt(|| prompt_input_with_reader(prompt, &mut io::stdin().lock()))
}

// Prompts go to stderr so that --output json stays machine-readable.
fn prompt_input_with_reader<R: BufRead>(prompt: &str, reader: &mut R) -> Result<String> {
    eprint!("{}: ", prompt);

    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstrapify_core::InputError;

    #[test]
    fn test_prompt_trims_surrounding_whitespace() {
        let input = b"  my-project  \n";
        let value = prompt_input_with_reader("Enter your project name", &mut &input[..]).unwrap();
        assert_eq!(value, "my-project");
    }

    #[test]
    fn test_prompt_eof_yields_empty_value() {
        let input = b"";
        let value = prompt_input_with_reader("Enter your project name", &mut &input[..]).unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_collect_inputs_from_flags() {
        let inputs =
            collect_inputs(Some("proj".to_string()), Some("alice".to_string())).unwrap();
        assert_eq!(inputs.project_name, "proj");
        assert_eq!(inputs.github_username, "alice");
    }

    #[test]
    fn test_collect_inputs_rejects_blank_flag_values() {
        let err = collect_inputs(Some("   ".to_string()), Some("alice".to_string()))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::EmptyProjectName)
        );

        let err = collect_inputs(Some("proj".to_string()), Some(String::new())).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::EmptyGithubUsername)
        );
    }
}
