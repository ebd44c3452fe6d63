use thiserror::Error;

/// Validation failures for the two bootstrap inputs.
///
/// The CLI maps these to exit code 1, as opposed to I/O failures which
/// abort with a different code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("project name cannot be empty")]
    EmptyProjectName,
    #[error("GitHub username cannot be empty")]
    EmptyGithubUsername,
}

/// The two values a bootstrap run needs. Both are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapInputs {
    pub project_name: String,
    pub github_username: String,
}

impl BootstrapInputs {
    pub fn new(project_name: &str, github_username: &str) -> Result<Self, InputError> {
        Ok(Self {
            project_name: parse_project_name(project_name)?,
            github_username: parse_github_username(github_username)?,
        })
    }

    /// The `<username>/<project_name>` slug substituted into repository URLs.
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.github_username, self.project_name)
    }
}

/// Trims surrounding whitespace and rejects an empty project name.
pub fn parse_project_name(name: &str) -> Result<String, InputError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::EmptyProjectName);
    }
    Ok(name.to_owned())
}

/// Trims surrounding whitespace and rejects an empty username.
pub fn parse_github_username(name: &str) -> Result<String, InputError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::EmptyGithubUsername);
    }
    Ok(name.to_owned())
}
