use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt failed: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("Failed to parse answers. Original error: {0}")]
    AnswersParseError(#[from] serde_json::Error),

    #[error("Failed to render. Original error: {0}")]
    RenderError(#[from] minijinja::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Cannot proceed: project folder '{path}' already exists. Choose a different name.")]
    ProjectExistsError { path: String },

    /// When an external collaborator command has executed but finished with an error.
    #[error("Command '{command}' failed with exit code {}", describe_code(.code))]
    ExternalCommandError { command: String, code: Option<i32> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "<signal>".to_string(), |c| c.to_string())
}

impl Error {
    /// Process exit code reported when this error aborts the run.
    ///
    /// A failing external command propagates its own exit code; everything
    /// else, including an existing project root, exits with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ExternalCommandError { code: Some(code), .. } if *code != 0 => *code,
            _ => exit_codes::FAILURE,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with [`Error::exit_code`]
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
