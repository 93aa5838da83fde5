use thiserror::Error;

use crate::constants::exit_codes;
use crate::validation::NameError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Invalid project name: {0}.")]
    ValidationError(#[from] NameError),

    #[error("Failed to render template. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to build template context. Original error: {0}")]
    ContextError(#[from] serde_json::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Cannot proceed: output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Cannot proceed: output path '{output_dir}' exists and is not a directory.")]
    OutputNotADirectoryError { output_dir: String },

    #[error("Cannot resolve output directory '{output_dir}'. Original error: {e}")]
    InvalidRootError { output_dir: String, e: String },

    /// The embedded catalogue itself is malformed. A defect, not a runtime
    /// condition to recover from.
    #[error("Template catalogue is malformed: {0}.")]
    CatalogueInvariantError(String),

    #[error("Cancelled by user.")]
    Cancelled,
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error: name validation failures and user
    /// cancellation exit with 1, everything else with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ValidationError(_) | Error::Cancelled => exit_codes::VALIDATION_FAILURE,
            _ => exit_codes::GENERATION_FAILURE,
        }
    }
}

/// Default error handler that prints the error and exits the program.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
