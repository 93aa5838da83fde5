//! Interactive prompts for missing CLI input.

use dialoguer::Input;

use crate::error::{Error, Result};

/// Asks for a project name when none was given on the command line.
/// Ctrl-C / EOF maps to [`Error::Cancelled`] so the caller exits with 1.
pub fn prompt_project_name() -> Result<String> {
    let input = Input::<String>::new().with_prompt("Project name").interact_text();

    match input {
        Ok(name) => Ok(name),
        Err(dialoguer::Error::IO(e))
            if e.kind() == std::io::ErrorKind::Interrupted
                || e.kind() == std::io::ErrorKind::UnexpectedEof =>
        {
            Err(Error::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}
