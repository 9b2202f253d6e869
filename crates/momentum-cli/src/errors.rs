//! Typed failures that carry their own exit codes.
//!
//! Anything that should stop the run with a specific status goes
//! through `CliError`, so scripts can branch on the code alone.

use std::fmt;

use super::constants::exit_codes;

/// Failure cases the CLI reports with a dedicated exit status.
#[derive(Debug)]
pub enum CliError {
    /// The tracker is empty, so the requested action has no target
    NothingToDo { message: String, hint: String },

    /// The user gave us something unusable, like a blank name
    InvalidInput(String),
}

impl CliError {
    pub fn nothing_to_do(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::NothingToDo {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Status the process should exit with for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NothingToDo { .. } => exit_codes::NOTHING_TO_DO,
            Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Report on stderr and terminate with this error's status.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToDo { message, hint } => write!(f, "{}\n{}", message, hint),
            Self::InvalidInput(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for CliError {}
