//! Error conditions surfaced by the utilities
//!
//! Every variant is terminal for the current invocation: the binaries print
//! the message and exit with status 1. Callers that need to react to a
//! specific condition can `downcast_ref::<Error>()` on the `anyhow::Error`.

use crate::utils::exit_codes::get_exit_code_description;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// A required value was absent or empty
    MissingArgument { argument: String },
    /// A value was present but unusable
    InvalidArgument {
        argument: String,
        value: String,
        reason: String,
    },
    /// The scaffold target directory is already there
    DirectoryExists { path: PathBuf },
    /// An external command exited with a non-zero status
    CommandFailed {
        program: String,
        code: Option<i32>,
        message: String,
    },
    /// An external command could not be started
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// An external command printed output that did not parse
    Parse {
        what: String,
        source: serde_json::Error,
    },
}

impl Error {
    pub fn missing(argument: impl Into<String>) -> Self {
        Error::MissingArgument {
            argument: argument.into(),
        }
    }

    pub fn invalid(
        argument: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidArgument {
            argument: argument.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingArgument { argument } => write!(f, "{} is required", argument),
            Error::InvalidArgument {
                argument,
                value,
                reason,
            } => write!(f, "Invalid value '{}' for {}: {}", value, argument, reason),
            Error::DirectoryExists { path } => {
                write!(f, "Directory '{}' already exists", path.display())
            }
            Error::CommandFailed {
                program,
                code,
                message,
            } => {
                match code {
                    Some(code) => write!(
                        f,
                        "{} exited with code {} ({})",
                        program,
                        code,
                        get_exit_code_description(*code)
                    )?,
                    None => write!(f, "{} was terminated by a signal", program)?,
                }
                if !message.is_empty() {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
            Error::Spawn { program, .. } => write!(f, "Failed to execute '{}'", program),
            Error::Parse { what, .. } => write!(f, "Failed to parse {}", what),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Spawn { source, .. } => Some(source),
            Error::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
