//! Error types for command execution.

use std::io;

use thiserror::Error;

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, ExecError>;

/// Why a command produced no usable output.
///
/// The `Display` text is what the session prints in place of output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecError {
    /// The interpreter could not find the command.
    #[error("'{command}' is not recognized as an internal or external command")]
    NotRecognized { command: String },

    /// The interpreter itself could not be started.
    #[error("Error: Failed to execute command (code {code})")]
    Spawn { code: i32 },
}

impl ExecError {
    pub fn not_recognized(command: impl Into<String>) -> Self {
        Self::NotRecognized {
            command: command.into(),
        }
    }

    /// Classifies a failure to start the interpreter.
    ///
    /// A missing program reads as "not recognized"; anything else keeps the
    /// OS error code.
    pub fn from_spawn(command: &str, err: &io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            return Self::not_recognized(command);
        }
        Self::Spawn {
            code: err.raw_os_error().unwrap_or(-1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        assert_eq!(
            ExecError::not_recognized("frob").to_string(),
            "'frob' is not recognized as an internal or external command"
        );
        assert_eq!(
            ExecError::Spawn { code: 5 }.to_string(),
            "Error: Failed to execute command (code 5)"
        );
    }

    #[test]
    fn test_from_spawn() {
        let missing = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(
            ExecError::from_spawn("x", &missing),
            ExecError::not_recognized("x")
        );

        let denied = io::Error::from_raw_os_error(13);
        assert_eq!(
            ExecError::from_spawn("x", &denied),
            ExecError::Spawn { code: 13 }
        );
    }
}
