use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The attribution document was generated
    Success = 0,
    /// Application error (missing BOM, malformed BOM, template or file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for attribution generation.
///
/// Extraction errors (`InvalidInput`, `NotFound`, `MalformedBom`) are raised by
/// the BOM extractor and propagated unchanged to the CLI, which turns them into
/// a message and a non-zero exit status. Callers that need the kind can recover
/// it from an `anyhow::Error` with `downcast_ref::<MdbomError>()`.
#[derive(Debug, Error)]
pub enum MdbomError {
    #[error("Invalid input: {reason}\n\n💡 Hint: Please provide the required value via the command line or the config file")]
    InvalidInput { reason: String },

    #[error("Path not found: {path}\n\n💡 Hint: Please verify that the BOM file or directory exists")]
    NotFound { path: PathBuf },

    #[error("Malformed BOM: {path}\nDetails: {details}\n\n💡 Hint: A BOM must be a JSON object with a 'components' array whose entries carry 'name', 'version' and 'type'")]
    MalformedBom { path: PathBuf, details: String },

    #[error("Failed to render template: {path}\nDetails: {details}\n\n💡 Hint: Please verify the template syntax")]
    TemplateError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("{message}\n\n💡 Hint: Run `mdbom setup` to create a config file, or pass the values as flags")]
    ConfigError { message: String },
}

impl MdbomError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        MdbomError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        MdbomError::ConfigError {
            message: message.into(),
        }
    }
}
