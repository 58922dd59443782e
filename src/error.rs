use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything a command can report back to the prompt.
///
/// The `Display` text of each variant is exactly what the user sees, so the
/// dispatcher just prints the error and moves on. None of these end the
/// session.
#[derive(Debug, Error)]
pub enum FileManagerError {
    #[error("Invalid input. Please enter a valid command.")]
    InvalidInput,

    #[error("Invalid path or directory does not exist.")]
    InvalidDirectory,

    #[error("Invalid file path or file does not exist.")]
    InvalidFile,

    #[error("Invalid source file path or file does not exist.")]
    InvalidSource,

    /// I/O failed part way through an operation; `action` reads like "copying file".
    #[error("Error {action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),
}

impl FileManagerError {
    pub fn io(action: &'static str, source: io::Error) -> Self {
        FileManagerError::Io { action, source }
    }

    /// Path and argument problems, as opposed to I/O failures.
    pub fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            FileManagerError::InvalidDirectory
                | FileManagerError::InvalidFile
                | FileManagerError::InvalidSource
        )
    }
}
