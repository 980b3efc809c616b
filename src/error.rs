use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or overriding a sync configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(String),

    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidValue { field: String, value: String },
}

/// Errors that can occur when reading a workflow document back from JSON.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse workflow JSON: {0}")]
    Parse(String),

    #[error("Failed to serialize workflow: {0}")]
    Serialize(String),
}

/// Errors surfaced by the file export. The host decides what failed; we only report it.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize document: {0}")]
    Serialize(String),

    #[error("Could not write to file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single clipboard mechanism.
///
/// These never escape `copy_text`, which collapses them into a boolean.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard mechanism unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard command '{program}' exited with {status}")]
    CommandFailed { program: String, status: String },

    #[error("Clipboard I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
