use thiserror::Error;

/// Custom error types for mkvscan.
///
/// Every probe-side variant is recoverable at the batch level: a failed probe
/// degrades that file's record to the all-absent form and scanning continues.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("{tool} exited with status {status}: {stderr}")]
    CommandFailed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("No processable .mkv files found in the input directory")]
    NoFilesFound,

    #[error("Invalid path: {0}")]
    PathError(String),
}

/// Result type for mkvscan operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
