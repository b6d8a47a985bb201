//! Error types for scanning and the surrounding tooling.

use thiserror::Error;

/// Failure raised while building an asset tree.
///
/// Cancellation is not an error: a cancelled scan returns the partial tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The VFS could not list the children of a folder.
    #[error("failed to read folder {path}: {source}")]
    Enumeration {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Path of the folder that failed to enumerate.
    pub fn path(&self) -> &str {
        match self {
            ScanError::Enumeration { path, .. } => path,
        }
    }
}

/// Errors surfaced by configuration, logging and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
