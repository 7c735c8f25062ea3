//! Error types for file I/O operations.

use thiserror::Error;

/// Error types for file I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Source file does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// Low-level I/O error from std::io.
    #[error("IO error: {0}")]
    System(#[from] std::io::Error),
}

impl IoError {
    /// Map an open failure on `path`, keeping anything other than "not found" as-is.
    pub(crate) fn on_open(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.to_string_lossy().to_string())
        } else {
            Self::System(err)
        }
    }
}
