//! Error types for the pager.

use thiserror::Error;

/// Failures while paging.
#[derive(Error, Debug)]
pub enum PagerError {
    /// Reading the source or writing the screen failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal could not be switched into or out of key-reading mode.
    #[error("Terminal error: {0}")]
    Terminal(String),
}
