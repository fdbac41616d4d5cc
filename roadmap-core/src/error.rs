//! Error types for roadmap processing

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for roadmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for roadmap operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (includes invalid UTF-8 in the roadmap)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The roadmap document does not exist
    #[error("Roadmap document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
