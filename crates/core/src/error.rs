//! Error types for the BPE tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Invalid training configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Merge table file does not exist
    #[error("Merge table not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A persisted merge record failed to parse or validate
    #[error("Malformed merge record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// I/O error with file context
    #[error("I/O error for {}: {}", path.display(), err)]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
