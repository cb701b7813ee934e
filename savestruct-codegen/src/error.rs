//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Input header could not be read.
    #[error("header parse error: {0}")]
    Parse(#[from] savestruct_schema::ParseError),

    /// An artifact could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The output base name cannot name a file.
    #[error("invalid output base '{}': {reason}", .path.display())]
    OutputBase {
        /// Base path as given.
        path: PathBuf,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl CodegenError {
    /// Creates a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates an output base error.
    pub fn output_base(path: impl Into<PathBuf>, reason: &'static str) -> Self {
        Self::OutputBase {
            path: path.into(),
            reason,
        }
    }
}
