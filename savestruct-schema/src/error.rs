//! Error types for header parsing and selection checks.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for header parsing operations.
///
/// Only input failures are errors. Lines that do not look like field
/// declarations are skipped and unknown type names become record
/// references, so neither shows up here.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input header could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        /// Path of the header.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Creates a read error for the given path.
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Non-fatal findings about a parsed header and its selection.
///
/// These are reported to the user but never abort generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// An allow-list entry names no record in the input.
    #[error("selected record '{name}' not found in input")]
    UnmatchedSelection {
        /// Allow-list entry.
        name: String,
    },

    /// A record name was defined more than once; the last body is used.
    #[error("record '{name}' defined {count} times, using the last definition")]
    DuplicateRecord {
        /// Record name.
        name: String,
        /// Number of definitions seen.
        count: usize,
    },

    /// A selected record contributes no persisted field.
    #[error("selected record '{name}' has no persisted fields")]
    EmptyRecord {
        /// Record name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_mentions_path() {
        let err = ParseError::read(
            "missing/struct.h",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing/struct.h"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::DuplicateRecord {
            name: "gps".to_string(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "record 'gps' defined 2 times, using the last definition"
        );
    }
}
