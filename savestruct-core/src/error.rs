//! Error types for reading containers.

use thiserror::Error;

/// Outcome of a failed read.
///
/// A missing opening tag is the normal result of reading a field that an
/// older save did not write. A missing closing tag means the buffer is
/// truncated or corrupt. Callers that need the legacy integer codes can use
/// [`ReadError::code`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// `<tag>` does not occur in the buffer.
    #[error("opening tag <{tag}> not found")]
    MissingOpenTag {
        /// Tag name.
        tag: String,
    },

    /// `<tag>` occurs but no `</tag>` follows it.
    #[error("closing tag </{tag}> not found")]
    MissingCloseTag {
        /// Tag name.
        tag: String,
    },

    /// The tagged text could not be parsed as the target type.
    #[error("invalid value '{value}' in <{tag}>")]
    InvalidValue {
        /// Tag name.
        tag: String,
        /// Text found between the tags.
        value: String,
    },
}

impl ReadError {
    /// Creates a missing opening tag error.
    pub fn missing_open(tag: impl Into<String>) -> Self {
        Self::MissingOpenTag { tag: tag.into() }
    }

    /// Creates a missing closing tag error.
    pub fn missing_close(tag: impl Into<String>) -> Self {
        Self::MissingCloseTag { tag: tag.into() }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Returns the legacy return code: 1 for a missing opening tag, 2 for a
    /// missing closing tag, 3 for an unparsable value. Success is 0.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::MissingOpenTag { .. } => 1,
            Self::MissingCloseTag { .. } => 2,
            Self::InvalidValue { .. } => 3,
        }
    }

    /// Returns the tag the error refers to.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::MissingOpenTag { tag }
            | Self::MissingCloseTag { tag }
            | Self::InvalidValue { tag, .. } => tag,
        }
    }

    /// Returns true if the tag was simply absent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::MissingOpenTag { .. })
    }
}

/// Result type alias for read operations.
pub type ReadResult<T = ()> = std::result::Result<T, ReadError>;
