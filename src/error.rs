use std::ops::Range;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected edit of a [`CodeBuffer`](crate::core::code_buffer::CodeBuffer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeBufferError {
    #[error("dot {dot} is past the end of a {len}-byte buffer")]
    DotOutOfRange { dot: usize, len: usize },

    #[error("dot {dot} does not fall on a character boundary")]
    NotCharBoundary { dot: usize },
}

/// A static problem found in the code by a highlighter.
///
/// This is not a failure of the highlighter itself; it is carried next to a
/// successful highlight result and shown below the code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HighlightError {
    pub message: String,
    pub range: Range<usize>,
}

impl HighlightError {
    #[must_use]
    pub fn new(message: impl Into<String>, range: Range<usize>) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

impl LoggingError {
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
