//! Error types for mesh I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during mesh I/O operations.
///
/// Line numbers are 1-based and refer to the text being parsed.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content that fits no more specific variant.
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// The input ended before a declared record was read.
    #[error("unexpected end of file at line {line}: expected {expected}")]
    UnexpectedEof {
        /// Line number where the record was expected.
        line: usize,
        /// What was expected at that line.
        expected: &'static str,
    },

    /// A record line has the wrong number of fields.
    #[error("line {line}: expected {expected} fields, got {got}")]
    InvalidFieldCount {
        /// Line number of the record.
        line: usize,
        /// Number of fields the record requires.
        expected: usize,
        /// Number of fields found.
        got: usize,
    },

    /// A field could not be parsed as a number.
    #[error("line {line}: invalid {kind} '{token}'")]
    InvalidNumber {
        /// Line number of the field.
        line: usize,
        /// The offending token.
        token: String,
        /// The expected kind of number ("count", "coordinate", "vertex index").
        kind: &'static str,
    },

    /// More records follow a section than its declared count.
    #[error("{section} count mismatch: declared {declared}, found at least {found}")]
    InvalidCount {
        /// The section whose count did not match ("vertex" or "triangle").
        section: &'static str,
        /// The count declared in the header line.
        declared: usize,
        /// The number of records found.
        found: usize,
    },

    /// A face references a vertex that does not exist.
    #[error("triangle {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Position of the triangle in the triangle block.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Check whether this error describes malformed input rather than an
    /// I/O failure.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidContent { .. }
                | Self::UnexpectedEof { .. }
                | Self::InvalidFieldCount { .. }
                | Self::InvalidNumber { .. }
                | Self::InvalidCount { .. }
        )
    }
}

impl From<tempfile::PersistError> for IoError {
    fn from(err: tempfile::PersistError) -> Self {
        Self::Io(err.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_line_numbers() {
        let err = IoError::InvalidFieldCount {
            line: 4,
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "line 4: expected 3 fields, got 2");

        let err = IoError::InvalidNumber {
            line: 2,
            token: "x".to_string(),
            kind: "coordinate",
        };
        assert_eq!(err.to_string(), "line 2: invalid coordinate 'x'");
    }

    #[test]
    fn format_errors_are_classified() {
        assert!(IoError::invalid_content("bad").is_format_error());
        assert!(
            IoError::UnexpectedEof {
                line: 1,
                expected: "vertex count"
            }
            .is_format_error()
        );
        assert!(
            !IoError::IndexOutOfRange {
                face: 0,
                index: 3,
                vertex_count: 3
            }
            .is_format_error()
        );
        assert!(!IoError::Io(std::io::Error::other("disk")).is_format_error());
    }
}
