//! Error types for value access, parsing and loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ValueType;

/// Errors produced by jsontree operations.
#[derive(Error, Debug)]
pub enum JsonError {
    /// A typed accessor was used on a value holding a different variant.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueType,
        found: ValueType,
    },

    /// Read-only array access past the end of the array.
    #[error("index {index} out of bounds for array of length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// Read-only object access for a key that is not present.
    #[error("key \"{0}\" not found in object")]
    KeyNotFound(String),

    /// The input text was not a valid document.
    /// `line` and `column` are 1-based and point at the cursor where the
    /// failure was detected.
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },

    /// The loader could not read the requested file.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JsonError {
    pub(crate) fn mismatch(expected: ValueType, found: ValueType) -> Self {
        JsonError::TypeMismatch { expected, found }
    }

    /// Returns the human-readable message of a parse error, or the full
    /// display string for every other kind.
    pub fn message(&self) -> String {
        match self {
            JsonError::Parse { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Returns true if this error came from the parser.
    pub fn is_parse(&self) -> bool {
        matches!(self, JsonError::Parse { .. })
    }
}

/// Convenience alias used throughout jsontree-core.
pub type Result<T> = std::result::Result<T, JsonError>;
