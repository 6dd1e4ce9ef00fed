//! Shared error types for unwrapgen.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for generation operations.
#[derive(Debug, Error)]
pub enum UnwrapGenError {
    /// File system related errors
    #[error("File system error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Source parsing errors
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Signature extraction errors, tied to one method of a marked type
    #[error("Extraction error in {type_name}::{method}: {message}")]
    Extraction {
        type_name: String,
        method: String,
        message: String,
    },

    /// Validation errors (marker shape, input constraints)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Artifact rendering errors
    #[error("Render error: {0}")]
    Render(String),
}

impl UnwrapGenError {
    /// Create an I/O error with path context.
    pub fn io_with_path(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create an I/O error without path context.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a parse error for a source file.
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an extraction error naming the offending type and method.
    pub fn extraction(
        type_name: impl Into<String>,
        method: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Extraction {
            type_name: type_name.into(),
            method: method.into(),
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, UnwrapGenError>;
