//! Error types for the devotion library.
//!
//! Composition itself never fails: a missing lectionary entry is `None` and a
//! missing prayer text falls back. Errors only arise at the edges, when
//! parsing caller input or loading data files.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all library operations.
#[derive(Error, Debug)]
pub enum VigilError {
    /// A string could not be parsed as a calendar date
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> VigilError {
        VigilError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl VigilError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid date error for the given raw input.
    pub fn invalid_date(input: impl Into<String>, reason: impl fmt::Display) -> Self {
        VigilError::InvalidDate {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VigilError::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to VigilError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add lazy context to any error type, converting to VigilError.
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| VigilError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }

    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| VigilError::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, VigilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = VigilError::invalid_input("date").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'date': must not be empty"
        );
    }

    #[test]
    fn test_invalid_date_message() {
        let err = VigilError::invalid_date("2024-13-01", "month out of range");
        assert!(err.to_string().contains("2024-13-01"));
        assert!(err.to_string().contains("month out of range"));
    }

    #[test]
    fn test_with_context_wraps_as_configuration() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));
        match io.with_context("Loading catalog") {
            Err(VigilError::Configuration { message }) => {
                assert_eq!(message, "Loading catalog: disk on fire");
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }
}
