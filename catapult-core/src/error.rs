//! Error types for the catapult-core library.
//!
//! File discovery never fails (unreadable entries are skipped and reported),
//! so these errors come from the payload streams, log sinks and parsing of
//! user-supplied values.

use thiserror::Error;

/// Errors produced by the catapult-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid log level '{0}' (expected one of DEBUG, AUDIT, INFO, STATUS, WARNING, ERROR, CRITICAL)")]
    InvalidSeverity(String),

    #[error("Input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    OperationFailed(String),

    /// A failure wrapped with a description of what was being attempted.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// Wraps this error with `context`, keeping it as the source.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        CoreError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error beneath any layers of context.
    pub fn root(&self) -> &CoreError {
        match self {
            CoreError::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for catapult-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
