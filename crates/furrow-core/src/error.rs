//! Error types for the furrow library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all furrow operations.
#[derive(Error, Debug)]
pub enum FurrowError {
    /// Transport or decoding failure while talking to the planning service
    #[error("Remote error: {message}")]
    Remote {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The planning service answered with a non-success status
    #[error("Remote service returned HTTP {status}: {body}")]
    RemoteStatus { status: u16, body: String },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// Another plan submission is still waiting for its result
    #[error("A plan submission is already in progress")]
    SubmissionPending,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating remote errors with optional context.
pub struct RemoteErrorBuilder {
    message: String,
}

impl RemoteErrorBuilder {
    /// Create a new remote error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> FurrowError {
        FurrowError::Remote {
            message: self.message,
            source,
        }
    }
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
    pub fn with_reason(self, reason: impl Into<String>) -> FurrowError {
        FurrowError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl FurrowError {
    /// Creates a builder for remote errors.
    pub fn remote(message: impl Into<String>) -> RemoteErrorBuilder {
        RemoteErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether this error means the remote service could not be used.
    ///
    /// These are the expected failures that trigger the local fallback.
    pub fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            FurrowError::Remote { .. } | FurrowError::RemoteStatus { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to FurrowError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for remote-call Results.
pub trait RemoteResultExt<T> {
    /// Map transport errors with a message.
    fn remote_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| FurrowError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> RemoteResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn remote_context(self, message: &str) -> Result<T> {
        self.map_err(|e| FurrowError::remote(message).with_source(e))
    }
}

/// Result type alias for furrow operations
pub type Result<T> = std::result::Result<T, FurrowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = FurrowError::invalid_input("crop").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'crop': must not be empty"
        );
        assert!(!err.is_remote_failure());
    }

    #[test]
    fn test_remote_status_is_remote_failure() {
        let err = FurrowError::RemoteStatus {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert!(err.is_remote_failure());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_with_context_maps_to_configuration() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "boom",
        ));
        let err = io.with_context("reading settings").unwrap_err();
        assert!(matches!(err, FurrowError::Configuration { .. }));
        assert!(err.to_string().contains("reading settings: boom"));
    }
}
