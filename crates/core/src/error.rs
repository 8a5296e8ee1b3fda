//! Error types for s3cli-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for s3cli-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s3cli operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file or environment error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (local files, config reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error (part manifest, output serialization)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint URL failed to parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Bucket, object, or local file not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport or service error from the storage backend
    #[error("Service error: {0}")]
    Service(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::InvalidUrl(_) => 2, // UsageError
            Error::Service(_) => 3,                       // ServiceError
            Error::NotFound(_) => 5,                      // NotFound
            _ => 1,                                       // GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::Config("test".into()).exit_code(), 2);
        assert_eq!(Error::Service("test".into()).exit_code(), 3);
        assert_eq!(Error::NotFound("test".into()).exit_code(), 5);
        assert_eq!(Error::General("test".into()).exit_code(), 1);
        let io = Error::Io(std::io::Error::other("x"));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = Error::Config("ENDPOINT_URL is not set".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: ENDPOINT_URL is not set"
        );

        let err = Error::NotFound("bucket 'test6'".into());
        assert_eq!(err.to_string(), "Not found: bucket 'test6'");
    }
}
