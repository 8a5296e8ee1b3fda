//! Exit code definitions for the s3cli binary
//!
//! Scripts rely on these values; keep them stable.

use s3cli_core::Error;

/// Exit codes emitted by s3cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,

    /// General/unspecified error (local file errors, malformed manifests)
    GeneralError = 1,

    /// User input error: missing configuration or invalid arguments
    UsageError = 2,

    /// Transport or service error from the storage backend
    ServiceError = 3,

    /// Bucket, object, or local file not found
    NotFound = 5,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map a core error to its exit code
    pub const fn from_error(err: &Error) -> Self {
        match err.exit_code() {
            2 => Self::UsageError,
            3 => Self::ServiceError,
            5 => Self::NotFound,
            _ => Self::GeneralError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
