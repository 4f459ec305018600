//! Shared error type across reqstats crates.

use thiserror::Error;

/// Stable error codes (used in logs and by tooling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config could not be parsed or failed validation.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Filesystem / socket failure.
    Io,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl StatsError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            StatsError::BadConfig(_) => ErrorCode::BadConfig,
            StatsError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            StatsError::Io(_) => ErrorCode::Io,
            StatsError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl From<std::io::Error> for StatsError {
    fn from(e: std::io::Error) -> Self {
        StatsError::Io(e.to_string())
    }
}
