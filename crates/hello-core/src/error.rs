//! Shared error type across hello-metrics crates.

use thiserror::Error;

/// Stable error codes (used in logs and asserted by tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal / I/O failure.
    Internal,
}

impl ClientCode {
    /// String representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HelloError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum HelloError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl HelloError {
    /// Map error to a stable code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HelloError::BadRequest(_) => ClientCode::BadRequest,
            HelloError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            HelloError::Internal(_) => ClientCode::Internal,
        }
    }
}
