//! Error types for the BTSE SDK

use serde_json::Value;
use thiserror::Error;

/// Result type alias for BTSE operations
pub type Result<T> = std::result::Result<T, BtseError>;

/// Main error type for BTSE SDK operations
#[derive(Error, Debug)]
pub enum BtseError {
    /// Configuration errors (missing credentials, malformed config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A signed endpoint was called without credentials
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The server answered with a non-success status
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Decoded error body, passed through unmodified
        body: Value,
    },

    /// No response was received (connect failure, DNS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discriminator for [`BtseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`BtseError::Config`] and [`BtseError::Io`]
    Configuration,
    /// See [`BtseError::Auth`]
    Authentication,
    /// See [`BtseError::Api`]
    Remote,
    /// See [`BtseError::Transport`]
    Transport,
    /// See [`BtseError::Json`]
    Decode,
}

impl From<reqwest::Error> for BtseError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl BtseError {
    /// Create a new API error
    pub fn api(status: u16, body: Value) -> Self {
        Self::Api { status, body }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Kind of failure, independent of the payload it carries
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) | Self::Io(_) => ErrorKind::Configuration,
            Self::Auth(_) => ErrorKind::Authentication,
            Self::Api { .. } => ErrorKind::Remote,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Json(_) => ErrorKind::Decode,
        }
    }

    /// Structured payload returned by the server, if there was one
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status of a server error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_carries_payload() {
        let err = BtseError::api(400, json!({"code": 51, "msg": "Invalid symbol"}));
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.payload().unwrap()["msg"], "Invalid symbol");
    }

    #[test]
    fn test_transport_error_has_no_payload() {
        let err = BtseError::transport("connection refused");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.payload().is_none());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_io_errors_are_configuration_errors() {
        let err: BtseError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
