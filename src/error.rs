//! Error types for the underbar library.

use thiserror::Error;

/// Result type alias for underbar operations
pub type Result<T> = std::result::Result<T, UnderbarError>;

/// Main error type for the fallible utilities.
///
/// Most of the library cannot fail; only decorators that derive keys,
/// name-based invocation (including bad method arguments) and runtime-bound
/// scheduling report errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnderbarError {
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Unknown method: {message}")]
    UnknownMethod { message: String },

    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl UnderbarError {
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError {
            message: msg.into(),
        }
    }

    pub fn unknown_method(msg: impl Into<String>) -> Self {
        Self::UnknownMethod {
            message: msg.into(),
        }
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState {
            message: msg.into(),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
        }
    }
}

impl From<serde_json::Error> for UnderbarError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
