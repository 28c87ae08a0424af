//! Error types for the sigrate core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Domain error: {msg}")]
    Domain { msg: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid argument: {msg}")]
    InvalidArgument { msg: String },

    #[error("Index {index} out of range for signal of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl CoreError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CoreError::InvalidArgument { msg: msg.into() }
    }
}

/// Result type for sigrate core operations
pub type Result<T> = std::result::Result<T, CoreError>;
