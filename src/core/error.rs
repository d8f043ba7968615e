use crate::core::value::ValueType;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SocketError {
    #[error("Socket '{identifier}' holds {expected} values, got {found}")]
    InvalidType {
        identifier: String,
        expected: ValueType,
        found: String,
    },

    #[error("Socket '{identifier}' has no value")]
    Unset { identifier: String },

    #[error("Socket '{identifier}' value could not be decoded: {reason}")]
    Decode { identifier: String, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error("Input {index} ('{identifier}') is not set")]
    UnsetInput { index: usize, identifier: String },

    #[error("Result for '{identifier}' is not a finite number")]
    NonFinite { identifier: String },

    #[error("{operation} expects {expected} {kind} sockets, got {found}")]
    Arity {
        operation: String,
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Socket error: {0}")]
    Socket(#[from] SocketError),
}
