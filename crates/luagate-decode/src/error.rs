//! Error types for value decoding

use std::fmt;

use mlua::Value;

use crate::value::ValueType;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Decode error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum DecodeError {
    /// A value had a different runtime type than expected
    #[error("wrong type: expecting {expected}, have {actual}")]
    TypeMismatch {
        /// Expected type name
        expected: String,
        /// Actual runtime type tag
        actual: ValueType,
    },

    /// A table key with no decoder registered for it
    #[error("unexpected field {0}")]
    UnexpectedField(String),

    /// Failure reported by a caller-supplied decoder
    #[error("{0}")]
    Custom(String),

    /// The Lua runtime failed while a value was being read
    #[error(transparent)]
    Lua(#[from] mlua::Error),
}

impl DecodeError {
    /// Type mismatch between `expected` and the runtime type of `actual`
    pub fn type_mismatch(expected: impl Into<String>, actual: &Value) -> Self {
        DecodeError::TypeMismatch {
            expected: expected.into(),
            actual: ValueType::of(actual),
        }
    }

    /// Decoder-specific failure with the given message
    pub fn custom(message: impl fmt::Display) -> Self {
        DecodeError::Custom(message.to_string())
    }
}

// Lets `?` raise a decode error from inside a plain `create_function` callback
impl From<DecodeError> for mlua::Error {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Lua(err) => err,
            other => mlua::Error::RuntimeError(other.to_string()),
        }
    }
}
