/*
    Errors
*/

use thiserror::Error;

/// Failures raised by operations on exact numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument lies outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The divisor of a division or remainder is zero.
    #[error("can not divide by zero")]
    DivisionByZero,

    /// A value of one kind was supplied where another was expected.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Alias for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
