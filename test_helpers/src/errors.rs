//! Error types for fixtures.

use std::{error::Error as StdError, fmt};

use outcome::Cause;
use thiserror::Error;

/// A missing-value error with a plain message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NullReferenceError {
    message: String,
}

impl NullReferenceError {
    /// Creates the error with `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An invalid-state error, optionally caused by another error.
#[derive(Debug)]
pub struct IllegalStateError {
    message: String,
    cause: Option<Cause>,
}

impl IllegalStateError {
    /// Creates the error with `message` and no cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates the error around `cause`, reusing its message.
    #[must_use]
    pub fn caused_by(cause: Cause) -> Self {
        Self {
            message: cause.message(),
            cause: Some(cause),
        }
    }

    /// The wrapped cause, if any.
    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

impl fmt::Display for IllegalStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal state: {}", self.message)
    }
}

impl StdError for IllegalStateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        source_of(self.cause.as_ref())
    }
}

/// A wrapper error built from a message and a cause, for `wrap_as` tests.
#[derive(Debug)]
pub struct CustomError {
    message: String,
    cause: Option<Cause>,
}

impl CustomError {
    /// Creates the wrapper; the signature matches [`outcome::wrap_as`].
    #[must_use]
    pub const fn new(message: String, cause: Cause) -> Self {
        Self {
            message,
            cause: Some(cause),
        }
    }

    /// Creates the error without a cause.
    #[must_use]
    pub fn bare(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// The message this error was built with.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause, if any.
    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for CustomError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        source_of(self.cause.as_ref())
    }
}

fn source_of(cause: Option<&Cause>) -> Option<&(dyn StdError + 'static)> {
    cause.map(|inner| -> &(dyn StdError + 'static) { inner.as_error() })
}
