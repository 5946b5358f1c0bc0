//! Cause recorded for panics that carried no [`Cause`](super::Cause) payload.

use std::any::Any;

use thiserror::Error;

/// A panic captured by one of the catching helpers.
///
/// String payloads (the ones `panic!` produces) keep their message. Any other
/// payload type is reported with a placeholder message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Creates a panic cause with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Message carried by the original panic.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&'static str>()
            .map(|text| (*text).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("Box<dyn Any>"));
        Self { message }
    }
}
