//! The classification seam and the default table.

use std::{collections::TryReserveError, io};

use thiserror::Error;

use crate::Cause;

/// Decides which causes must never be captured.
///
/// Implemented for any `Fn(&Cause) -> bool + Send + Sync`, so a closure can
/// stand in for a dedicated type.
pub trait FatalClassifier: Send + Sync {
    /// Returns `true` when `cause` must propagate instead of being captured.
    fn is_fatal(&self, cause: &Cause) -> bool;
}

impl<F> FatalClassifier for F
where
    F: Fn(&Cause) -> bool + Send + Sync,
{
    fn is_fatal(&self, cause: &Cause) -> bool {
        self(cause)
    }
}

/// Classifier active until another one is installed.
///
/// Fatal causes:
/// - [`Cancelled`], the cooperative-cancellation signal;
/// - [`TryReserveError`], a failed allocation;
/// - [`io::Error`] of kind [`io::ErrorKind::OutOfMemory`].
///
/// Stack exhaustion and allocator aborts terminate the process before any
/// classifier runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultClassifier;

impl FatalClassifier for DefaultClassifier {
    fn is_fatal(&self, cause: &Cause) -> bool {
        cause.is::<Cancelled>()
            || cause.is::<TryReserveError>()
            || cause
                .downcast_ref::<io::Error>()
                .is_some_and(|err| err.kind() == io::ErrorKind::OutOfMemory)
    }
}

/// Cooperative-cancellation signal.
///
/// Blocks that observe cancellation return or panic with this error; the
/// default classifier re-raises it from every catching helper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cancelled: {reason}")]
pub struct Cancelled {
    reason: String,
}

impl Cancelled {
    /// Creates a cancellation signal with a human-readable reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why the operation was cancelled.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
