//! Turning panic payloads into causes.

use std::{any::Any, error::Error, panic};

use crate::{
    Cause, Panicked,
    fatal::{self, Cancelled, FatalClassifier},
};

/// Converts a caught panic payload into a non-fatal cause.
///
/// Recognised payloads:
/// - a [`Cause`] is recovered as-is, identity intact;
/// - a `Box<dyn Error + Send + Sync>` is adopted with [`Cause::from_boxed`];
/// - a [`Cancelled`] becomes a cause holding a copy of it.
///
/// Any other payload is described by a [`Panicked`] cause. When a cause
/// built from a foreign payload is fatal, the original payload resumes
/// unwinding. A fatal boxed error is re-raised as a [`Cause`] payload.
pub(super) fn admit(classifier: &dyn FatalClassifier, payload: Box<dyn Any + Send>) -> Cause {
    let payload = match payload.downcast::<Cause>() {
        Ok(cause) => return fatal::non_fatal_or_throw_with(classifier, *cause),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Box<dyn Error + Send + Sync>>() {
        Ok(error) => {
            return fatal::non_fatal_or_throw_with(classifier, Cause::from_boxed(*error));
        }
        Err(payload) => payload,
    };
    let cause = payload.downcast_ref::<Cancelled>().map_or_else(
        || Cause::new(Panicked::from_payload(payload.as_ref())),
        |cancelled| Cause::new(cancelled.clone()),
    );
    if classifier.is_fatal(&cause) {
        tracing::debug!(cause_type = cause.type_name(), "resuming fatal panic");
        panic::resume_unwind(payload);
    }
    tracing::trace!(message = %cause, "captured panic as failure");
    cause
}
