//! Fatal-versus-non-fatal classification of causes.
//!
//! Capturing helpers never turn a fatal cause into a failure. Every path that
//! builds a failure funnels through [`non_fatal_or_throw`], which consults the
//! active [`FatalClassifier`] and re-raises fatal causes as a panic carrying
//! the [`Cause`] itself.

mod classifier;
mod registry;

pub use classifier::{Cancelled, DefaultClassifier, FatalClassifier};
pub use registry::{
    active_classifier, install_classifier, is_fatal, reset_classifier, restore_classifier,
};

use crate::Cause;

/// Returns `cause` unchanged when the active classifier deems it non-fatal.
///
/// # Panics
///
/// Re-raises `cause` as a panic payload when it is fatal.
///
/// # Examples
///
/// ```
/// use outcome::{Cause, fatal};
///
/// let cause = Cause::new(std::io::Error::other("retry later"));
/// let kept = fatal::non_fatal_or_throw(cause.clone());
/// assert_eq!(kept, cause);
/// ```
#[track_caller]
pub fn non_fatal_or_throw(cause: Cause) -> Cause {
    let classifier = active_classifier();
    non_fatal_or_throw_with(classifier.as_ref(), cause)
}

/// Like [`non_fatal_or_throw`], against an explicit classifier.
///
/// # Panics
///
/// Re-raises `cause` as a panic payload when `classifier` deems it fatal.
#[track_caller]
pub fn non_fatal_or_throw_with(classifier: &dyn FatalClassifier, cause: Cause) -> Cause {
    if classifier.is_fatal(&cause) {
        raise(cause);
    }
    cause
}

/// Unwinds with `cause` as the panic payload.
#[track_caller]
pub(crate) fn raise(cause: Cause) -> ! {
    tracing::debug!(
        cause_type = cause.type_name(),
        message = %cause,
        "re-raising cause"
    );
    std::panic::panic_any(cause)
}
