//! Process-wide classifier used by the catching helpers.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use super::{DefaultClassifier, FatalClassifier};
use crate::Cause;

static ACTIVE: LazyLock<RwLock<Arc<dyn FatalClassifier>>> =
    LazyLock::new(|| RwLock::new(default_classifier()));

fn default_classifier() -> Arc<dyn FatalClassifier> {
    Arc::new(DefaultClassifier)
}

/// Returns the classifier currently consulted by the catching helpers.
#[must_use]
pub fn active_classifier() -> Arc<dyn FatalClassifier> {
    Arc::clone(&*ACTIVE.read())
}

/// Replaces the active classifier, returning the previous one.
///
/// Hand the returned value to [`restore_classifier`] to undo the change.
///
/// # Examples
///
/// ```
/// use outcome::{Cause, fatal};
///
/// let previous = fatal::install_classifier(|_: &Cause| false);
/// assert!(!fatal::is_fatal(&Cause::new(fatal::Cancelled::new("ignored"))));
/// fatal::restore_classifier(previous);
/// ```
pub fn install_classifier<C>(classifier: C) -> Arc<dyn FatalClassifier>
where
    C: FatalClassifier + 'static,
{
    let replacement: Arc<dyn FatalClassifier> = Arc::new(classifier);
    let previous = std::mem::replace(&mut *ACTIVE.write(), replacement);
    tracing::debug!("installed fatal classifier");
    previous
}

/// Reinstates a classifier previously returned by [`install_classifier`].
pub fn restore_classifier(previous: Arc<dyn FatalClassifier>) {
    *ACTIVE.write() = previous;
}

/// Reinstates [`DefaultClassifier`].
pub fn reset_classifier() {
    restore_classifier(default_classifier());
}

/// Classifies `cause` with the active classifier.
///
/// The registry lock is released before the classifier runs.
#[must_use]
pub fn is_fatal(cause: &Cause) -> bool {
    active_classifier().is_fatal(cause)
}
