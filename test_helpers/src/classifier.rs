//! Helpers for tests that swap the process-wide fatal classifier.
//!
//! The classifier is global state shared by every test in a binary. Each
//! guard holds a global mutex for its lifetime and restores the previous
//! classifier on drop, in the manner of a working-directory guard.
//!
//! # Examples
//!
//! ```
//! use outcome::{Cancelled, Cause, fatal};
//! use outcome_test_helpers::classifier;
//!
//! let cancelled = Cause::new(Cancelled::new("ignored"));
//! {
//!     let _guard = classifier::install(|_: &Cause| false);
//!     assert!(!fatal::is_fatal(&cancelled));
//! }
//! assert!(fatal::is_fatal(&cancelled));
//! ```

use std::sync::{Arc, LazyLock};

use outcome::{FatalClassifier, fatal};
use parking_lot::{Mutex, MutexGuard};

static CLASSIFIER_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// RAII guard restoring the previous classifier on drop.
#[must_use = "dropping restores the previous classifier"]
pub struct ClassifierGuard {
    previous: Option<Arc<dyn FatalClassifier>>,
    _lock: MutexGuard<'static, ()>,
}

impl Drop for ClassifierGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            fatal::restore_classifier(previous);
        }
    }
}

/// Installs `classifier` until the returned guard is dropped.
pub fn install<C>(classifier: C) -> ClassifierGuard
where
    C: FatalClassifier + 'static,
{
    let lock = CLASSIFIER_MUTEX.lock();
    let previous = fatal::install_classifier(classifier);
    ClassifierGuard {
        previous: Some(previous),
        _lock: lock,
    }
}

/// Holds exclusive access to the current classifier without changing it.
pub fn lock() -> ClassifierGuard {
    ClassifierGuard {
        previous: None,
        _lock: CLASSIFIER_MUTEX.lock(),
    }
}
