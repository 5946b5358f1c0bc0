//! A success-or-failure wrapper that never captures fatal errors.
//!
//! [`Outcome<T>`] holds either a success value or the [`Cause`] of a failure.
//! Combinators such as [`Outcome::map`], [`Outcome::transform`] and
//! [`Outcome::fold`] compose fallible steps without unwinding, while the
//! [`catching`] family turns a block's `Err` return or panic into a failure.
//!
//! Causes the active [`FatalClassifier`] flags, cooperative cancellation
//! ([`Cancelled`]) among them, are never captured: they are re-raised at the
//! point of capture. See the [`fatal`] module to install a different
//! classifier.
//!
//! ```
//! use outcome::{Outcome, catching};
//!
//! let total = catching(|| "40".parse::<u32>())
//!     .map(|n| n + 2)
//!     .get_or_else(|_| 0);
//! assert_eq!(total, 42);
//!
//! let failed: Outcome<u32> = catching(|| "forty".parse::<u32>());
//! assert!(failed.is_failure());
//! ```

mod capture;
mod cause;
pub mod fatal;
mod outcome;
mod result_ext;

pub use capture::{
    catching, catching_result, catching_unwind, catching_with, wrap_as, wrap_as_result,
    wrap_as_simple,
};
pub use cause::{Cause, Chain, Panicked};
pub use fatal::{Cancelled, DefaultClassifier, FatalClassifier};
pub use outcome::Outcome;
pub use result_ext::ResultExt;
