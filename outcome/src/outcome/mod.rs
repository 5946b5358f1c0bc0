//! The [`Outcome`] type, its constructors and queries.

mod combinators;
mod conversions;
mod display;

use crate::{Cause, fatal};

/// Either a success value or the [`Cause`] of a failure.
///
/// The variant tag alone decides success: `Outcome<Option<T>>` holding
/// `Success(None)` is a success. Every combinator consumes the outcome and
/// returns a new one.
///
/// Prefer [`Outcome::failure`] over building [`Outcome::Failure`] by hand;
/// the constructor refuses to capture fatal causes.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let parsed = Outcome::from_result("1234".parse::<u32>());
/// assert_eq!(parsed.map(|n| n * 2).get_or_throw(), 2468);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome may hold a failure that should be handled"]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with a non-fatal cause.
    Failure(Cause),
}

impl<T> Outcome<T> {
    /// Wraps a success value as-is.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure cause.
    ///
    /// # Panics
    ///
    /// Re-raises `cause` instead of wrapping it when the active classifier
    /// deems it fatal.
    #[track_caller]
    pub fn failure(cause: impl Into<Cause>) -> Self {
        Self::Failure(fatal::non_fatal_or_throw(cause.into()))
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure cause, if any.
    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Returns the success value, discarding a failure.
    #[must_use]
    pub fn get_or_none(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure cause, discarding a success.
    #[must_use]
    pub fn cause_or_none(self) -> Option<Cause> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Returns the success value or unwinds with the failure's cause.
    ///
    /// The panic payload is the [`Cause`] itself, so a catching helper further
    /// up the stack recovers the identical cause. The default panic hook
    /// cannot render a `Cause` payload and reports `Box<dyn Any>`; the cause's
    /// message is logged at `debug` level instead.
    ///
    /// # Panics
    ///
    /// Panics with the contained [`Cause`] when `self` is a failure.
    #[track_caller]
    pub fn get_or_throw(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => fatal::raise(cause),
        }
    }

    /// Returns the success value, or the result of `recover` on failure.
    pub fn get_or_else<F>(self, recover: F) -> T
    where
        F: FnOnce(Cause) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => recover(cause),
        }
    }

    /// Borrowing view of this outcome; a failure's cause handle is cloned.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(cause) => Outcome::Failure(cause.clone()),
        }
    }
}
