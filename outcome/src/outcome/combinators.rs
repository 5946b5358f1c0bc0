//! Combinators deriving new outcomes from existing ones.
//!
//! The `_catching` variants capture errors and non-fatal panics raised by
//! their callback. Every other combinator lets a panic from its callback
//! propagate untouched.

use std::error::Error;

use super::Outcome;
use crate::{Cause, capture};

impl<T> Outcome<T> {
    /// Applies `transform` to a success value.
    ///
    /// A failure is returned with the same cause. Panics raised by
    /// `transform` propagate.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let text = Outcome::success(1234).map(|n| n.to_string());
    /// assert_eq!(text.get_or_throw(), "1234");
    /// ```
    pub fn map<R, F>(self, transform: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Like [`Outcome::map`] for a fallible `transform`.
    ///
    /// An `Err` returned by `transform`, or a non-fatal panic raised by it,
    /// becomes the new failure.
    ///
    /// # Panics
    ///
    /// Re-raises fatal causes produced by `transform`.
    #[track_caller]
    pub fn map_catching<R, E, F>(self, transform: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Result<R, E>,
        E: Into<Cause>,
    {
        match self {
            Self::Success(value) => capture::catching(move || transform(value)),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Chains an outcome-returning step onto a success.
    ///
    /// The step's outcome is returned directly; a failure passes through.
    #[doc(alias = "and_then")]
    #[doc(alias = "flat_map")]
    pub fn transform<R, F>(self, bind: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Outcome<R>,
    {
        match self {
            Self::Success(value) => bind(value),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Replaces a failure's cause with the result of `transform`.
    ///
    /// # Panics
    ///
    /// Re-raises the new cause when it is fatal.
    #[track_caller]
    pub fn map_failure<C, F>(self, transform: F) -> Self
    where
        F: FnOnce(Cause) -> C,
        C: Into<Cause>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => Self::failure(transform(cause)),
        }
    }

    /// Turns a failure into a success with the value returned by `recover`.
    ///
    /// Panics raised by `recover` propagate.
    pub fn recover<F>(self, recover: F) -> Self
    where
        F: FnOnce(Cause) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => Self::Success(recover(cause)),
        }
    }

    /// Like [`Outcome::recover`] for a fallible `recover`.
    ///
    /// An `Err` returned by `recover`, or a non-fatal panic raised by it,
    /// becomes the new failure.
    ///
    /// # Panics
    ///
    /// Re-raises fatal causes produced by `recover`.
    #[track_caller]
    pub fn recover_catching<E, F>(self, recover: F) -> Self
    where
        F: FnOnce(Cause) -> Result<T, E>,
        E: Into<Cause>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => capture::catching(move || recover(cause)),
        }
    }

    /// Collapses the outcome by calling exactly one of the two callbacks.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let tripled = Outcome::success(3).fold(|n| n * 3, |_| 0);
    /// assert_eq!(tripled, 9);
    /// ```
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Cause) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    /// Runs `block` on a success value and returns `self` unchanged.
    #[doc(alias = "inspect")]
    pub fn on_success<F>(self, block: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            block(value);
        }
        self
    }

    /// Runs `block` on a failure's cause and returns `self` unchanged.
    #[doc(alias = "inspect_err")]
    pub fn on_failure<F>(self, block: F) -> Self
    where
        F: FnOnce(&Cause),
    {
        if let Self::Failure(cause) = &self {
            block(cause);
        }
        self
    }

    /// Normalizes a failure's cause to the error type `W`.
    ///
    /// A cause that already is a `W` is kept as it is. Any other cause is
    /// wrapped with `make(message, cause)`.
    ///
    /// # Panics
    ///
    /// Re-raises the wrapper when it is fatal.
    #[track_caller]
    pub fn wrap_failure_as<W, M>(self, make: M) -> Self
    where
        W: Error + Send + Sync + 'static,
        M: FnOnce(String, Cause) -> W,
    {
        self.wrap_failure_as_simple(|cause: Cause| make(cause.message(), cause))
    }

    /// Like [`Outcome::wrap_failure_as`] for wrappers built from the cause
    /// alone.
    ///
    /// # Panics
    ///
    /// Re-raises the wrapper when it is fatal.
    #[track_caller]
    pub fn wrap_failure_as_simple<W, M>(self, make: M) -> Self
    where
        W: Error + Send + Sync + 'static,
        M: FnOnce(Cause) -> W,
    {
        match self {
            Self::Failure(cause) if !cause.is::<W>() => Self::failure(make(cause)),
            unchanged => unchanged,
        }
    }
}
