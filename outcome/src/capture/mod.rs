//! Running fallible blocks and capturing how they ended.
//!
//! A block fails by returning `Err` or by panicking. Both become a
//! [`Outcome::Failure`] unless the resulting [`Cause`] is fatal, in which case
//! it is re-raised. Panics are only observable when the binary unwinds; with
//! `panic = "abort"` only `Err` returns are captured.

mod unwind;

use std::{
    error::Error,
    panic::{self, AssertUnwindSafe},
};

use crate::{
    Cause, Outcome,
    fatal::{self, FatalClassifier},
};

/// Runs `block` once and captures its result.
///
/// `Ok` becomes a success. `Err` and non-fatal panics become a failure. A
/// panic carrying a [`Cause`] (see [`Outcome::get_or_throw`]) is recovered
/// as that same cause. A panic carrying a [`Cancelled`](crate::Cancelled) or
/// a boxed error is classified as that error; other panics become a
/// [`Panicked`](crate::Panicked) cause.
///
/// # Panics
///
/// Re-raises fatal causes, as judged by the active classifier.
///
/// # Examples
///
/// ```
/// use outcome::catching;
///
/// let parsed = catching(|| "12".parse::<u8>());
/// assert_eq!(parsed.get_or_none(), Some(12));
///
/// let failed = catching(|| "x".parse::<u8>());
/// assert_eq!(failed.cause().map(|c| c.type_name()), Some("ParseIntError"));
/// ```
#[track_caller]
pub fn catching<T, E, F>(block: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    let classifier = fatal::active_classifier();
    catching_with(classifier.as_ref(), block)
}

/// Like [`catching`], against an explicit classifier.
///
/// # Panics
///
/// Re-raises causes that `classifier` deems fatal.
#[track_caller]
pub fn catching_with<T, E, F>(classifier: &dyn FatalClassifier, block: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    match panic::catch_unwind(AssertUnwindSafe(block)) {
        Ok(Ok(value)) => Outcome::Success(value),
        Ok(Err(error)) => {
            Outcome::Failure(fatal::non_fatal_or_throw_with(classifier, error.into()))
        }
        Err(payload) => Outcome::Failure(unwind::admit(classifier, payload)),
    }
}

/// Captures a block whose only way to fail is panicking.
///
/// # Panics
///
/// Re-raises fatal panic causes.
///
/// # Examples
///
/// ```
/// use outcome::catching_unwind;
///
/// let values: Vec<u8> = Vec::new();
/// let missing = catching_unwind(|| values[3]);
/// assert!(missing.is_failure());
/// ```
#[track_caller]
pub fn catching_unwind<T, F>(block: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    catching(move || Ok::<T, Cause>(block()))
}

/// Like [`catching`], returning a standard [`Result`].
///
/// # Errors
///
/// Returns the captured non-fatal cause.
///
/// # Panics
///
/// Re-raises fatal causes.
#[track_caller]
pub fn catching_result<T, E, F>(block: F) -> Result<T, Cause>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    catching(block).into_result()
}

/// Like [`catching`], then normalizes a captured cause to `W`.
///
/// A cause that already is a `W` passes through unchanged; anything else is
/// wrapped with `make(message, cause)`, so causes are never wrapped twice.
///
/// # Panics
///
/// Re-raises fatal causes, including a fatal wrapper.
///
/// # Examples
///
/// ```
/// use outcome::{Cause, wrap_as};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("config: {message}")]
/// struct ConfigError {
///     message: String,
///     cause: Cause,
/// }
///
/// let loaded = wrap_as(
///     |message, cause| ConfigError { message, cause },
///     || "x".parse::<u16>(),
/// );
/// let cause = loaded.cause_or_none();
/// assert!(cause.is_some_and(|c| c.is::<ConfigError>()));
/// ```
#[track_caller]
pub fn wrap_as<W, T, E, M, F>(make: M, block: F) -> Outcome<T>
where
    W: Error + Send + Sync + 'static,
    M: FnOnce(String, Cause) -> W,
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    catching(block).wrap_failure_as(make)
}

/// Like [`wrap_as`] for wrappers built from the cause alone.
///
/// # Panics
///
/// Re-raises fatal causes, including a fatal wrapper.
#[track_caller]
pub fn wrap_as_simple<W, T, E, M, F>(make: M, block: F) -> Outcome<T>
where
    W: Error + Send + Sync + 'static,
    M: FnOnce(Cause) -> W,
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    catching(block).wrap_failure_as_simple(make)
}

/// Like [`wrap_as`], returning a standard [`Result`].
///
/// # Errors
///
/// Returns the captured non-fatal cause, normalized to `W`.
///
/// # Panics
///
/// Re-raises fatal causes, including a fatal wrapper.
#[track_caller]
pub fn wrap_as_result<W, T, E, M, F>(make: M, block: F) -> Result<T, Cause>
where
    W: Error + Send + Sync + 'static,
    M: FnOnce(String, Cause) -> W,
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    wrap_as(make, block).into_result()
}

#[cfg(test)]
mod tests;
