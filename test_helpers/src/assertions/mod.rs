//! Assertions on the variant of an [`Outcome`].
//!
//! The panicking forms suit plain `#[test]` functions; the `try_` forms
//! return [`anyhow::Result`] for step functions that propagate with `?`.
//!
//! # Examples
//!
//! ```
//! use outcome::Outcome;
//! use outcome_test_helpers::OutcomeAssertions;
//!
//! let value = Outcome::success(3).should_succeed_with(&3);
//! assert_eq!(value, 3);
//! ```

use std::{error::Error, fmt::Debug};

use anyhow::{Result, anyhow};
use outcome::{Cause, Outcome};

/// Extension methods asserting on an [`Outcome`].
pub trait OutcomeAssertions<T> {
    /// Asserts success and returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the failure's cause chain when `self` is a failure.
    fn should_succeed(self) -> T;

    /// Asserts success with a value equal to `expected`.
    ///
    /// # Panics
    ///
    /// Panics when `self` is a failure or holds a different value.
    fn should_succeed_with(self, expected: &T) -> T
    where
        T: PartialEq;

    /// Asserts failure and returns the cause.
    ///
    /// # Panics
    ///
    /// Panics with the success value when `self` is a success.
    fn should_fail(self) -> Cause;

    /// Asserts failure with a cause of type `E` and returns the cause.
    ///
    /// # Panics
    ///
    /// Panics when `self` is a success or its cause is not an `E`.
    fn should_fail_with<E>(self) -> Cause
    where
        E: Error + 'static;

    /// Returns the value, or an error describing the unexpected failure.
    ///
    /// # Errors
    ///
    /// Returns an error when `self` is a failure.
    fn try_success(self) -> Result<T>;

    /// Returns the cause, or an error describing the unexpected success.
    ///
    /// # Errors
    ///
    /// Returns an error when `self` is a success.
    fn try_failure(self) -> Result<Cause>;
}

impl<T> OutcomeAssertions<T> for Outcome<T>
where
    T: Debug,
{
    #[track_caller]
    fn should_succeed(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(cause) => {
                panic!("Should have succeeded, but failed:\n{}", describe(&cause))
            }
        }
    }

    #[track_caller]
    fn should_succeed_with(self, expected: &T) -> T
    where
        T: PartialEq,
    {
        let value = self.should_succeed();
        assert_eq!(&value, expected, "succeeded with an unexpected value");
        value
    }

    #[track_caller]
    fn should_fail(self) -> Cause {
        match self {
            Outcome::Success(value) => panic!("Should have failed, but succeeded with {value:?}"),
            Outcome::Failure(cause) => cause,
        }
    }

    #[track_caller]
    fn should_fail_with<E>(self) -> Cause
    where
        E: Error + 'static,
    {
        let cause = self.should_fail();
        assert!(
            cause.is::<E>(),
            "expected a {} cause, got:\n{}",
            std::any::type_name::<E>(),
            describe(&cause)
        );
        cause
    }

    fn try_success(self) -> Result<T> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(cause) => Err(anyhow!(
                "expected success, got failure:\n{}",
                describe(&cause)
            )),
        }
    }

    fn try_failure(self) -> Result<Cause> {
        match self {
            Outcome::Success(value) => Err(anyhow!("expected failure, got success with {value:?}")),
            Outcome::Failure(cause) => Ok(cause),
        }
    }
}

/// Renders a cause and its nested sources, one per line.
#[must_use]
pub fn describe(cause: &Cause) -> String {
    let mut lines = vec![format!("{}: {cause}", cause.type_name())];
    lines.extend(cause.chain().skip(1).map(|source| format!("  caused by: {source}")));
    lines.join("\n")
}
