//! Lossless conversion to and from [`std::result::Result`].

use super::Outcome;
use crate::Cause;

impl<T> Outcome<T> {
    /// Adopts a standard result as-is.
    ///
    /// The mapping is total: no fatal check is applied, so
    /// `Outcome::from_result(r).into_result()` gives back `r` for every `r`.
    /// Use [`ResultExt::into_outcome`](crate::ResultExt::into_outcome) to
    /// re-raise fatal errors instead.
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<Cause>,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }

    /// Converts into a standard result, so `?` can propagate the cause.
    ///
    /// # Errors
    ///
    /// Returns the failure's [`Cause`] as the `Err` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Cause, Outcome};
    ///
    /// fn doubled(input: &str) -> Result<u32, Cause> {
    ///     let n = Outcome::from_result(input.parse::<u32>()).into_result()?;
    ///     Ok(n * 2)
    /// }
    ///
    /// assert_eq!(doubled("21").ok(), Some(42));
    /// assert!(doubled("x").is_err());
    /// ```
    pub fn into_result(self) -> Result<T, Cause> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Cause> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
