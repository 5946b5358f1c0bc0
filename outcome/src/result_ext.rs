//! Extensions bridging standard results into outcomes.
//!
//! - Use [`ResultExt::into_outcome`] to adopt a `Result<T, E>` whose error
//!   converts into a [`Cause`].
//! - Use [`ResultExt::non_fatal_or_throw`] to keep a standard `Result` while
//!   still re-raising fatal errors, without building an [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome::{Outcome, ResultExt};
//!
//! let port: Outcome<u16> = "8080".parse::<u16>().into_outcome();
//! assert_eq!(port.get_or_none(), Some(8080));
//!
//! let checked = "x".parse::<u16>().non_fatal_or_throw();
//! assert!(checked.is_err());
//! ```

use crate::{Cause, Outcome, fatal};

/// Extension methods for `Result<T, E>` with `E: Into<Cause>`.
pub trait ResultExt<T> {
    /// Convert into an [`Outcome`], applying the fatal check to the error.
    ///
    /// # Panics
    ///
    /// Re-raises the error when it is fatal.
    fn into_outcome(self) -> Outcome<T>;

    /// Convert the error into a [`Cause`], re-raising it when fatal.
    ///
    /// # Errors
    ///
    /// Returns the non-fatal [`Cause`] when `self` is `Err`.
    ///
    /// # Panics
    ///
    /// Re-raises the error when it is fatal.
    fn non_fatal_or_throw(self) -> Result<T, Cause>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    #[track_caller]
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from_result(self.non_fatal_or_throw())
    }

    #[track_caller]
    fn non_fatal_or_throw(self) -> Result<T, Cause> {
        self.map_err(|error| fatal::non_fatal_or_throw(error.into()))
    }
}
