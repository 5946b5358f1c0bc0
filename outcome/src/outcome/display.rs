//! Text form of an outcome.

use std::fmt;

use super::Outcome;

/// Renders `Outcome::success(value)` or `Outcome::failure(Type(message))`.
///
/// The message and its parentheses are omitted when the cause renders as an
/// empty string.
///
/// ```
/// use outcome::{Outcome, Panicked};
///
/// assert_eq!(Outcome::success(3).to_string(), "Outcome::success(3)");
/// let failed: Outcome<u8> = Outcome::failure(Panicked::new("boom"));
/// assert_eq!(failed.to_string(), "Outcome::failure(Panicked(boom))");
/// ```
impl<T> fmt::Display for Outcome<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Outcome::success({value})"),
            Self::Failure(cause) => {
                let message = cause.message();
                if message.is_empty() {
                    write!(f, "Outcome::failure({})", cause.type_name())
                } else {
                    write!(f, "Outcome::failure({}({message}))", cause.type_name())
                }
            }
        }
    }
}
