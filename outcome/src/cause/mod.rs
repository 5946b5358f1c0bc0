//! Shared error handle carried by failed outcomes.

mod chain;
mod panicked;

pub use chain::Chain;
pub use panicked::Panicked;

use std::{error::Error, fmt, ops::Deref, sync::Arc};

/// Type-erased error carried by [`Outcome::Failure`](crate::Outcome::Failure).
///
/// A `Cause` is a reference-counted handle around any
/// `Error + Send + Sync + 'static`. Cloning is cheap and the clone refers to
/// the same error, so equality is identity: a cause equals itself and its
/// clones, never a structurally similar error built elsewhere.
///
/// `Cause` does not implement [`Error`] itself. It dereferences to the
/// wrapped error, and every `Error + Send + Sync + 'static` converts into it.
///
/// # Examples
///
/// ```
/// use outcome::Cause;
///
/// let cause = Cause::from("42x".parse::<u8>().unwrap_err());
/// assert_eq!(cause.type_name(), "ParseIntError");
/// assert!(cause.is::<std::num::ParseIntError>());
/// assert_eq!(cause, cause.clone());
/// ```
#[derive(Clone)]
pub struct Cause {
    inner: Arc<dyn Error + Send + Sync + 'static>,
    type_name: &'static str,
}

impl Cause {
    /// Wraps `error` in a new shared cause.
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
            type_name: short_type_name(std::any::type_name::<E>()),
        }
    }

    /// Adopts an already boxed error.
    ///
    /// The concrete type is no longer known, so [`Cause::type_name`] reports
    /// `"Error"`.
    #[must_use]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::from(error),
            type_name: ERASED_TYPE_NAME,
        }
    }

    /// Adopts an error that is already shared, keeping its allocation.
    #[must_use]
    pub fn from_shared(error: Arc<dyn Error + Send + Sync + 'static>) -> Self {
        Self {
            inner: error,
            type_name: ERASED_TYPE_NAME,
        }
    }

    /// Rendered message of the wrapped error.
    #[must_use]
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Unqualified name of the error type this cause was built from.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` when the wrapped error is an `E`.
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.inner.is::<E>()
    }

    /// Borrows the wrapped error as an `E`, if it is one.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Borrows the wrapped error as a trait object.
    #[must_use]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Iterates over this cause followed by every nested source.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Cause;
    ///
    /// let io = std::io::Error::other("disk on fire");
    /// let cause = Cause::new(io);
    /// assert_eq!(cause.chain().count(), 1);
    /// ```
    #[must_use = "iterators should be consumed to inspect the chain"]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self.as_error())
    }

    /// Returns `true` when both handles refer to the same error.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

const ERASED_TYPE_NAME: &str = "Error";

/// Strips the module path and generic arguments from a type name.
fn short_type_name(full: &'static str) -> &'static str {
    let head = full.split_once('<').map_or(full, |(head, _)| head);
    head.rsplit_once("::").map_or(head, |(_, name)| name)
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl Deref for Cause {
    type Target = dyn Error + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        self.as_error()
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Cause {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for Cause {}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("type", &self.type_name)
            .field("error", &self.inner)
            .finish()
    }
}

/// Error view of a [`Cause`] once it leaves the library as a boxed error.
struct Exported(Cause);

impl fmt::Debug for Exported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Exported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for Exported {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl From<Cause> for Box<dyn Error + Send + Sync + 'static> {
    fn from(cause: Cause) -> Self {
        Box::new(Exported(cause))
    }
}
