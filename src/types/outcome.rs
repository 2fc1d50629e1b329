//! Success/failure container and the fail-fast combinator chain.
//!
//! [`Outcome<T>`] is the railway: a chain of [`and_then`](Outcome::and_then)
//! steps runs on the success track and switches to the failure track at the
//! first error, skipping every later step. The complementary accumulation
//! policy lives in [`ErrorBuilder`](crate::ErrorBuilder) and the tuple
//! [`combine_all`](crate::CombineAll::combine_all) operation.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i32> {
//!     Outcome::from_result(input.trim().parse::<i32>().map_err(Error::from_display))
//! }
//!
//! let result = parse("  17")
//!     .ensure(|n| *n > 0, Error::validation("must be positive"))
//!     .map(|n| n * 100);
//!
//! assert_eq!(result, Outcome::success(1700));
//! ```

use crate::types::maybe::Maybe;
use crate::types::Error;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of an operation: a success carrying a value, or a failure
/// carrying an [`Error`].
///
/// Exactly one side is ever defined. The valueless form is `Outcome<()>`
/// (the default type parameter), constructed with [`Outcome::ok`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome};
///
/// let success: Outcome<i32> = Outcome::success(2);
/// let failure: Outcome<i32> = Outcome::failure(Error::new("boom"));
///
/// assert!(success.is_success());
/// assert!(failure.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T = ()> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with a domain error.
    Failure(Error),
}

impl Outcome<()> {
    /// Creates the valueless success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let done = Outcome::ok();
    /// assert!(done.is_success());
    /// ```
    #[inline]
    pub fn ok() -> Self {
        Self::Success(())
    }
}

impl<T> Outcome<T> {
    /// Wraps a value in a success.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps anything convertible to [`Error`] in a failure.
    #[inline]
    pub fn failure<E: Into<Error>>(error: E) -> Self {
        Self::Failure(error.into())
    }

    /// Converts a plain `Result` whose error converts into [`Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let parsed = Outcome::from_result("41".parse::<i32>().map_err(Error::from_display));
    /// assert_eq!(parsed, Outcome::success(41));
    /// ```
    #[inline]
    pub fn from_result<E: Into<Error>>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }

    /// Converts into a plain `Result`.
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns `true` if this is a success.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a reference to the success value.
    ///
    /// Reading the value of a failure is a programming error, distinct from
    /// a modeled domain failure, so this fails loudly at the violating access
    /// point instead of returning a default.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("Outcome::value called on a Failure: {error}")
            }
        }
    }

    /// Returns a reference to the failure error.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("Outcome::error called on a Success"),
        }
    }

    /// Consumes the outcome, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("Outcome::into_value called on a Failure: {error}")
            }
        }
    }

    /// Consumes the outcome, returning the failure error.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> Error {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("Outcome::into_error called on a Success"),
        }
    }

    /// Non-panicking extraction of the success value.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Non-panicking extraction of the failure error.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Transforms the success value; a failure propagates untouched and `f`
    /// is never invoked.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Short-circuit chain: a failure returns immediately without invoking
    /// `f`; a success hands its value to `f` and returns `f`'s outcome
    /// directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// fn reciprocal(n: i32) -> Outcome<i32> {
    ///     if n == 0 {
    ///         Outcome::failure(Error::new("division by zero"))
    ///     } else {
    ///         Outcome::success(100 / n)
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(4).and_then(reciprocal), Outcome::success(25));
    /// assert!(Outcome::success(0).and_then(reciprocal).is_failure());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error of a failure; a success passes through untouched.
    #[inline]
    pub fn map_err<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(f(error)),
        }
    }

    /// Demotes a success to the given failure when the predicate rejects the
    /// value. A failure passes through with the predicate not invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let checked = Outcome::success(5).ensure(|n| *n > 0, Error::validation("not positive"));
    /// assert_eq!(checked, Outcome::success(5));
    ///
    /// let rejected = Outcome::success(-5).ensure(|n| *n > 0, Error::validation("not positive"));
    /// assert!(rejected.is_failure());
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.ensure_with(predicate, move || error)
    }

    /// Like [`ensure`](Outcome::ensure), but builds the error lazily, only
    /// when the predicate rejects.
    #[inline]
    pub fn ensure_with<P, F>(self, predicate: P, error_fn: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> Error,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error_fn())
                }
            }
            failure => failure,
        }
    }

    /// Exhaustive match: exactly one branch is invoked exactly once.
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Runs `f` against the whole outcome and returns it unchanged.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }

    /// Runs `f` against the success value and returns `self` unchanged.
    #[inline]
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Runs `f` against the failure error and returns `self` unchanged.
    #[inline]
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Recovery: a failure hands its error to `f`, which may itself produce
    /// a success; a success returns unchanged and `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let recovered = Outcome::<i32>::failure(Error::new("cache miss"))
    ///     .or_else(|_| Outcome::success(0));
    ///
    /// assert_eq!(recovered, Outcome::success(0));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Drops the error, keeping only presence information.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Absent,
        }
    }
}

#[cfg(feature = "std")]
impl<T> Outcome<T> {
    /// Runs `f`, converting a panic into a failure via the default fault
    /// mapper.
    ///
    /// This is the only sanctioned boundary for absorbing foreign faults
    /// into the outcome algebra: no panic raised by `f` escapes past this
    /// call. Requires unwinding panics (`panic = "unwind"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::catch(|| -> i32 { panic!("wire fault") });
    ///
    /// assert!(outcome.is_failure());
    /// assert!(outcome.error().message().contains("wire fault"));
    /// ```
    pub fn catch<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::catch_with(f, fault_to_error)
    }

    /// Runs `f`, converting a panic into a failure via a caller-supplied
    /// fault mapper.
    pub fn catch_with<F, M>(f: F, fault_mapper: M) -> Self
    where
        F: FnOnce() -> T,
        M: FnOnce(Box<dyn core::any::Any + Send>) -> Error,
    {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(fault_mapper(payload)),
        }
    }

    /// Runs an outcome-returning `f`, additionally converting a panic into a
    /// failure via the default fault mapper.
    pub fn catch_flatten<F>(f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
            Ok(outcome) => outcome,
            Err(payload) => Self::Failure(fault_to_error(payload)),
        }
    }
}

/// Default fault mapper: extracts the conventional string payloads.
#[cfg(feature = "std")]
fn fault_to_error(payload: Box<dyn core::any::Any + Send>) -> Error {
    use alloc::format;
    use alloc::string::{String, ToString};

    let message: String = if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        String::from("unknown panic payload")
    };
    Error::new(format!("caught panic: {message}"))
}

impl<T> From<Error> for Outcome<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

impl<T, E: Into<Error>> From<Result<T, E>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

/// Fail-fast collection: stops at the first failure, never consuming the
/// rest of the iterator.
///
/// The accumulation counterpart is
/// [`collect_accumulating`](crate::convert::collect_accumulating).
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome};
///
/// let collected: Outcome<Vec<i32>> =
///     [Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(collected, Outcome::success(vec![1, 2]));
/// ```
impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        for outcome in iter {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) => return Outcome::Failure(error),
            }
        }
        Outcome::Success(values)
    }
}
