//! Ordered failure accumulation, the complement to fail-fast chaining.
//!
//! Where [`and_then`](crate::Outcome::and_then) stops at the first failure,
//! [`ErrorBuilder`] inspects every outcome it is handed and records each
//! failure in call order. Building yields nothing when no failure was seen,
//! the single error unwrapped when exactly one was, and one flat
//! [`Aggregate`](crate::ErrorKind::Aggregate) when two or more were.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, ErrorBuilder, Outcome};
//!
//! let mut builder = ErrorBuilder::new();
//! builder.append_on_failure(&Outcome::<i32>::failure(Error::new("first")));
//! builder.append_on_failure(&Outcome::success(7));
//! builder.append_on_failure(&Outcome::<i32>::failure(Error::new("second")));
//!
//! let error = builder.build().unwrap();
//! assert_eq!(error.causes().len(), 2);
//! assert_eq!(error.causes()[0].message(), "first");
//! ```

use crate::types::maybe::Maybe;
use crate::types::outcome::Outcome;
use crate::types::{Error, ErrorKind, ErrorVec};

/// Local, mutable accumulator of failures.
///
/// Not shared state: a builder lives on one call stack, collects errors from
/// independently evaluated outcomes, and is consumed by
/// [`build`](ErrorBuilder::build). Success values are never retained here;
/// callers collect those separately (see
/// [`absorb`](ErrorBuilder::absorb)).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorBuilder {
    errors: ErrorVec<Error>,
}

impl ErrorBuilder {
    /// Creates an empty builder.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self { errors: ErrorVec::new() }
    }

    /// Records an error.
    ///
    /// An aggregate argument contributes its flat cause list in place of
    /// itself, keeping the recorded list flat (the same rule as
    /// [`Error::aggregate`]).
    pub fn record(&mut self, error: Error) {
        if error.kind() == &ErrorKind::Aggregate {
            self.errors.extend(error.into_causes());
        } else {
            self.errors.push(error);
        }
    }

    /// Inspects an outcome by reference; a failure's error is cloned and
    /// recorded, a success is a no-op.
    #[inline]
    pub fn append_on_failure<T>(&mut self, outcome: &Outcome<T>) {
        if let Outcome::Failure(error) = outcome {
            self.record(error.clone());
        }
    }

    /// Consumes an outcome: a failure is recorded and `Absent` is returned,
    /// a success hands its value back untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ErrorBuilder, Maybe, Outcome};
    ///
    /// let mut builder = ErrorBuilder::new();
    /// let value = builder.absorb(Outcome::success(3));
    ///
    /// assert_eq!(value, Maybe::present(3));
    /// assert!(!builder.has_errors());
    /// ```
    #[inline]
    pub fn absorb<T>(&mut self, outcome: Outcome<T>) -> Maybe<T> {
        match outcome {
            Outcome::Success(value) => Maybe::Present(value),
            Outcome::Failure(error) => {
                self.record(error);
                Maybe::Absent
            }
        }
    }

    /// Returns `true` once at least one error has been recorded.
    #[must_use]
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no errors have been recorded.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the recorded errors in call order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Consumes the builder.
    ///
    /// Returns `None` when nothing was recorded. Exactly one recorded error
    /// is returned directly, never wrapped in a one-element aggregate. Two
    /// or more become a single [`Error::aggregate`] whose causes exactly
    /// match recording order.
    #[must_use]
    pub fn build(self) -> Option<Error> {
        match self.errors.len() {
            0 => None,
            1 => self.errors.into_iter().next(),
            _ => Some(Error::aggregate(self.errors)),
        }
    }

    /// Finishes into an outcome: the built error if any failure was
    /// recorded, otherwise a success carrying `value`.
    pub fn into_outcome<T>(self, value: T) -> Outcome<T> {
        match self.build() {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(value),
        }
    }
}
