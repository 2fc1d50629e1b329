//! Conversion helpers between the crate's value types and `std` ones.
//!
//! These adapters make it straightforward to adopt the outcome algebra
//! incrementally: wrap plain `Result`/`Option` values at the boundary and
//! unwrap them again when handing data to foreign APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Error;
//!
//! let outcome = result_to_outcome::<i32, Error>(Ok(42));
//! assert!(outcome.is_success());
//!
//! let maybe = option_to_maybe(Some("hit"));
//! assert!(maybe.is_present());
//! ```

use crate::types::{Error, ErrorBuilder, Maybe, Outcome};
use alloc::vec::Vec;

/// Converts a plain `Result` into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Error;
///
/// let failed = result_to_outcome::<(), _>(Err(Error::new("boom")));
/// assert!(failed.is_failure());
/// ```
#[inline]
pub fn result_to_outcome<T, E: Into<Error>>(result: Result<T, E>) -> Outcome<T> {
    Outcome::from_result(result)
}

/// Converts an [`Outcome`] into a plain `Result`.
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Error> {
    outcome.into_result()
}

/// Converts an `Option` into a [`Maybe`]: `Some` becomes `Present`, an
/// absent value becomes `Absent`.
#[inline]
pub fn option_to_maybe<T>(value: Option<T>) -> Maybe<T> {
    Maybe::from_option(value)
}

/// Converts a [`Maybe`] into an `Option`.
#[inline]
pub fn maybe_to_option<T>(maybe: Maybe<T>) -> Option<T> {
    maybe.into_option()
}

/// Promotes a [`Maybe`] into an [`Outcome`], invoking the error factory
/// only when the value is absent.
#[inline]
pub fn maybe_to_outcome<T, F>(maybe: Maybe<T>, error_fn: F) -> Outcome<T>
where
    F: FnOnce() -> Error,
{
    maybe.into_outcome(error_fn)
}

/// Demotes an [`Outcome`] into a [`Maybe`], dropping the error.
#[inline]
pub fn outcome_to_maybe<T>(outcome: Outcome<T>) -> Maybe<T> {
    outcome.into_maybe()
}

/// Collects homogeneous outcomes under the accumulation policy.
///
/// Every element is inspected; all failures are recorded in iteration order
/// and reported together (a single failure comes back unwrapped, two or
/// more as one flat aggregate). The fail-fast counterpart is the
/// [`FromIterator`] impl on `Outcome<Vec<T>>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_accumulating;
/// use outcome_rail::{Error, ErrorKind, Outcome};
///
/// let collected = collect_accumulating([
///     Outcome::<i32>::failure(Error::new("a")),
///     Outcome::success(2),
///     Outcome::<i32>::failure(Error::new("c")),
/// ]);
///
/// let error = collected.into_error();
/// assert_eq!(error.kind(), &ErrorKind::Aggregate);
/// assert_eq!(error.causes().len(), 2);
/// ```
pub fn collect_accumulating<T, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut builder = ErrorBuilder::new();
    let mut values = Vec::new();
    for outcome in outcomes {
        if let Maybe::Present(value) = builder.absorb(outcome) {
            values.push(value);
        }
    }
    builder.into_outcome(values)
}
