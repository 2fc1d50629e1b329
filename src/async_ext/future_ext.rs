//! Extension traits for futures resolving to [`Outcome`] or [`Maybe`].
//!
//! Mirrors the synchronous combinators one-to-one: each method awaits the
//! inner future and applies the identical sync transform via
//! [`ThenSync`]. Any cancellation must be handled by the wrapped operation
//! before it yields its value.

use core::future::Future;

use super::then_sync::ThenSync;
use crate::types::{Error, Maybe, Outcome};

/// Async counterparts of the [`Outcome`] combinators.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude_async::*;
/// use outcome_rail::{Error, Outcome};
///
/// async fn fetch_count() -> Outcome<i32> {
///     Outcome::success(3)
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let doubled = fetch_count()
///     .map_success(|n| n * 2)
///     .ensure(|n| *n > 0, Error::validation("not positive"))
///     .await;
///
/// assert_eq!(doubled, Outcome::success(6));
/// # }
/// ```
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Async [`Outcome::map`].
    fn map_success<U, F>(self, f: F) -> ThenSync<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        ThenSync::new(self, move |outcome| outcome.map(f))
    }

    /// Async [`Outcome::map_err`].
    fn map_failure<F>(self, f: F) -> ThenSync<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(Error) -> Error,
    {
        ThenSync::new(self, move |outcome| outcome.map_err(f))
    }

    /// Async [`Outcome::and_then`] with a synchronous binder.
    fn and_then_sync<U, F>(self, f: F) -> ThenSync<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        ThenSync::new(self, move |outcome| outcome.and_then(f))
    }

    /// Async [`Outcome::ensure`].
    fn ensure<P>(self, predicate: P, error: Error) -> ThenSync<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        ThenSync::new(self, move |outcome| outcome.ensure(predicate, error))
    }

    /// Async [`Outcome::on_success`] tap.
    fn on_success<F>(self, f: F) -> ThenSync<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(&T),
    {
        ThenSync::new(self, move |outcome| outcome.on_success(f))
    }

    /// Async [`Outcome::on_failure`] tap.
    fn on_failure<F>(self, f: F) -> ThenSync<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(&Error),
    {
        ThenSync::new(self, move |outcome| outcome.on_failure(f))
    }

    /// Async [`Outcome::or_else`] with a synchronous recovery.
    fn or_else_sync<F>(self, f: F) -> ThenSync<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        ThenSync::new(self, move |outcome| outcome.or_else(f))
    }
}

impl<Fut, T> FutureOutcomeExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

/// Async counterparts of the [`Maybe`] combinators.
pub trait FutureMaybeExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Async [`Maybe::map`].
    fn map_present<U, F>(self, f: F) -> ThenSync<Self, impl FnOnce(Maybe<T>) -> Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        ThenSync::new(self, move |maybe| maybe.map(f))
    }

    /// Async [`Maybe::filter`].
    fn filter<P>(self, predicate: P) -> ThenSync<Self, impl FnOnce(Maybe<T>) -> Maybe<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        ThenSync::new(self, move |maybe| maybe.filter(predicate))
    }

    /// Async [`Maybe::into_outcome`].
    fn into_outcome<F>(self, error_fn: F) -> ThenSync<Self, impl FnOnce(Maybe<T>) -> Outcome<T>>
    where
        F: FnOnce() -> Error,
    {
        ThenSync::new(self, move |maybe| maybe.into_outcome(error_fn))
    }
}

impl<Fut, T> FutureMaybeExt<T> for Fut where Fut: Future<Output = Maybe<T>> {}
