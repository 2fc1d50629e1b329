//! Presence/absence container with the shared combinator algebra.
//!
//! [`Maybe<T>`] mirrors the two-state shape of `Option<T>` while speaking the
//! same combinator vocabulary as [`Outcome`](crate::Outcome): probes, guarded
//! access, `map`/`and_then`/`filter`, the exhaustive [`fold`](Maybe::fold),
//! pass-through taps, and lazy recovery. Conversions to and from `Option`
//! are lossless in both directions.

use crate::types::outcome::Outcome;
use crate::types::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either present or absent.
///
/// There is no third state, and a nested `Maybe` is not special-cased: the
/// container stores whatever `T` it is given.
///
/// # Examples
///
/// ```
/// use outcome_rail::Maybe;
///
/// let answer = Maybe::present(42)
///     .filter(|n| *n > 0)
///     .map(|n| n * 2);
///
/// assert_eq!(answer, Maybe::present(84));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Maybe<T> {
    /// Wraps a value.
    #[inline]
    pub fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates the absent state.
    #[inline]
    pub fn absent() -> Self {
        Self::Absent
    }

    /// Converts from `Option`: `Some` becomes `Present`, `None` becomes
    /// `Absent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert!(Maybe::from_option(Some(5)).is_present());
    /// assert!(Maybe::<i32>::from_option(None).is_absent());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Converts into an `Option`.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns `true` if a value is present.
    #[must_use]
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[must_use]
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns a reference to the contained value.
    ///
    /// Reading the value of an absent `Maybe` is a programming error, not a
    /// modeled failure, so this fails loudly instead of returning a default.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("Maybe::value called on an Absent value"),
        }
    }

    /// Consumes the `Maybe`, returning the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("Maybe::into_value called on an Absent value"),
        }
    }

    /// Applies `f` to a present value; absence passes through and `f` is
    /// never invoked.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(f(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains a computation that may itself come up absent.
    ///
    /// Absence short-circuits without invoking `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// fn head(s: &str) -> Maybe<char> {
    ///     Maybe::from_option(s.chars().next())
    /// }
    ///
    /// assert_eq!(Maybe::present("rail").and_then(head), Maybe::present('r'));
    /// assert!(Maybe::present("").and_then(head).is_absent());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Demotes a present value to `Absent` when the predicate rejects it.
    ///
    /// Absence passes through with the predicate not invoked.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Exhaustive match: exactly one branch is invoked exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// let label = Maybe::present(3).fold(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(label, "got 3");
    /// ```
    #[inline]
    pub fn fold<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Runs `f` against a present value and returns `self` unchanged.
    #[inline]
    pub fn on_present<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Runs `f` when absent and returns `self` unchanged.
    #[inline]
    pub fn on_absent<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            f();
        }
        self
    }

    /// Returns `self` if present, otherwise the eagerly supplied fallback.
    #[inline]
    pub fn or(self, fallback: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => fallback,
        }
    }

    /// Returns `self` if present, otherwise lazily evaluates `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => f(),
        }
    }

    /// Promotes presence to success and absence to failure.
    ///
    /// The error factory is invoked only when the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Maybe};
    ///
    /// let outcome = Maybe::<i32>::absent().into_outcome(|| Error::not_found("no row"));
    /// assert!(outcome.is_failure());
    /// assert_eq!(outcome.error().message(), "no row");
    /// ```
    #[inline]
    pub fn into_outcome<F>(self, error_fn: F) -> Outcome<T>
    where
        F: FnOnce() -> Error,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error_fn()),
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}
