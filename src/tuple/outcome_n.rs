//! Positional tuple forms of the [`Outcome`] combinators.
//!
//! Every method here keeps the unary semantics — same short-circuiting, same
//! error precedence — and differs only in handing the tuple's elements to the
//! callback positionally. The `_all` suffix marks the positional forms; the
//! scalar chain-starters [`and_then_append`](Outcome::and_then_append) and
//! [`and_then_concat`](Outcome::and_then_concat) live on the unary type.

use crate::tuple::concat::TupleConcat;
use crate::types::{Error, Outcome};

impl<T> Outcome<T> {
    /// Starts a combined-value chain: on success, runs the binder against
    /// the current value and pairs the two into a tuple.
    ///
    /// The source's error wins over the binder's; the binder is not invoked
    /// on a failed source.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let pair = Outcome::success("ok".to_string())
    ///     .and_then_append(|s| Outcome::success(s.len()));
    ///
    /// assert_eq!(pair, Outcome::success(("ok".to_string(), 2)));
    /// ```
    #[inline]
    pub fn and_then_append<U, F>(self, f: F) -> Outcome<(T, U)>
    where
        F: FnOnce(&T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(value) => match f(&value) {
                Outcome::Success(tail) => Outcome::Success((value, tail)),
                Outcome::Failure(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`and_then_append`](Outcome::and_then_append), but the binder
    /// returns a tuple outcome whose elements are spliced on flat.
    #[inline]
    pub fn and_then_concat<R, F>(self, f: F) -> Outcome<<(T,) as TupleConcat<R>>::Output>
    where
        (T,): TupleConcat<R>,
        F: FnOnce(&T) -> Outcome<R>,
    {
        match self {
            Outcome::Success(value) => match f(&value) {
                Outcome::Success(tail) => Outcome::Success((value,).concat(tail)),
                Outcome::Failure(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

macro_rules! outcome_tuple_impls {
    ($( ($($t:ident),+) );+ $(;)?) => {$(
        #[allow(non_snake_case)]
        impl<$($t),+> Outcome<($($t,)+)> {
            /// Positional [`map`](Outcome::map): the callback receives the
            /// tuple's elements as separate arguments.
            #[inline]
            pub fn map_all<R, F>(self, f: F) -> Outcome<R>
            where
                F: FnOnce($($t),+) -> R,
            {
                match self {
                    Outcome::Success(($($t,)+)) => Outcome::Success(f($($t),+)),
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }

            /// Positional [`and_then`](Outcome::and_then).
            #[inline]
            pub fn and_then_all<R, F>(self, f: F) -> Outcome<R>
            where
                F: FnOnce($($t),+) -> Outcome<R>,
            {
                match self {
                    Outcome::Success(($($t,)+)) => f($($t),+),
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }

            /// Positional [`ensure`](Outcome::ensure); the predicate borrows
            /// each element.
            #[inline]
            pub fn ensure_all<P>(self, predicate: P, error: Error) -> Self
            where
                P: FnOnce($(&$t),+) -> bool,
            {
                match self {
                    Outcome::Success(($($t,)+)) => {
                        if predicate($(&$t),+) {
                            Outcome::Success(($($t,)+))
                        } else {
                            Outcome::Failure(error)
                        }
                    }
                    failure => failure,
                }
            }

            /// Positional [`on_success`](Outcome::on_success) tap.
            #[inline]
            pub fn on_success_all<F>(self, f: F) -> Self
            where
                F: FnOnce($(&$t),+),
            {
                if let Outcome::Success(($($t,)+)) = &self {
                    f($($t),+);
                }
                self
            }

            /// Tuple growth with a tuple-valued binder: on success of both
            /// sides, the binder's elements are concatenated flat onto the
            /// current tuple, preserving left-to-right order.
            #[inline]
            pub fn and_then_concat_all<R, F>(
                self,
                f: F,
            ) -> Outcome<<($($t,)+) as TupleConcat<R>>::Output>
            where
                ($($t,)+): TupleConcat<R>,
                F: FnOnce($(&$t),+) -> Outcome<R>,
            {
                match self {
                    Outcome::Success(($($t,)+)) => match f($(&$t),+) {
                        Outcome::Success(tail) => {
                            Outcome::Success(($($t,)+).concat(tail))
                        }
                        Outcome::Failure(error) => Outcome::Failure(error),
                    },
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }
        }
    )+};
}

outcome_tuple_impls! {
    (T1, T2);
    (T1, T2, T3);
    (T1, T2, T3, T4);
    (T1, T2, T3, T4, T5);
    (T1, T2, T3, T4, T5, T6);
    (T1, T2, T3, T4, T5, T6, T7);
    (T1, T2, T3, T4, T5, T6, T7, T8)
}

macro_rules! outcome_tuple_append_impls {
    ($( ($($t:ident),+) );+ $(;)?) => {$(
        #[allow(non_snake_case)]
        impl<$($t),+> Outcome<($($t,)+)> {
            /// Grows the tuple by one element: on success, runs the binder
            /// against the current elements and appends its value.
            ///
            /// The source's error wins over the binder's; the binder is not
            /// invoked on a failed source.
            #[inline]
            pub fn and_then_append_all<U, F>(self, f: F) -> Outcome<($($t,)+ U)>
            where
                F: FnOnce($(&$t),+) -> Outcome<U>,
            {
                match self {
                    Outcome::Success(($($t,)+)) => match f($(&$t),+) {
                        Outcome::Success(tail) => Outcome::Success(($($t,)+ tail)),
                        Outcome::Failure(error) => Outcome::Failure(error),
                    },
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }
        }
    )+};
}

outcome_tuple_append_impls! {
    (T1, T2);
    (T1, T2, T3);
    (T1, T2, T3, T4);
    (T1, T2, T3, T4, T5);
    (T1, T2, T3, T4, T5, T6);
    (T1, T2, T3, T4, T5, T6, T7)
}
