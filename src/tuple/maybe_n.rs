//! Positional tuple forms of the [`Maybe`] combinators.

use crate::types::Maybe;

macro_rules! maybe_tuple_impls {
    ($( ($($t:ident),+) );+ $(;)?) => {$(
        #[allow(non_snake_case)]
        impl<$($t),+> Maybe<($($t,)+)> {
            /// Positional [`map`](Maybe::map): the callback receives the
            /// tuple's elements as separate arguments.
            #[inline]
            pub fn map_all<R, F>(self, f: F) -> Maybe<R>
            where
                F: FnOnce($($t),+) -> R,
            {
                match self {
                    Maybe::Present(($($t,)+)) => Maybe::Present(f($($t),+)),
                    Maybe::Absent => Maybe::Absent,
                }
            }

            /// Positional [`and_then`](Maybe::and_then).
            #[inline]
            pub fn and_then_all<R, F>(self, f: F) -> Maybe<R>
            where
                F: FnOnce($($t),+) -> Maybe<R>,
            {
                match self {
                    Maybe::Present(($($t,)+)) => f($($t),+),
                    Maybe::Absent => Maybe::Absent,
                }
            }

            /// Positional [`filter`](Maybe::filter); the predicate borrows
            /// each element.
            #[inline]
            pub fn filter_all<P>(self, predicate: P) -> Self
            where
                P: FnOnce($(&$t),+) -> bool,
            {
                match self {
                    Maybe::Present(($($t,)+)) => {
                        if predicate($(&$t),+) {
                            Maybe::Present(($($t,)+))
                        } else {
                            Maybe::Absent
                        }
                    }
                    Maybe::Absent => Maybe::Absent,
                }
            }

            /// Positional [`on_present`](Maybe::on_present) tap.
            #[inline]
            pub fn on_present_all<F>(self, f: F) -> Self
            where
                F: FnOnce($(&$t),+),
            {
                if let Maybe::Present(($($t,)+)) = &self {
                    f($($t),+);
                }
                self
            }
        }
    )+};
}

maybe_tuple_impls! {
    (T1, T2);
    (T1, T2, T3);
    (T1, T2, T3, T4);
    (T1, T2, T3, T4, T5);
    (T1, T2, T3, T4, T5, T6);
    (T1, T2, T3, T4, T5, T6, T7);
    (T1, T2, T3, T4, T5, T6, T7, T8)
}
