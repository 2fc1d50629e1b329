//! Tuple concatenation plumbing for the growth operators.

/// Concatenates two tuples into one flat tuple, left-to-right.
///
/// Implemented for every pair of shapes whose combined arity stays within
/// the crate-wide ceiling of 8. This is what lets
/// [`and_then_concat`](crate::Outcome::and_then_concat) splice a binder's
/// tuple outcome onto the current one without nesting.
pub trait TupleConcat<Rhs> {
    /// The flat concatenation of `Self` and `Rhs`.
    type Output;

    /// Concatenates, preserving element order: `self` first, `rhs` after.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

macro_rules! tuple_concat_impls {
    ($( ($($t:ident),+) + ($($u:ident),+) );+ $(;)?) => {$(
        #[allow(non_snake_case)]
        impl<$($t,)+ $($u,)+> TupleConcat<($($u,)+)> for ($($t,)+) {
            type Output = ($($t,)+ $($u,)+);

            #[inline]
            fn concat(self, rhs: ($($u,)+)) -> Self::Output {
                let ($($t,)+) = self;
                let ($($u,)+) = rhs;
                ($($t,)+ $($u,)+)
            }
        }
    )+};
}

tuple_concat_impls! {
    (T1) + (U1);
    (T1) + (U1, U2);
    (T1) + (U1, U2, U3);
    (T1) + (U1, U2, U3, U4);
    (T1) + (U1, U2, U3, U4, U5);
    (T1) + (U1, U2, U3, U4, U5, U6);
    (T1) + (U1, U2, U3, U4, U5, U6, U7);
    (T1, T2) + (U1);
    (T1, T2) + (U1, U2);
    (T1, T2) + (U1, U2, U3);
    (T1, T2) + (U1, U2, U3, U4);
    (T1, T2) + (U1, U2, U3, U4, U5);
    (T1, T2) + (U1, U2, U3, U4, U5, U6);
    (T1, T2, T3) + (U1);
    (T1, T2, T3) + (U1, U2);
    (T1, T2, T3) + (U1, U2, U3);
    (T1, T2, T3) + (U1, U2, U3, U4);
    (T1, T2, T3) + (U1, U2, U3, U4, U5);
    (T1, T2, T3, T4) + (U1);
    (T1, T2, T3, T4) + (U1, U2);
    (T1, T2, T3, T4) + (U1, U2, U3);
    (T1, T2, T3, T4) + (U1, U2, U3, U4);
    (T1, T2, T3, T4, T5) + (U1);
    (T1, T2, T3, T4, T5) + (U1, U2);
    (T1, T2, T3, T4, T5) + (U1, U2, U3);
    (T1, T2, T3, T4, T5, T6) + (U1);
    (T1, T2, T3, T4, T5, T6) + (U1, U2);
    (T1, T2, T3, T4, T5, T6, T7) + (U1);
}
