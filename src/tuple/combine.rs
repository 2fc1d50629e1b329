//! Accumulating combination of independently evaluated outcomes.

use crate::types::{ErrorBuilder, Outcome};

/// Combines a tuple of outcomes into one outcome of a value tuple,
/// accumulating every failure.
///
/// This is the accumulation counterpart to a chained
/// [`and_then`](Outcome::and_then): every element has already been evaluated
/// by the time it reaches the tuple, none is skipped, and all failures are
/// collected through an [`ErrorBuilder`] in declared order. A single failure
/// comes back unwrapped; two or more come back as one flat aggregate.
///
/// # Examples
///
/// ```
/// use outcome_rail::{CombineAll, Error, ErrorKind, Outcome};
///
/// let combined = (
///     Outcome::<i32>::failure(Error::validation("bad name")),
///     Outcome::success(7),
///     Outcome::<bool>::failure(Error::validation("bad age")),
/// )
///     .combine_all();
///
/// let error = combined.into_error();
/// assert_eq!(error.kind(), &ErrorKind::Aggregate);
/// assert_eq!(error.causes().len(), 2);
/// assert_eq!(error.causes()[0].message(), "bad name");
/// assert_eq!(error.causes()[1].message(), "bad age");
/// ```
pub trait CombineAll {
    /// The tuple of success values, in declared order.
    type Values;

    /// Evaluates every element, accumulating failures.
    fn combine_all(self) -> Outcome<Self::Values>;
}

macro_rules! combine_all_impls {
    ($( ($($t:ident),+) );+ $(;)?) => {$(
        #[allow(non_snake_case)]
        impl<$($t),+> CombineAll for ($(Outcome<$t>,)+) {
            type Values = ($($t,)+);

            fn combine_all(self) -> Outcome<Self::Values> {
                let ($($t,)+) = self;
                let mut builder = ErrorBuilder::new();
                $(let $t = builder.absorb($t);)+
                match builder.build() {
                    Some(error) => Outcome::Failure(error),
                    None => Outcome::Success(($($t.into_value(),)+)),
                }
            }
        }
    )+};
}

combine_all_impls! {
    (T1, T2);
    (T1, T2, T3);
    (T1, T2, T3, T4);
    (T1, T2, T3, T4, T5);
    (T1, T2, T3, T4, T5, T6);
    (T1, T2, T3, T4, T5, T6, T7);
    (T1, T2, T3, T4, T5, T6, T7, T8);
}
