use core::cell::Cell;
use outcome_rail::{Error, Maybe};

#[test]
fn map_applies_to_present_values() {
    // Functor law: present(x).map(f) == present(f(x)).
    assert_eq!(Maybe::present(21).map(|n| n * 2), Maybe::present(42));
}

#[test]
fn map_never_invokes_the_function_when_absent() {
    let calls = Cell::new(0);

    let mapped = Maybe::<i32>::absent().map(|n| {
        calls.set(calls.get() + 1);
        n * 2
    });

    assert!(mapped.is_absent());
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_chains_present_values() {
    fn half(n: i32) -> Maybe<i32> {
        if n % 2 == 0 {
            Maybe::present(n / 2)
        } else {
            Maybe::absent()
        }
    }

    assert_eq!(Maybe::present(8).and_then(half), Maybe::present(4));
    assert!(Maybe::present(7).and_then(half).is_absent());
}

#[test]
fn and_then_short_circuits_when_absent() {
    let calls = Cell::new(0);

    let chained = Maybe::<i32>::absent().and_then(|n| {
        calls.set(calls.get() + 1);
        Maybe::present(n)
    });

    assert!(chained.is_absent());
    assert_eq!(calls.get(), 0);
}

#[test]
fn filter_demotes_rejected_values() {
    assert_eq!(Maybe::present(4).filter(|n| *n > 0), Maybe::present(4));
    assert!(Maybe::present(-4).filter(|n| *n > 0).is_absent());
}

#[test]
fn filter_passes_absence_through_without_invoking_the_predicate() {
    let calls = Cell::new(0);

    let filtered = Maybe::<i32>::absent().filter(|_| {
        calls.set(calls.get() + 1);
        true
    });

    assert!(filtered.is_absent());
    assert_eq!(calls.get(), 0);
}

#[test]
fn fold_invokes_exactly_one_branch_exactly_once() {
    let present_calls = Cell::new(0);
    let absent_calls = Cell::new(0);

    let result = Maybe::present(5).fold(
        |n| {
            present_calls.set(present_calls.get() + 1);
            n * 10
        },
        || {
            absent_calls.set(absent_calls.get() + 1);
            0
        },
    );

    assert_eq!(result, 50);
    assert_eq!(present_calls.get(), 1);
    assert_eq!(absent_calls.get(), 0);

    let result = Maybe::<i32>::absent().fold(|n| n, || -1);
    assert_eq!(result, -1);
}

#[test]
fn taps_return_the_original_unchanged() {
    let seen = Cell::new(0);

    let tapped = Maybe::present(7)
        .on_present(|n| seen.set(*n))
        .on_absent(|| seen.set(-1));

    assert_eq!(tapped, Maybe::present(7));
    assert_eq!(seen.get(), 7);

    let absent_seen = Cell::new(0);
    let tapped = Maybe::<i32>::absent()
        .on_present(|n| absent_seen.set(*n))
        .on_absent(|| absent_seen.set(-1));

    assert!(tapped.is_absent());
    assert_eq!(absent_seen.get(), -1);
}

#[test]
fn or_prefers_the_present_side() {
    assert_eq!(Maybe::present(1).or(Maybe::present(2)), Maybe::present(1));
    assert_eq!(Maybe::absent().or(Maybe::present(2)), Maybe::present(2));
}

#[test]
fn or_else_is_lazy() {
    let calls = Cell::new(0);

    let kept = Maybe::present(1).or_else(|| {
        calls.set(calls.get() + 1);
        Maybe::present(2)
    });

    assert_eq!(kept, Maybe::present(1));
    assert_eq!(calls.get(), 0);

    let recovered = Maybe::<i32>::absent().or_else(|| {
        calls.set(calls.get() + 1);
        Maybe::present(2)
    });

    assert_eq!(recovered, Maybe::present(2));
    assert_eq!(calls.get(), 1);
}

#[test]
fn into_outcome_promotes_presence() {
    let outcome = Maybe::present(3).into_outcome(|| Error::new("unused"));
    assert_eq!(*outcome.value(), 3);
}

#[test]
fn into_outcome_invokes_the_factory_only_when_absent() {
    let calls = Cell::new(0);

    let _ = Maybe::present(3).into_outcome(|| {
        calls.set(calls.get() + 1);
        Error::new("unused")
    });
    assert_eq!(calls.get(), 0);

    let outcome = Maybe::<i32>::absent().into_outcome(|| {
        calls.set(calls.get() + 1);
        Error::not_found("no row")
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(outcome.error().message(), "no row");
}

#[test]
fn from_option_maps_both_states() {
    assert!(Maybe::<i32>::from_option(None).is_absent());

    let present = Maybe::from_option(Some(5));
    assert!(present.is_present());
    assert_eq!(*present.value(), 5);
}

#[test]
fn option_conversions_round_trip() {
    let maybe: Maybe<i32> = Some(9).into();
    assert_eq!(maybe.into_option(), Some(9));

    let absent: Maybe<i32> = None.into();
    assert_eq!(absent.into_option(), None);
}

#[test]
fn default_is_absent() {
    assert!(Maybe::<i32>::default().is_absent());
}

#[test]
#[should_panic(expected = "Maybe::value called on an Absent value")]
fn reading_an_absent_value_panics() {
    let _ = Maybe::<i32>::absent().value();
}

#[test]
#[should_panic(expected = "Maybe::into_value called on an Absent value")]
fn consuming_an_absent_value_panics() {
    let _ = Maybe::<i32>::absent().into_value();
}
