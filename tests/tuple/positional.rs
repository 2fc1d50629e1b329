use core::cell::Cell;
use outcome_rail::{Error, Maybe, Outcome};

#[test]
fn map_all_spreads_the_tuple_into_arguments() {
    let merged = Outcome::success((2, 3, 4)).map_all(|a, b, c| a * b * c);
    assert_eq!(merged, Outcome::success(24));
}

#[test]
fn map_all_propagates_failure_untouched() {
    let calls = Cell::new(0);

    let merged = Outcome::<(i32, i32)>::failure(Error::new("down")).map_all(|a, b| {
        calls.set(calls.get() + 1);
        a + b
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(merged.error().message(), "down");
}

#[test]
fn and_then_all_chains_with_positional_arguments() {
    let divided = Outcome::success((10, 2)).and_then_all(|a, b| {
        if b == 0 {
            Outcome::failure(Error::new("division by zero"))
        } else {
            Outcome::success(a / b)
        }
    });

    assert_eq!(divided, Outcome::success(5));
}

#[test]
fn ensure_all_checks_the_elements_together() {
    let checked = Outcome::success((1, 2)).ensure_all(|a, b| a < b, Error::validation("not sorted"));
    assert_eq!(checked, Outcome::success((1, 2)));

    let rejected =
        Outcome::success((2, 1)).ensure_all(|a, b| a < b, Error::validation("not sorted"));
    assert_eq!(rejected.into_error().message(), "not sorted");
}

#[test]
fn ensure_all_skips_the_predicate_on_failure() {
    let calls = Cell::new(0);

    let outcome = Outcome::<(i32, i32)>::failure(Error::new("prior")).ensure_all(
        |_, _| {
            calls.set(calls.get() + 1);
            true
        },
        Error::validation("unused"),
    );

    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.error().message(), "prior");
}

#[test]
fn on_success_all_taps_each_element() {
    let sum = Cell::new(0);

    let outcome = Outcome::success((3, 4)).on_success_all(|a, b| sum.set(a + b));

    assert_eq!(outcome, Outcome::success((3, 4)));
    assert_eq!(sum.get(), 7);
}

#[test]
fn maybe_map_all_spreads_the_tuple() {
    let merged = Maybe::present(("a", "b")).map_all(|a, b| format!("{a}{b}"));
    assert_eq!(merged, Maybe::present("ab".to_string()));
}

#[test]
fn maybe_and_then_all_short_circuits_absence() {
    let calls = Cell::new(0);

    let chained = Maybe::<(i32, i32)>::absent().and_then_all(|a, b| {
        calls.set(calls.get() + 1);
        Maybe::present(a + b)
    });

    assert!(chained.is_absent());
    assert_eq!(calls.get(), 0);
}

#[test]
fn maybe_filter_all_demotes_rejected_tuples() {
    let kept = Maybe::present((1, 2)).filter_all(|a, b| a < b);
    assert_eq!(kept, Maybe::present((1, 2)));

    let dropped = Maybe::present((2, 1)).filter_all(|a, b| a < b);
    assert!(dropped.is_absent());
}

#[test]
fn maybe_on_present_all_taps_each_element() {
    let seen = Cell::new((0, 0));

    let maybe = Maybe::present((8, 9)).on_present_all(|a, b| seen.set((*a, *b)));

    assert_eq!(maybe, Maybe::present((8, 9)));
    assert_eq!(seen.get(), (8, 9));
}

#[test]
fn positional_forms_cover_wider_arities() {
    let wide = Outcome::success((1, 2, 3, 4, 5)).map_all(|a, b, c, d, e| a + b + c + d + e);
    assert_eq!(wide, Outcome::success(15));

    let full = Outcome::success((1, 2, 3, 4, 5, 6, 7, 8))
        .map_all(|a, b, c, d, e, f, g, h| a + b + c + d + e + f + g + h);
    assert_eq!(full, Outcome::success(36));
}
