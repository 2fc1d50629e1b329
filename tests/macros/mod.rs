use outcome_rail::{failure, try_outcome, Error, Outcome};

#[test]
fn failure_macro_formats_the_message() {
    let outcome: Outcome<()> = failure!("missing field {}", "email");

    assert_eq!(outcome.error().message(), "missing field email");
    assert!(!outcome.error().has_code());
}

#[test]
fn failure_macro_accepts_a_code() {
    let outcome: Outcome<i32> = failure!(code = "CFG-3", "bad port {}", 70000);

    assert_eq!(outcome.error().code(), "CFG-3");
    assert_eq!(outcome.error().message(), "bad port 70000");
}

#[test]
fn try_outcome_unwraps_successes() {
    fn double(n: i32) -> Outcome<i32> {
        let value = try_outcome!(Outcome::success(n));
        Outcome::success(value * 2)
    }

    assert_eq!(double(4), Outcome::success(8));
}

#[test]
fn try_outcome_early_returns_failures() {
    fn broken() -> Outcome<i32> {
        let value = try_outcome!(Outcome::<i32>::failure(Error::with_code("E1", "no value")));
        Outcome::success(value)
    }

    let outcome = broken();
    assert_eq!(outcome.error().code(), "E1");
}
