use outcome_rail::{Error, ErrorKind};

#[test]
fn new_defaults_to_failure_kind_without_code() {
    let err = Error::new("disk full");

    assert_eq!(err.kind(), &ErrorKind::Failure);
    assert_eq!(err.message(), "disk full");
    assert_eq!(err.code(), "");
    assert!(!err.has_code());
    assert!(err.metadata().is_empty());
    assert!(err.causes().is_empty());
}

#[test]
fn with_code_sets_the_code() {
    let err = Error::with_code("IO-17", "disk full");

    assert_eq!(err.code(), "IO-17");
    assert!(err.has_code());
}

#[test]
fn set_code_overrides_an_existing_code() {
    let err = Error::with_code("OLD", "x").set_code("NEW");
    assert_eq!(err.code(), "NEW");
}

#[test]
fn kind_factories_set_their_discriminant() {
    assert_eq!(Error::validation("v").kind(), &ErrorKind::Validation);
    assert_eq!(Error::not_found("n").kind(), &ErrorKind::NotFound);
    assert_eq!(Error::conflict("c").kind(), &ErrorKind::Conflict);
    assert_eq!(
        Error::authentication("a").kind(),
        &ErrorKind::Authentication
    );
    assert_eq!(Error::authorization("z").kind(), &ErrorKind::Authorization);
}

#[test]
fn custom_kind_carries_its_name() {
    let err = Error::custom("rate_limited", "slow down");

    assert_eq!(err.kind(), &ErrorKind::Custom("rate_limited".into()));
    assert_eq!(err.kind().as_str(), "rate_limited");
}

#[test]
fn equality_is_structural_not_identity() {
    let a = Error::with_code("E1", "same").with_metadata("k", "v");
    let b = Error::with_code("E1", "same").with_metadata("k", "v");
    let c = Error::with_code("E1", "same").with_metadata("k", "other");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Error::validation("same"));
}

#[test]
fn metadata_preserves_insertion_order() {
    let err = Error::new("x")
        .with_metadata("zeta", "1")
        .with_metadata("alpha", "2")
        .with_metadata("mid", "3");

    let keys: Vec<&str> = err.metadata().iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn metadata_overwrite_keeps_position_and_uniqueness() {
    let err = Error::new("x")
        .with_metadata("first", "1")
        .with_metadata("second", "2")
        .with_metadata("first", "updated");

    assert_eq!(err.metadata().len(), 2);
    assert_eq!(err.metadata().get("first"), Some("updated"));

    let keys: Vec<&str> = err.metadata().iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["first", "second"]);
}

#[test]
fn with_metadata_produces_a_new_value() {
    let base = Error::new("x").with_metadata("k", "v");
    let extended = base.clone().with_metadata("k2", "v2");

    assert_eq!(base.metadata().len(), 1);
    assert_eq!(extended.metadata().len(), 2);
}

#[test]
fn aggregate_keeps_children_in_order() {
    let err = Error::aggregate([Error::new("a"), Error::new("b"), Error::new("c")]);

    assert_eq!(err.kind(), &ErrorKind::Aggregate);
    let messages: Vec<&str> = err.causes().iter().map(Error::message).collect();
    assert_eq!(messages, ["a", "b", "c"]);
}

#[test]
fn aggregate_flattens_nested_aggregates_one_level() {
    let inner = Error::aggregate([Error::new("a"), Error::new("b")]);
    let outer = Error::aggregate([inner, Error::new("c")]);

    let messages: Vec<&str> = outer.causes().iter().map(Error::message).collect();
    assert_eq!(messages, ["a", "b", "c"]);
    assert!(outer.causes().iter().all(|e| e.kind() != &ErrorKind::Aggregate));
}

#[test]
fn aggregate_of_aggregates_stays_flat() {
    // Aggregates can only be built through the flattening constructor, so
    // repeated wrapping can never produce nesting deeper than one level.
    let level1 = Error::aggregate([Error::new("a"), Error::new("b")]);
    let level2 = Error::aggregate([level1, Error::new("c")]);
    let level3 = Error::aggregate([level2, Error::new("d")]);

    let messages: Vec<&str> = level3.causes().iter().map(Error::message).collect();
    assert_eq!(messages, ["a", "b", "c", "d"]);
}

#[test]
#[should_panic(expected = "at least one child error")]
fn aggregate_of_nothing_is_a_contract_violation() {
    let _ = Error::aggregate([]);
}

#[test]
fn display_shows_message_and_code() {
    assert_eq!(Error::new("boom").to_string(), "boom");
    assert_eq!(
        Error::with_code("E7", "boom").to_string(),
        "boom (code: E7)"
    );
}

#[test]
fn display_shows_cause_count_for_aggregates() {
    let err = Error::aggregate([Error::new("a"), Error::new("b")]);
    assert_eq!(err.to_string(), "multiple errors occurred [2 causes]");
}

#[test]
fn from_display_wraps_foreign_errors() {
    let err = "abc".parse::<i32>().map_err(Error::from_display).unwrap_err();

    assert_eq!(err.kind(), &ErrorKind::Failure);
    assert_eq!(err.message(), "invalid digit found in string");
}

#[test]
fn source_points_at_the_first_cause() {
    use core::error::Error as _;

    let plain = Error::new("boom");
    assert!(plain.source().is_none());

    let aggregate = Error::aggregate([Error::new("first"), Error::new("second")]);
    let source = aggregate.source().unwrap();
    assert_eq!(source.to_string(), "first");
}

#[test]
fn into_causes_is_empty_for_plain_errors() {
    assert!(Error::new("boom").into_causes().is_empty());
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn error_round_trips_through_json() {
        let err = Error::with_code("E1", "boom")
            .with_metadata("zeta", "1")
            .with_metadata("alpha", "2");

        let json = serde_json::to_string(&err).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();

        assert_eq!(err, back);
    }

    #[test]
    fn metadata_serializes_in_insertion_order() {
        let err = Error::new("x")
            .with_metadata("zeta", "1")
            .with_metadata("alpha", "2");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains(r#""zeta":"1","alpha":"2""#));
    }

    #[test]
    fn aggregate_round_trips_through_json() {
        let err = Error::aggregate([Error::new("a"), Error::validation("b")]);

        let json = serde_json::to_string(&err).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();

        assert_eq!(err, back);
        assert_eq!(back.causes().len(), 2);
    }
}
