//! Typed extraction from the flat parameter map.

use clinscore_core::{InvalidParameter, ParamRange, Params, YesNo};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
enum Band {
    #[serde(rename = "8_or_less")]
    EightOrLess,
    #[serde(rename = "12_to_20")]
    TwelveToTwenty,
}

#[test]
fn number_accepts_integers_and_floats() {
    let p = Params::new().with("a", 3).with("b", 2.5);
    assert_eq!(p.number("a").unwrap(), 3.0);
    assert_eq!(p.number("b").unwrap(), 2.5);
}

#[test]
fn number_rejects_strings_with_field_name() {
    let p = Params::new().with("age", "old");
    let err = p.number("age").unwrap_err();
    assert_eq!(err.field, "age");
    assert!(err.reason.contains("expected a number"));
}

#[test]
fn missing_field_is_invalid_parameter() {
    let err = Params::new().number("age").unwrap_err();
    assert_eq!(err, InvalidParameter::missing("age"));
}

#[test]
fn null_counts_as_absent() {
    let p = Params::new().with("ef", json!(null));
    assert_eq!(p.optional_number("ef").unwrap(), None);
    assert!(p.number("ef").is_err());
}

#[test]
fn integer_accepts_integral_floats_only() {
    let p = Params::new().with("a", 4.0).with("b", 4.5);
    assert_eq!(p.integer("a").unwrap(), 4);
    assert!(p.integer("b").is_err());
}

#[test]
fn token_lists_allowed_variants_on_error() {
    let p = Params::new().with("rr", "7_or_less");
    let err = p.token::<Band>("rr").unwrap_err();
    assert_eq!(err.field, "rr");
    assert!(err.reason.contains("8_or_less"), "{}", err.reason);
    assert!(err.reason.contains("12_to_20"), "{}", err.reason);

    let ok = Params::new().with("rr", "12_to_20");
    assert_eq!(ok.token::<Band>("rr").unwrap(), Band::TwelveToTwenty);
}

#[test]
fn yes_no_is_case_sensitive() {
    let p = Params::new()
        .with("a", "yes")
        .with("b", "no")
        .with("c", "Yes");
    assert!(p.yes_no("a").unwrap());
    assert!(!p.yes_no("b").unwrap());
    assert!(p.yes_no("c").is_err());
    assert_eq!(YesNo::from(true), YesNo::Yes);
}

#[test]
fn deny_unknown_names_the_stray_field() {
    let p = Params::new().with("age", 40).with("agee", 41);
    let err = p.deny_unknown(&["age"]).unwrap_err();
    assert_eq!(err, InvalidParameter::unknown("agee"));
    assert!(p.deny_unknown(&["age", "agee"]).is_ok());
}

#[test]
fn try_from_value_requires_object() {
    assert!(Params::try_from(json!({"a": 1})).is_ok());
    let err = Params::try_from(json!([1, 2])).unwrap_err();
    assert_eq!(err.field, "params");
}

#[test]
fn range_check_bounds_are_inclusive() {
    let range = ParamRange::new(18.0, 120.0);
    assert!(range.check("age", 18.0).is_ok());
    assert!(range.check("age", 120.0).is_ok());
    assert!(range.check("age", 17.9).is_err());
    assert!(range.check("age", 120.1).is_err());
    assert!(range.check("age", f64::NAN).is_err());
}

#[test]
fn range_exclusive_min_rejects_the_bound() {
    let range = ParamRange::above(0.0, 10.0);
    assert!(range.check("x", 0.0).is_err());
    assert!(range.check("x", 0.001).is_ok());
    assert_eq!(range.to_string(), "(0, 10]");
}

#[test]
fn integer_range_rejects_fractions_with_specific_reason() {
    let range = ParamRange::integer(0.0, 10.0);
    let err = range.check("n", 2.5).unwrap_err();
    assert!(err.reason.contains("whole number"));
    assert_eq!(range.check_int("n", 10).unwrap(), 10);
    assert!(range.check_int("n", 11).is_err());
}
