//! Threshold tables and small shared vocabulary.

use clinscore_core::lookup::{at_least, below, up_to};
use clinscore_core::{Band, Params, Sex, Specialty, Tally, band_index};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const HEART_RATE: &[(f64, i64)] = &[(40.0, 3), (50.0, 1), (90.0, 0), (110.0, 1), (130.0, 2)];
const AGE: &[(f64, i64)] = &[(80.0, 4), (70.0, 3), (60.0, 2), (50.0, 1)];

#[test]
fn below_is_strict() {
    assert_eq!(below(HEART_RATE, 39.0, 3), 3);
    assert_eq!(below(HEART_RATE, 40.0, 3), 1);
    assert_eq!(below(HEART_RATE, 89.9, 3), 0);
    assert_eq!(below(HEART_RATE, 130.0, 3), 3);
}

#[test]
fn up_to_includes_the_threshold() {
    assert_eq!(up_to(HEART_RATE, 40.0, 3), 3);
    assert_eq!(up_to(HEART_RATE, 90.0, 3), 0);
    assert_eq!(up_to(HEART_RATE, 131.0, 3), 3);
}

#[test]
fn at_least_scans_descending_rows() {
    assert_eq!(at_least(AGE, 85.0, 0), 4);
    assert_eq!(at_least(AGE, 70.0, 0), 3);
    assert_eq!(at_least(AGE, 49.0, 0), 0);
}

#[test]
fn band_index_clamps_to_the_ends() {
    let bands = [
        Band::new(0.0, 10.0, "A", "", ""),
        Band::new(10.0, 20.0, "B", "", ""),
    ];
    assert_eq!(band_index(&bands, -5.0), 0);
    assert_eq!(band_index(&bands, 10.0), 1);
    assert_eq!(band_index(&bands, 25.0), 1);
}

#[test]
fn tally_max_item() {
    let mut tally = Tally::new();
    assert_eq!(tally.max_item(), None);
    tally.add("mutism", 2).add("staring", 3).add("posturing", 0);
    assert_eq!(tally.max_item(), Some(3));
}

#[test]
fn sex_token_parses_lowercase() {
    let params = Params::new().with("sex", "female");
    let sex = params.token::<Sex>("sex").unwrap();
    assert!(sex.is_female());
    assert!(!Sex::Male.is_female());
    assert!(Params::new().with("sex", "F").token::<Sex>("sex").is_err());
}

#[test]
fn specialty_round_trips_through_its_name() {
    for specialty in Specialty::ALL {
        assert_eq!(specialty.as_str().parse::<Specialty>(), Ok(specialty));
        assert_eq!(
            serde_json::to_value(specialty).unwrap(),
            serde_json::Value::from(specialty.to_string())
        );
    }
    assert!("dermatology".parse::<Specialty>().is_err());
}

proptest! {
    #[test]
    fn below_and_up_to_agree_off_threshold(v in 0.0f64..200.0) {
        let strict = below(HEART_RATE, v, 3);
        let inclusive = up_to(HEART_RATE, v, 3);
        if HEART_RATE.iter().all(|(t, _)| *t != v) {
            prop_assert_eq!(strict, inclusive);
        }
    }
}
