//! Registry-wide guarantees: identifiers, band tables, parameter hygiene.

use std::collections::HashSet;

use clinscore_calculators::error::CalculatorError;
use clinscore_calculators::{all_calculators, by_specialty, evaluate, get_calculator};
use clinscore_core::{Params, Specialty, is_contiguous};
use pretty_assertions::assert_eq;

#[test]
fn identifiers_are_unique_snake_case() {
    let mut seen = HashSet::new();
    for calc in all_calculators() {
        let id = calc.id();
        assert!(seen.insert(id), "duplicate id {id}");
        assert!(
            id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "id {id} is not snake_case"
        );
        assert!(!calc.name().is_empty());
    }
    assert!(all_calculators().len() >= 100);
}

#[test]
fn every_band_table_is_contiguous() {
    for calc in all_calculators() {
        let bands = calc.bands();
        if !bands.is_empty() {
            assert!(is_contiguous(bands), "{} has a gap or overlap", calc.id());
        }
    }
}

#[test]
fn declared_parameters_are_unique() {
    for calc in all_calculators() {
        let params = calc.parameters();
        let unique: HashSet<_> = params.iter().collect();
        assert_eq!(unique.len(), params.len(), "{} repeats a parameter", calc.id());
        assert!(!params.is_empty(), "{} declares no parameters", calc.id());
    }
}

#[test]
fn lookup_by_id() {
    let calc = get_calculator("khorana_score").unwrap();
    assert_eq!(calc.specialty(), Specialty::Hematology);
    assert!(get_calculator("does_not_exist").is_none());
}

#[test]
fn every_specialty_is_populated() {
    for specialty in Specialty::ALL {
        assert!(by_specialty(specialty).count() > 0, "{specialty:?} is empty");
    }
}

#[test]
fn unknown_calculator_is_an_error() {
    let err = evaluate("nope", &Params::new()).unwrap_err();
    assert!(matches!(err, CalculatorError::UnknownCalculator(ref id) if id == "nope"));
}

#[test]
fn undeclared_fields_are_rejected() {
    let params = Params::new()
        .with("systolic_bp", 120)
        .with("diastolic_bp", 80)
        .with("heart_rate", 70);
    let err = evaluate("mean_arterial_pressure", &params).unwrap_err();
    match err {
        CalculatorError::InvalidParameter(e) => assert_eq!(e.field, "heart_rate"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn malformed_values_are_rejected_everywhere() {
    for calc in all_calculators() {
        let params = calc
            .parameters()
            .iter()
            .fold(Params::new(), |p, f| p.with(f, "not_a_value"));
        let err = calc.evaluate(&params).unwrap_err();
        assert!(
            calc.parameters().contains(&err.field.as_str()),
            "{} blamed undeclared field {}",
            calc.id(),
            err.field
        );
    }
}

#[test]
fn evaluation_is_deterministic() {
    let params = Params::new()
        .with("cancer_type", "high_risk")
        .with("platelet_count_350_or_more", "yes")
        .with("hemoglobin_under_10_or_esa", "no")
        .with("leukocyte_count_over_11000", "yes")
        .with("bmi_35_or_more", "no");
    let first = evaluate("khorana_score", &params).unwrap();
    let second = evaluate("khorana_score", &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn summary_lists_parameters() {
    let summary = get_calculator("mean_arterial_pressure").unwrap().summary();
    assert_eq!(summary.id, "mean_arterial_pressure");
    assert_eq!(summary.parameters, vec!["systolic_bp", "diastolic_bp"]);
}
