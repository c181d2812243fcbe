//! Published worked examples.

use clinscore_calculators::evaluate;
use clinscore_core::{Params, ScoreValue};
use pretty_assertions::assert_eq;

fn all(fields: &[&str], value: &str) -> Params {
    fields
        .iter()
        .fold(Params::new(), |p, field| p.with(field, value))
}

#[test]
fn mean_arterial_pressure_120_over_80() {
    let params = Params::new()
        .with("systolic_bp", 120)
        .with("diastolic_bp", 80);
    let a = evaluate("mean_arterial_pressure", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(93.3));
    assert_eq!(a.unit, "mmHg");
    assert_eq!(a.stage, "Normal");
}

#[test]
fn news_best_case_is_zero() {
    let params = Params::new()
        .with("respiratory_rate", "12_to_20")
        .with("oxygen_saturation", "96_or_more")
        .with("supplemental_oxygen", "no")
        .with("temperature", "36_1_to_38")
        .with("systolic_bp", "111_to_219")
        .with("heart_rate", "51_to_90")
        .with("consciousness", "alert");
    let a = evaluate("news", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Low Risk");
}

const OTTAWA: &[&str] = &[
    "age_55_or_older",
    "isolated_patellar_tenderness",
    "fibular_head_tenderness",
    "unable_to_flex_90",
    "unable_to_bear_weight",
];

#[test]
fn ottawa_knee_no_criteria() {
    let a = evaluate("ottawa_knee_rule", &all(OTTAWA, "no")).unwrap();
    assert_eq!(a.result.as_label(), Some("no_xray_needed"));
}

#[test]
fn ottawa_knee_any_single_criterion() {
    for field in OTTAWA {
        let params = all(OTTAWA, "no").with(field, "yes");
        let a = evaluate("ottawa_knee_rule", &params).unwrap();
        assert_eq!(a.result.as_label(), Some("xray_indicated"), "{field}");
    }
}

#[test]
fn herdoo2_all_negative() {
    let params = Params::new()
        .with("hyperpigmentation_edema_redness", "no")
        .with("d_dimer", "normal")
        .with("bmi", "under_30")
        .with("age", "under_65");
    let a = evaluate("herdoo2", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Low Risk");
}

#[test]
fn khorana_maximum() {
    let params = Params::new()
        .with("cancer_type", "very_high_risk")
        .with("platelet_count_350_or_more", "yes")
        .with("hemoglobin_under_10_or_esa", "yes")
        .with("leukocyte_count_over_11000", "yes")
        .with("bmi_35_or_more", "yes");
    let a = evaluate("khorana_score", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(6));
    assert_eq!(a.stage, "High Risk");
}
