use clinscore_calculators::evaluate;
use clinscore_core::{Params, ScoreValue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn bwps() -> Params {
    Params::new()
        .with("temperature", "under_99")
        .with("cns_effects", "absent")
        .with("gi_hepatic_dysfunction", "absent")
        .with("cardiovascular_dysfunction", "absent")
        .with("tachycardia", "under_90")
        .with("atrial_fibrillation", "absent")
        .with("precipitant_history", "absent")
}

#[test]
fn bwps_normal_findings_score_zero() {
    let a = evaluate("burch_wartofsky", &bwps()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Unlikely");
}

#[test]
fn bwps_step_points() {
    let params = bwps()
        .with("temperature", "101_102")
        .with("tachycardia", "120_129")
        .with("atrial_fibrillation", "present");
    let a = evaluate("burch_wartofsky", &params).unwrap();
    // 15 + 15 + 10
    assert_eq!(a.result, ScoreValue::Integer(40));
    assert_eq!(a.stage, "Impending");
}

#[test]
fn bwps_storm_threshold_is_inclusive() {
    let params = bwps()
        .with("cns_effects", "severe_coma_seizure")
        .with("cardiovascular_dysfunction", "severe_pulmonary_edema");
    let a = evaluate("burch_wartofsky", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(45));
    assert_eq!(a.stage, "Highly Suggestive");
}

#[test]
fn bwps_rejects_unlisted_temperature_band() {
    let params = bwps().with("temperature", "105");
    let err = evaluate("burch_wartofsky", &params).unwrap_err();
    assert!(err.to_string().contains("'temperature'"));
}

fn myxedema() -> Params {
    Params::new()
        .with("body_temperature", "normal_37")
        .with("central_nervous_system", "normal")
        .with("cardiovascular_dysfunction", "normal")
        .with("gastrointestinal_dysfunction", "normal")
        .with("metabolic_dysfunction", "normal")
        .with("precipitating_event", "none")
}

#[test]
fn myxedema_normal_is_unlikely() {
    let a = evaluate("myxedema_coma", &myxedema()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Unlikely");
}

#[test]
fn myxedema_diagnostic_presentation() {
    let params = myxedema()
        .with("body_temperature", "moderate_hypothermia_32_35")
        .with("central_nervous_system", "stupor_semicoma")
        .with(
            "cardiovascular_dysfunction",
            "moderate_bradycardia_hypotension",
        )
        .with("precipitating_event", "moderate_stress");
    let a = evaluate("myxedema_coma", &params).unwrap();
    // 15 + 25 + 10 + 10
    assert_eq!(a.result, ScoreValue::Integer(60));
    assert_eq!(a.stage, "Diagnostic");
}

#[test]
fn myxedema_at_risk_band() {
    let params = myxedema()
        .with("central_nervous_system", "moderate_somnolence")
        .with("body_temperature", "mild_hypothermia_35_37")
        .with("metabolic_dysfunction", "severe_hyponatremia_hypoglycemia");
    let a = evaluate("myxedema_coma", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(45));
    assert_eq!(a.stage, "At Risk");
}

proptest! {
    #[test]
    fn bwps_score_is_a_multiple_of_five(
        temp in prop::sample::select(vec![
            "under_99", "99_100", "100_101", "101_102", "102_103", "103_104", "over_104",
        ]),
        hr in prop::sample::select(vec![
            "under_90", "90_109", "110_119", "120_129", "130_139", "over_140",
        ]),
    ) {
        let params = bwps().with("temperature", temp).with("tachycardia", hr);
        let a = evaluate("burch_wartofsky", &params).unwrap();
        let score = a.result.as_i64().unwrap();
        prop_assert_eq!(score % 5, 0);
        prop_assert!((0..=55).contains(&score));
    }
}

const DKA_MPM: &[&str] = &[
    "severe_comorbidities",
    "ph_less_than_7",
    "insulin_over_50_units",
    "glucose_over_300_at_12h",
    "depressed_mental_state_24h",
    "fever_24h",
];

fn dka_mpm(answer: &str) -> Params {
    DKA_MPM.iter().fold(Params::new(), |p, f| p.with(f, answer))
}

#[test]
fn dka_mpm_no_criteria() {
    let a = evaluate("dka_mpm_score", &dka_mpm("no")).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Low Risk");
    assert_eq!(a.detail("mortality_rate"), Some(&json!("0.86%")));
}

#[test]
fn dka_mpm_high_risk_from_fifteen() {
    let params = dka_mpm("no")
        .with("severe_comorbidities", "yes")
        .with("ph_less_than_7", "yes")
        .with("insulin_over_50_units", "yes");
    let a = evaluate("dka_mpm_score", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(14));
    assert_eq!(a.stage, "Low Risk");

    let a = evaluate("dka_mpm_score", &params.with("fever_24h", "yes")).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(17));
    assert_eq!(a.stage, "High Risk");
    assert_eq!(a.detail("mortality_rate"), Some(&json!("20.8%")));
}

#[test]
fn dka_mpm_timing_splits_points_by_phase() {
    let a = evaluate("dka_mpm_score", &dka_mpm("yes")).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(25));
    assert_eq!(a.stage, "Very High Risk");
    assert_eq!(
        a.detail("timing"),
        Some(&json!({"presentation": 10, "12_hours": 8, "24_hours": 7}))
    );
}
