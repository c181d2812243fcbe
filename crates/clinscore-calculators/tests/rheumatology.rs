use clinscore_calculators::evaluate;
use clinscore_core::{Params, ScoreValue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn gout() -> Params {
    Params::new()
        .with("entry_criterion", "yes")
        .with("msu_crystals_present", "not_tested")
        .with("joint_pattern", "other_joint")
        .with("episode_characteristics", "one")
        .with("typical_episodes", "one")
        .with("tophus_evidence", "absent")
        .with("serum_urate", "6_to_8")
        .with("synovial_fluid_analysis", "not_done")
        .with("imaging_urate_deposition", "absent")
        .with("imaging_joint_damage", "absent")
}

#[test]
fn gout_below_threshold() {
    let a = evaluate("acr_eular_gout", &gout()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(4));
    assert_eq!(a.stage, "Does not meet criteria");
}

#[test]
fn gout_threshold_is_eight() {
    let params = gout()
        .with("joint_pattern", "first_mtp")
        .with("episode_characteristics", "two")
        .with("serum_urate", "8_to_10");
    let a = evaluate("acr_eular_gout", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(8));
    assert_eq!(a.stage, "Meets criteria for gout");
}

#[test]
fn gout_negative_items_subtract() {
    let params = gout()
        .with("serum_urate", "under_4")
        .with("synovial_fluid_analysis", "negative_msu");
    let a = evaluate("acr_eular_gout", &params).unwrap();
    // 0 + 1 + 1 - 4 - 2
    assert_eq!(a.result, ScoreValue::Integer(-4));
    assert_eq!(
        a.detail("breakdown").and_then(|b| b.get("synovial_fluid_analysis")),
        Some(&json!(-2))
    );
}

#[test]
fn gout_crystals_are_sufficient() {
    let params = gout().with("msu_crystals_present", "yes");
    let a = evaluate("acr_eular_gout", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("definite_gout"));
}

#[test]
fn gout_entry_criterion_gates_everything() {
    let params = gout()
        .with("entry_criterion", "no")
        .with("msu_crystals_present", "yes");
    let a = evaluate("acr_eular_gout", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("entry_criterion_not_met"));
}

fn cdai(tender: i64, swollen: i64, patient: f64, provider: f64) -> Params {
    Params::new()
        .with("tender_joint_count", tender)
        .with("swollen_joint_count", swollen)
        .with("patient_global_activity", patient)
        .with("provider_global_activity", provider)
}

#[test]
fn cdai_inclusive_upper_limits() {
    let params = cdai(0, 0, 1.4, 1.4);
    let remission = evaluate("cdai_rheumatoid_arthritis", &params).unwrap();
    assert_eq!(remission.result, ScoreValue::Decimal(2.8));
    assert_eq!(remission.stage, "Remission");

    let params = cdai(4, 2, 2.0, 2.0);
    let low = evaluate("cdai_rheumatoid_arthritis", &params).unwrap();
    assert_eq!(low.result, ScoreValue::Decimal(10.0));
    assert_eq!(low.stage, "Low Activity");

    let params = cdai(10, 8, 2.0, 2.0);
    let moderate = evaluate("cdai_rheumatoid_arthritis", &params).unwrap();
    assert_eq!(moderate.stage, "Moderate Activity");

    let params = cdai(10, 8, 2.5, 2.0);
    let high = evaluate("cdai_rheumatoid_arthritis", &params).unwrap();
    assert_eq!(high.result, ScoreValue::Decimal(22.5));
    assert_eq!(high.stage, "High Activity");
    assert_eq!(high.detail("joint_count_total"), Some(&json!(18)));
}

#[test]
fn cdai_rejects_more_than_28_joints() {
    let params = cdai(29, 0, 0.0, 0.0);
    let err = evaluate("cdai_rheumatoid_arthritis", &params).unwrap_err();
    assert!(err.to_string().contains("'tender_joint_count'"));
}

proptest! {
    #[test]
    fn cdai_stays_within_zero_to_76(
        tender in 0i64..=28,
        swollen in 0i64..=28,
        patient in 0.0f64..=10.0,
        provider in 0.0f64..=10.0,
    ) {
        let params = cdai(tender, swollen, patient, provider);
        let a = evaluate("cdai_rheumatoid_arthritis", &params).unwrap();
        let value = a.result.as_f64().unwrap();
        prop_assert!((0.0..=76.0).contains(&value));
    }
}
