use clinscore_calculators::evaluate;
use clinscore_core::{Params, ScoreValue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

const BRUE_FIELDS: &[&str] = &[
    "age_under_1_year",
    "asymptomatic_on_presentation",
    "no_explanation_after_exam",
    "sudden_brief_resolved_episode",
    "episode_duration_under_1_min",
    "age_over_2_months",
    "no_history_prematurity",
    "no_prior_brue",
    "no_cpr_by_provider",
];

fn brue() -> Params {
    BRUE_FIELDS
        .iter()
        .fold(Params::new(), |p, f| p.with(f, "yes"))
        .with("cyanosis_or_pallor", "yes")
        .with("breathing_changes", "no")
        .with("tone_changes", "no")
        .with("altered_responsiveness", "no")
}

#[test]
fn brue_lower_risk_when_every_criterion_met() {
    let a = evaluate("brue", &brue()).unwrap();
    assert_eq!(a.result.as_label(), Some("brue_lower_risk"));
    assert_eq!(a.stage, "BRUE - Lower Risk");
}

#[test]
fn brue_higher_risk_lists_unmet_criteria() {
    let params = brue().with("no_history_prematurity", "no");
    let a = evaluate("brue", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("brue_higher_risk"));
    assert_eq!(
        a.detail("unmet_lower_risk_criteria"),
        Some(&json!(["no_history_prematurity"]))
    );
}

#[test]
fn brue_requires_entry_criteria_and_an_event() {
    let params = brue().with("age_under_1_year", "no");
    let a = evaluate("brue", &params).unwrap();
    assert_eq!(a.stage, "Not BRUE");

    let params = brue().with("cyanosis_or_pallor", "no");
    let b = evaluate("brue", &params).unwrap();
    assert_eq!(b.result.as_label(), Some("not_brue"));
}

fn cheops() -> Params {
    Params::new()
        .with("cry", "no_crying")
        .with("facial", "smiling")
        .with("verbal", "positive")
        .with("torso", "neutral")
        .with("touch", "not_touching")
        .with("legs", "neutral")
}

#[test]
fn cheops_floor_is_four() {
    let a = evaluate("cheops", &cheops()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(4));
    assert_eq!(a.stage, "No Pain");
}

#[test]
fn cheops_ceiling_is_thirteen() {
    let params = Params::new()
        .with("cry", "screaming")
        .with("facial", "grimace")
        .with("verbal", "pain_complaints")
        .with("torso", "shifting_tense")
        .with("touch", "reaching_touching")
        .with("legs", "squirming_tensed");
    let a = evaluate("cheops", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(13));
    assert_eq!(a.stage, "Severe Pain");
}

#[test]
fn cheops_mild_pain_from_five() {
    let params = cheops().with("facial", "composed");
    let a = evaluate("cheops", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(5));
    assert_eq!(a.stage, "Mild to Moderate Pain");
}

fn gir(rate: f64, dextrose: f64, weight: f64) -> Params {
    Params::new()
        .with("infusion_rate", rate)
        .with("dextrose_concentration", dextrose)
        .with("weight", weight)
}

#[test]
fn gir_neonatal_maintenance() {
    let params = gir(10.0, 10.0, 3.0);
    let a = evaluate("glucose_infusion_rate", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(5.56));
    assert_eq!(a.stage, "Normal/Physiologic Range");
    assert_eq!(a.detail("fluid_ml_kg_day"), Some(&json!(80.0)));
}

#[test]
fn gir_boundary_belongs_to_upper_band() {
    let params = gir(12.0, 10.0, 5.0);
    let a = evaluate("glucose_infusion_rate", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(4.0));
    assert_eq!(a.stage, "Normal/Physiologic Range");
}

#[test]
fn gir_flags_central_access() {
    let params = gir(10.0, 20.0, 3.0);
    let a = evaluate("glucose_infusion_rate", &params).unwrap();
    assert!(a.interpretation.contains("central venous access"));
}

#[test]
fn gir_rejects_zero_weight() {
    let params = gir(10.0, 10.0, 0.0);
    let err = evaluate("glucose_infusion_rate", &params).unwrap_err();
    assert!(err.to_string().contains("'weight'"));
}

fn phoenix() -> Params {
    Params::new()
        .with("age", 5)
        .with("suspected_infection", "yes")
        .with("respiratory_support", "none")
        .with("vasoactive_medications", 0)
        .with("glasgow_coma_scale", 15)
        .with("pupil_reactivity", "both_reactive")
}

#[test]
fn phoenix_without_infection_is_not_applicable() {
    let params = phoenix().with("suspected_infection", "no");
    let a = evaluate("phoenix_sepsis", &params).unwrap();
    assert_eq!(a.stage, "Not Applicable");
    assert_eq!(a.result, ScoreValue::Integer(0));
}

#[test]
fn phoenix_respiratory_sepsis_without_shock() {
    let params = phoenix()
        .with("respiratory_support", "invasive_mechanical_ventilation")
        .with("pao2_fio2_ratio", 150);
    let a = evaluate("phoenix_sepsis", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.stage, "Sepsis");
    assert_eq!(
        a.detail("clinical_status"),
        Some(&json!({"sepsis": true, "septic_shock": false}))
    );
}

#[test]
fn phoenix_septic_shock_needs_cardiovascular_point() {
    let params = phoenix()
        .with("respiratory_support", "invasive_mechanical_ventilation")
        .with("pao2_fio2_ratio", 150)
        .with("vasoactive_medications", 1);
    let a = evaluate("phoenix_sepsis", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(3));
    assert_eq!(a.stage, "Septic Shock");
}

#[test]
fn phoenix_non_invasive_support_caps_respiratory_points() {
    let params = phoenix()
        .with("respiratory_support", "non_invasive_ventilation")
        .with("pao2_fio2_ratio", 50);
    let a = evaluate("phoenix_sepsis", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(1));
    assert_eq!(a.stage, "No Sepsis");
}

#[test]
fn phoenix_fixed_pupils_and_coagulopathy() {
    let params = phoenix()
        .with("pupil_reactivity", "both_fixed")
        .with("platelets", 50)
        .with("inr", 2.0)
        .with("d_dimer", 5.0);
    let a = evaluate("phoenix_sepsis", &params).unwrap();
    // neurologic 2 + coagulation capped at 2
    assert_eq!(a.result, ScoreValue::Integer(4));
    assert_eq!(a.stage, "Sepsis");
}

proptest! {
    #[test]
    fn phoenix_score_is_bounded(
        vasoactives in 0i64..=6,
        gcs in 3i64..=15,
        pf in 1.0f64..700.0,
    ) {
        let params = phoenix()
            .with("respiratory_support", "invasive_mechanical_ventilation")
            .with("pao2_fio2_ratio", pf)
            .with("vasoactive_medications", vasoactives)
            .with("glasgow_coma_scale", gcs);
        let a = evaluate("phoenix_sepsis", &params).unwrap();
        let score = a.result.as_i64().unwrap();
        prop_assert!((0..=13).contains(&score));
    }
}

const WAT_1: &[&str] = &[
    "state_sleep_wake_cycle",
    "tremor",
    "increased_muscle_tone",
    "excoriation",
    "myoclonus_seizures",
    "tachypnea",
    "sweating",
    "fever",
    "frequent_yawning_sneezing",
    "nasal_stuffiness",
    "poor_feeding_vomiting",
];

fn wat_1(weeks: i64, item: i64) -> Params {
    WAT_1
        .iter()
        .fold(Params::new(), |p, f| p.with(f, item))
        .with("post_menstrual_age_weeks", weeks)
}

#[test]
fn wat_1_no_withdrawal_signs() {
    let a = evaluate("wat_1_pediatric_withdrawal", &wat_1(40, 0)).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "None to Mild");
    assert_eq!(a.detail("age_category"), Some(&json!("term_infant")));
}

#[test]
fn wat_1_mild_to_moderate_from_three() {
    let params = wat_1(120, 0).with("tremor", 2).with("sweating", 1);
    let a = evaluate("wat_1_pediatric_withdrawal", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(3));
    assert_eq!(a.stage, "Mild to Moderate");
    assert_eq!(a.detail("age_category"), Some(&json!("older_child")));
}

#[test]
fn wat_1_maximum_in_preterm_infant() {
    let a = evaluate("wat_1_pediatric_withdrawal", &wat_1(30, 3)).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(33));
    assert_eq!(a.stage, "Moderate to Severe");
    assert_eq!(a.detail("age_category"), Some(&json!("preterm")));
    assert!(a.interpretation.starts_with("WAT-1 33/33. For preterm infants"));
}

#[test]
fn wat_1_rejects_item_above_three() {
    let err = evaluate("wat_1_pediatric_withdrawal", &wat_1(40, 0).with("fever", 4)).unwrap_err();
    assert!(err.to_string().contains("'fever'"));
}
